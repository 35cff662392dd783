/// Version and revision are baked in at build time by build.rs.
pub fn version_string() -> String {
    format!(
        "ghrls version {}, build {}",
        env!("GHRLS_VERSION"),
        env!("GHRLS_REVISION")
    )
}

/// Print the version number
pub fn version() {
    println!("{}", version_string());
}
