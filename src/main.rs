use anyhow::Result;
use chrono::Local;
use clap::Parser;
use ghrls::runtime::RealRuntime;

/// ghrls - List & Describe GitHub Releases
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for accessing private repositories or
/// avoiding rate limits.
///
/// Examples:
///   ghrls list kubernetes/kubernetes
///   ghrls get kubernetes/kubernetes v1.5.2
#[derive(Parser, Debug)]
#[command(author, version = env!("GHRLS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List tags and releases of a repository
    List(ListArgs),

    /// Describe a single release
    Get(GetArgs),

    /// Print the version number
    Version,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repository: String,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repository: String,

    /// The tag whose release should be described
    #[arg(value_name = "TAG")]
    pub tag: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;
    let tz = *Local::now().offset();

    match cli.command {
        Commands::List(args) => {
            ghrls::commands::list(runtime, &args.repository, cli.api_url, tz).await?
        }
        Commands::Get(args) => {
            ghrls::commands::get(runtime, &args.repository, &args.tag, cli.api_url, tz).await?
        }
        Commands::Version => ghrls::commands::version(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_list_parsing() {
        let cli = Cli::try_parse_from(["ghrls", "list", "owner/repo"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.repository, "owner/repo");
            }
            _ => panic!("Expected List command"),
        }
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_cli_get_parsing() {
        let cli = Cli::try_parse_from(["ghrls", "get", "owner/repo", "v1.0.0"]).unwrap();
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.repository, "owner/repo");
                assert_eq!(args.tag, "v1.0.0");
            }
            _ => panic!("Expected Get command"),
        }
    }

    #[test]
    fn test_cli_get_requires_tag() {
        let result = Cli::try_parse_from(["ghrls", "get", "owner/repo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_api_url_parsing() {
        let cli =
            Cli::try_parse_from(["ghrls", "list", "owner/repo", "--api-url", "http://localhost"])
                .unwrap();
        assert_eq!(cli.api_url, Some("http://localhost".to_string()));
    }

    #[test]
    fn test_cli_version_parsing() {
        let cli = Cli::try_parse_from(["ghrls", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["ghrls", "owner/repo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_list_extra_args_fails() {
        let result = Cli::try_parse_from(["ghrls", "list", "owner", "repo"]);
        assert!(result.is_err());
    }
}
