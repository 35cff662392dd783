//! GitHub API client, wire types, and tag/release reconciliation.

mod client;
mod reconcile;
mod repo;
mod types;

#[cfg(test)]
pub use client::MockReleaseLister;
pub use client::{GitHub, ReleaseLister};
pub use repo::GitHubRepo;
pub use types::{Author, CommitInfo, Release, ReleaseAsset, ReleaseInfo, Tag, TagInfo};
