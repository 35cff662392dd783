use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A tag as returned by `GET /repos/{owner}/{repo}/tags`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TagInfo {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    pub login: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// A release as returned by the releases endpoints. Most fields are
/// optional on the wire; draft releases have no published_at at all.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseInfo {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// The commit a tag points at, from `GET /repos/{owner}/{repo}/commits/{ref}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CommitInfo {
    pub sha: String,
}

/// A repository tag, optionally decorated with its release.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub release: Option<Release>,
}

/// Release metadata in presentation form. Fields the API omits are
/// empty strings so they render as blank cells, not missing rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Release {
    pub name: String,
    pub author: String,
    pub body: String,
    pub commit: String,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub url: String,
    pub artifact_urls: Vec<String>,
}

impl From<ReleaseInfo> for Release {
    fn from(info: ReleaseInfo) -> Self {
        Release {
            name: info.name.unwrap_or_default(),
            author: info.author.map(|a| a.login).unwrap_or_default(),
            body: info.body.unwrap_or_default(),
            commit: String::new(),
            created_at: info.created_at,
            published_at: info.published_at,
            url: info.html_url,
            artifact_urls: info
                .assets
                .into_iter()
                .map(|a| a.browser_download_url)
                .collect(),
        }
    }
}
