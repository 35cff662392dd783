use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::http::check_response;

use super::reconcile::reconcile;
use super::repo::GitHubRepo;
use super::types::{CommitInfo, Release, ReleaseInfo, Tag, TagInfo};

// default: 30, max: 100
// https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api
const PER_PAGE: usize = 100;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseLister: Send + Sync {
    /// All tags of the repository, each carrying its release when one exists.
    async fn list_tags_and_releases(&self, repo: &GitHubRepo) -> Result<Vec<Tag>>;

    /// Release metadata plus the tagged commit for a single tag.
    async fn describe_release(&self, repo: &GitHubRepo, tag: &str) -> Result<Tag>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "https://api.github.com".to_string());
        Self { client, api_url }
    }
}

#[async_trait]
impl ReleaseLister for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn list_tags_and_releases(&self, repo: &GitHubRepo) -> Result<Vec<Tag>> {
        let tags = GitHub::fetch_tags(repo, &self.client, &self.api_url).await?;
        let releases = GitHub::fetch_releases(repo, &self.client, &self.api_url).await?;

        Ok(reconcile(tags, releases))
    }

    #[tracing::instrument(skip(self, repo))]
    async fn describe_release(&self, repo: &GitHubRepo, tag: &str) -> Result<Tag> {
        let info = GitHub::fetch_release_by_tag(repo, tag, &self.client, &self.api_url).await?;
        let commit = GitHub::fetch_commit(repo, tag, &self.client, &self.api_url).await?;

        let name = info.tag_name.clone();
        let mut release = Release::from(info);
        release.commit = commit.sha;

        Ok(Tag {
            name,
            release: Some(release),
        })
    }
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_tags(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
    ) -> Result<Vec<TagInfo>> {
        let url = format!("{}/repos/{}/{}/tags", api_url, repo.owner, repo.repo);
        GitHub::fetch_paged(client, &url, "tags").await
    }

    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_releases(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
    ) -> Result<Vec<ReleaseInfo>> {
        let url = format!("{}/repos/{}/{}/releases", api_url, repo.owner, repo.repo);
        GitHub::fetch_paged(client, &url, "releases").await
    }

    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_release_by_tag(
        repo: &GitHubRepo,
        tag: &str,
        client: &Client,
        api_url: &str,
    ) -> Result<ReleaseInfo> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            api_url, repo.owner, repo.repo, tag
        );

        debug!("Fetching release from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let info = check_response(response)?
            .json::<ReleaseInfo>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(info)
    }

    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_commit(
        repo: &GitHubRepo,
        reference: &str,
        client: &Client,
        api_url: &str,
    ) -> Result<CommitInfo> {
        let url = format!(
            "{}/repos/{}/{}/commits/{}",
            api_url, repo.owner, repo.repo, reference
        );

        debug!("Fetching commit from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let commit = check_response(response)?
            .json::<CommitInfo>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(commit)
    }

    /// Fetches every page of a list endpoint until the API returns a
    /// short or empty page. A page-fetch error aborts the whole listing.
    async fn fetch_paged<T: DeserializeOwned>(
        client: &Client,
        url: &str,
        what: &str,
    ) -> Result<Vec<T>> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            debug!("Fetching {} page {} from {}...", what, page, url);

            let per_page = PER_PAGE.to_string();
            let page_number = page.to_string();

            let response = client
                .get(url)
                .query(&[("per_page", per_page.as_str()), ("page", page_number.as_str())])
                .send()
                .await
                .context("Failed to send request to GitHub API")?;

            let parsed: Vec<T> = check_response(response)?
                .json()
                .await
                .context("Failed to parse JSON response from GitHub API")?;

            if parsed.is_empty() {
                break;
            }

            let len = parsed.len();
            all.extend(parsed);

            // A short page is the terminal page
            if len < PER_PAGE {
                break;
            }

            page += 1;
        }

        Ok(all)
    }
}
