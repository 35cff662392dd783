use anyhow::{Result, bail};
use chrono::FixedOffset;

use crate::{
    github::{GitHubRepo, ReleaseLister, Tag},
    http::ApiError,
    runtime::Runtime,
};

use super::config::Config;
use super::{align_columns, format_time};

/// Describe a single release: commit, author, timestamps, artifacts, body
#[tracing::instrument(skip(runtime, api_url, tz))]
pub async fn get<R: Runtime>(
    runtime: R,
    repository: &str,
    tag: &str,
    api_url: Option<String>,
    tz: FixedOffset,
) -> Result<()> {
    let repo: GitHubRepo = repository.parse()?;
    let config = Config::new(&runtime, api_url)?;

    let output = run_get(&config.github, &repo, tag, &tz).await?;
    print!("{}", output);

    Ok(())
}

pub(crate) async fn run_get<G: ReleaseLister>(
    github: &G,
    repo: &GitHubRepo,
    tag: &str,
    tz: &FixedOffset,
) -> Result<String> {
    let found = match github.describe_release(repo, tag).await {
        Ok(found) => found,
        Err(e) if ApiError::is_not_found(&e) => bail!("{}@{}: not found", repo, tag),
        Err(e) => return Err(e),
    };

    Ok(render_release(&found, tz))
}

fn render_release(tag: &Tag, tz: &FixedOffset) -> String {
    let release = tag.release.clone().unwrap_or_default();

    let mut rows = vec![
        vec!["Tag:".to_string(), tag.name.clone()],
        vec!["Commit:".to_string(), release.commit.clone()],
        vec!["Name:".to_string(), release.name.clone()],
        vec!["Author:".to_string(), release.author.clone()],
        vec!["CreatedAt:".to_string(), format_time(release.created_at, tz)],
        vec![
            "PublishedAt:".to_string(),
            format_time(release.published_at, tz),
        ],
        vec!["URL:".to_string(), release.url.clone()],
    ];

    if let Some((first, rest)) = release.artifact_urls.split_first() {
        rows.push(vec!["Artifacts:".to_string(), first.clone()]);
        for url in rest {
            rows.push(vec![String::new(), url.clone()]);
        }
    }

    let mut out = align_columns(&rows, 1);

    if !release.body.is_empty() {
        out.push('\n');
        out.push_str(&release.body);
        out.push('\n');
    }

    out
}
