use anyhow::{Result, bail};
use chrono::FixedOffset;
use log::debug;

use crate::{
    github::{GitHubRepo, ReleaseLister, Tag},
    http::ApiError,
    runtime::Runtime,
};

use super::config::Config;
use super::{align_columns, format_time};

const HEADERS: [&str; 4] = ["TAG", "TYPE", "CREATEDAT", "NAME"];

/// List all tags of a repository, with release details where they exist
#[tracing::instrument(skip(runtime, api_url, tz))]
pub async fn list<R: Runtime>(
    runtime: R,
    repository: &str,
    api_url: Option<String>,
    tz: FixedOffset,
) -> Result<()> {
    let repo: GitHubRepo = repository.parse()?;
    let config = Config::new(&runtime, api_url)?;

    let output = run_list(&config.github, &repo, &tz).await?;
    print!("{}", output);

    Ok(())
}

pub(crate) async fn run_list<G: ReleaseLister>(
    github: &G,
    repo: &GitHubRepo,
    tz: &FixedOffset,
) -> Result<String> {
    let tags = match github.list_tags_and_releases(repo).await {
        Ok(tags) => tags,
        Err(e) if ApiError::is_not_found(&e) => bail!("{}: not found", repo),
        Err(e) => return Err(e),
    };

    debug!("Fetched {} tag(s) for {}", tags.len(), repo);

    Ok(render_tag_table(&tags, tz))
}

fn render_tag_table(tags: &[Tag], tz: &FixedOffset) -> String {
    let mut rows = Vec::with_capacity(tags.len() + 1);
    rows.push(HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>());

    for tag in tags {
        let row = match &tag.release {
            Some(release) => vec![
                tag.name.clone(),
                "TAG+RELEASE".to_string(),
                format_time(release.created_at, tz),
                release.name.clone(),
            ],
            None => vec![
                tag.name.clone(),
                "TAG".to_string(),
                String::new(),
                String::new(),
            ],
        };
        rows.push(row);
    }

    align_columns(&rows, 4)
}
