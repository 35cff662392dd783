use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    github::{GitHub, ReleaseLister},
    runtime::Runtime,
};

pub struct Config<G: ReleaseLister> {
    pub github: G,
}

impl Config<GitHub> {
    pub fn new<R: Runtime>(runtime: &R, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication");
        }

        let client = Client::builder()
            .user_agent("ghrls-cli")
            .default_headers(headers)
            .build()?;

        let github = GitHub::new(client, api_url);

        Ok(Self { github })
    }
}
