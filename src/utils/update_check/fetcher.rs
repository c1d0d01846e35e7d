use crate::error::{NoticeError, Result};
use crate::project_identity;
use crate::ui as output;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Where the latest release tag comes from.
pub trait ReleaseSource: Send {
    /// Raw tag of the latest release; `Ok(None)` when the payload has no usable tag.
    fn latest_tag(&self) -> Result<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct GitHubRelease {
    #[serde(default)]
    tag_name: Option<Value>,
}

/// GitHub "latest release" endpoint.
#[derive(Debug, Clone)]
pub struct GitHubReleases {
    url: String,
    timeout: Duration,
}

impl GitHubReleases {
    pub fn new(api_base: &str, repo_slug: &str, timeout: Duration) -> Self {
        Self {
            url: project_identity::github_latest_release_api(api_base, repo_slug),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReleaseSource for GitHubReleases {
    fn latest_tag(&self) -> Result<Option<String>> {
        let client = Client::builder().timeout(self.timeout).build()?;

        output::verbose(&format!("GET {}", self.url));
        let response = client
            .get(&self.url)
            .header("User-Agent", project_identity::user_agent())
            .header("Accept", "application/vnd.github+json")
            .send()?;

        let status = response.status();
        output::verbose(&format!("release endpoint answered {}", status));
        if !status.is_success() {
            return Err(NoticeError::FetchError {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_latest_tag_from_body(&body)
    }
}

/// A body that is not JSON is an error; a missing or non-string tag is not.
pub(super) fn parse_latest_tag_from_body(body: &str) -> Result<Option<String>> {
    let release: GitHubRelease = serde_json::from_str(body)?;
    Ok(release
        .tag_name
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string))
}
