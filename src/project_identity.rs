//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.
//! The storage keys are shared with the desktop client and must not change.

pub const DISPLAY_NAME: &str = "AEGIS";
pub const BINARY_NAME: &str = "aegis-notice";
pub const STABLE_PROJECT_ID: &str = "aegis-notice";
pub const ENV_PREFIX: &str = "AEGIS_NOTICE";
pub const REPO_SLUG: &str = "AEGIS-GAME/aegis";
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Key holding the latest version the user dismissed.
pub const DISMISSED_VERSION_KEY: &str = "aegis_version_dismissed";
/// Key holding the configured client installation path.
pub const INSTALL_PATH_KEY: &str = "aegisPath";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn cli_with(command: &str) -> String {
    format!("{} {}", BINARY_NAME, command)
}

pub fn github_latest_release_api(api_base: &str, repo_slug: &str) -> String {
    format!(
        "{}/repos/{}/releases/latest",
        api_base.trim_end_matches('/'),
        repo_slug
    )
}

pub fn releases_latest_page(repo_slug: &str) -> String {
    format!("https://github.com/{}/releases/latest", repo_slug)
}

pub fn user_agent() -> String {
    format!("{}/{}", BINARY_NAME, env!("CARGO_PKG_VERSION"))
}
