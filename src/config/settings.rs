//! Settings Module
//!
//! Manages notice settings (release endpoint, comparison policy, timing, ...).

use crate::error::{NoticeError, Result};
use crate::project_identity;
use crate::utils::paths;
use crate::utils::update_check::{ComparisonPolicy, DEFAULT_TAG_PREFIXES};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const VALID_KEYS: &[&str] = &[
    "repo",
    "api_base_url",
    "releases_url",
    "comparison",
    "local_source",
    "fallback_version",
    "startup_delay_ms",
    "http_timeout_secs",
    "tag_prefixes",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalSourceKind {
    InstallPath,
    SelfReported,
}

/// Settings manager
#[derive(Debug, Clone)]
pub struct Settings {
    settings_file: PathBuf,
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(paths::settings_file()?)
    }

    pub fn load_from(settings_file: impl Into<PathBuf>) -> Result<Self> {
        let settings_file = settings_file.into();
        let mut values = Self::defaults();

        if settings_file.exists() {
            for (key, value) in parse_settings(&settings_file)? {
                // Unknown keys from newer versions are ignored
                if VALID_KEYS.contains(&key.as_str()) {
                    values.insert(key, value);
                }
            }
        }

        Ok(Self {
            settings_file,
            values,
        })
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(key)
    }

    /// Set a setting value
    pub fn set(&mut self, key: String, value: String) -> Result<()> {
        validate_key(&key)?;
        validate_value(&key, &value)?;

        self.values.insert(key, value.trim().to_string());
        self.save()
    }

    /// Reset a setting to default
    pub fn reset(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        if let Some(default) = Self::defaults().get(key) {
            self.values.insert(key.to_string(), default.clone());
        }
        self.save()
    }

    /// All settings, in stable key order
    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn repo(&self) -> &str {
        self.value("repo")
    }

    /// `AEGIS_NOTICE_API_BASE_URL` wins over the file.
    pub fn api_base_url(&self) -> String {
        env::var(project_identity::env_key("API_BASE_URL"))
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.value("api_base_url").to_string())
    }

    pub fn releases_url(&self) -> &str {
        self.value("releases_url")
    }

    pub fn comparison(&self) -> ComparisonPolicy {
        ComparisonPolicy::parse(self.value("comparison")).unwrap_or_default()
    }

    pub fn local_source(&self) -> LocalSourceKind {
        match self.value("local_source") {
            "self-reported" => LocalSourceKind::SelfReported,
            _ => LocalSourceKind::InstallPath,
        }
    }

    pub fn fallback_version(&self) -> Option<String> {
        Some(self.value("fallback_version").trim())
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.value("startup_delay_ms").parse().unwrap_or(1000))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.value("http_timeout_secs").parse().unwrap_or(10))
    }

    pub fn tag_prefixes(&self) -> Vec<String> {
        self.value("tag_prefixes")
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Save settings to file
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_file.parent() {
            fs::create_dir_all(parent).map_err(|e| NoticeError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.settings_file, content).map_err(|e| NoticeError::IoError {
            path: self.settings_file.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Get default settings
    pub fn defaults() -> BTreeMap<String, String> {
        let mut defaults = BTreeMap::new();
        defaults.insert("repo".to_string(), project_identity::REPO_SLUG.to_string());
        defaults.insert(
            "api_base_url".to_string(),
            project_identity::GITHUB_API_BASE.to_string(),
        );
        defaults.insert(
            "releases_url".to_string(),
            project_identity::releases_latest_page(project_identity::REPO_SLUG),
        );
        defaults.insert(
            "comparison".to_string(),
            ComparisonPolicy::Numeric.as_str().to_string(),
        );
        defaults.insert("local_source".to_string(), "install-path".to_string());
        defaults.insert("fallback_version".to_string(), String::new()); // Empty = no fallback
        defaults.insert("startup_delay_ms".to_string(), "1000".to_string());
        defaults.insert("http_timeout_secs".to_string(), "10".to_string());
        defaults.insert("tag_prefixes".to_string(), DEFAULT_TAG_PREFIXES.join(","));
        defaults
    }
}

fn validate_key(key: &str) -> Result<()> {
    if !VALID_KEYS.contains(&key) {
        return Err(NoticeError::ConfigError(format!(
            "Unknown setting: '{}'. Valid settings: {}",
            key,
            VALID_KEYS.join(", ")
        )));
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<()> {
    let value = value.trim();
    let invalid = |hint: &str| -> Result<()> {
        Err(NoticeError::ConfigError(format!(
            "Invalid value for '{}': '{}'. Valid: {}",
            key, value, hint
        )))
    };

    match key {
        "repo" => {
            let mut parts = value.split('/');
            let ok = matches!(
                (parts.next(), parts.next(), parts.next()),
                (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
            );
            if !ok {
                return invalid("owner/name");
            }
        }
        "api_base_url" | "releases_url" => {
            if !(value.starts_with("https://") || value.starts_with("http://")) {
                return invalid("http(s) URL");
            }
        }
        "comparison" => {
            if ComparisonPolicy::parse(value).is_none() {
                return invalid("numeric, inequality");
            }
        }
        "local_source" => {
            if !["install-path", "self-reported"].contains(&value) {
                return invalid("install-path, self-reported");
            }
        }
        "fallback_version" => {
            // Empty disables the fallback
            if !value.is_empty() && !value.split('.').all(|p| p.parse::<u64>().is_ok()) {
                return invalid("dotted version like 2.8.0, or empty");
            }
        }
        "startup_delay_ms" => {
            if value.parse::<u64>().is_err() {
                return invalid("milliseconds");
            }
        }
        "http_timeout_secs" => {
            if !value.parse::<u64>().is_ok_and(|secs| secs >= 1) {
                return invalid("seconds, at least 1");
            }
        }
        "tag_prefixes" => {
            if value.split(',').any(|p| p.trim().contains(char::is_whitespace)) {
                return invalid("comma-separated prefixes without spaces");
            }
        }
        _ => {}
    }

    Ok(())
}

/// Parse settings from JSON file
fn parse_settings(path: &Path) -> Result<BTreeMap<String, String>> {
    let raw = fs::read_to_string(path).map_err(|e| NoticeError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        NoticeError::ConfigError(format!("Invalid settings file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests;
