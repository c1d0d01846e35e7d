use crate::utils::update_check::types::HostQuery;
use crate::utils::update_check::versioning;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fallback for hosts that cannot report their own version.
/// Only used when explicitly configured.
pub const FALLBACK_APP_VERSION: &str = "0.0.0";

/// Host capability: version of the installation under a path.
pub trait InstallVersionAccessor: Send + Sync {
    fn version_at(&self, install_path: &Path) -> HostQuery;
}

/// Host capability: version the application reports for itself.
pub trait AppVersionAccessor: Send + Sync {
    fn app_version(&self) -> HostQuery;
}

/// Reads `version` from `<install>/client/package.json`.
#[derive(Debug, Default, Clone)]
pub struct PackageJsonAccessor;

impl PackageJsonAccessor {
    pub fn manifest_path(install_path: &Path) -> PathBuf {
        install_path.join("client").join("package.json")
    }
}

impl InstallVersionAccessor for PackageJsonAccessor {
    fn version_at(&self, install_path: &Path) -> HostQuery {
        let manifest = Self::manifest_path(install_path);
        if !manifest.exists() {
            return HostQuery::NoValue;
        }

        let raw = match fs::read_to_string(&manifest) {
            Ok(raw) => raw,
            Err(e) => return HostQuery::Failed(format!("{}: {}", manifest.display(), e)),
        };

        // An unreadable manifest means "no version", same as a missing one.
        let version = serde_json::from_str::<Value>(&raw).ok().and_then(|doc| {
            doc.get("version")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        });
        HostQuery::from_option(version)
    }
}

/// The version this binary was built as.
#[derive(Debug, Default, Clone)]
pub struct BuildVersionAccessor;

impl AppVersionAccessor for BuildVersionAccessor {
    fn app_version(&self) -> HostQuery {
        HostQuery::Value(versioning::current_version())
    }
}

/// Which host contract supplies the local version.
#[derive(Clone)]
pub enum LocalVersionSource {
    InstallPath {
        path: Option<PathBuf>,
        accessor: Option<Arc<dyn InstallVersionAccessor>>,
    },
    SelfReported {
        accessor: Option<Arc<dyn AppVersionAccessor>>,
        fallback: Option<String>,
    },
}

impl std::fmt::Debug for LocalVersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalVersionSource::InstallPath { path, accessor } => f
                .debug_struct("InstallPath")
                .field("path", path)
                .field("accessor", &accessor.is_some())
                .finish(),
            LocalVersionSource::SelfReported { accessor, fallback } => f
                .debug_struct("SelfReported")
                .field("accessor", &accessor.is_some())
                .field("fallback", fallback)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalResolution {
    Found(String),
    NoInformation(&'static str),
    Failed(String),
}

impl LocalVersionSource {
    pub fn resolve(&self) -> LocalResolution {
        match self {
            LocalVersionSource::InstallPath { path, accessor } => {
                let Some(path) = path else {
                    return LocalResolution::NoInformation("install path is not configured");
                };
                let Some(accessor) = accessor else {
                    return LocalResolution::NoInformation("host offers no install version lookup");
                };
                match accessor.version_at(path) {
                    HostQuery::Value(v) => LocalResolution::Found(v),
                    HostQuery::NoValue => {
                        LocalResolution::NoInformation("installation reports no version")
                    }
                    HostQuery::CapabilityAbsent => {
                        LocalResolution::NoInformation("host offers no install version lookup")
                    }
                    HostQuery::Failed(msg) => LocalResolution::Failed(msg),
                }
            }
            LocalVersionSource::SelfReported { accessor, fallback } => {
                let reported = match accessor.as_ref().map(|a| a.app_version()) {
                    Some(HostQuery::Value(v)) => return LocalResolution::Found(v),
                    Some(HostQuery::Failed(msg)) => return LocalResolution::Failed(msg),
                    Some(HostQuery::NoValue) => "application reports no version",
                    Some(HostQuery::CapabilityAbsent) | None => "host offers no version lookup",
                };
                match fallback {
                    Some(v) if !v.trim().is_empty() => LocalResolution::Found(v.trim().to_string()),
                    _ => LocalResolution::NoInformation(reported),
                }
            }
        }
    }
}
