//! Wiring shared by the commands: settings, store, resolver.

use crate::config::{LocalSourceKind, Settings};
use crate::dismissal::DismissalTracker;
use crate::error::Result;
use crate::project_identity;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui as output;
use crate::utils::paths;
use crate::utils::update_check::{
    self, BuildVersionAccessor, GitHubReleases, LocalVersionSource, PackageJsonAccessor,
    VersionResolver,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub struct NoticeContext {
    pub settings: Settings,
    pub store: Box<dyn KeyValueStore>,
}

impl NoticeContext {
    pub fn load(ephemeral: bool) -> Result<Self> {
        let settings = Settings::load()?;
        let store: Box<dyn KeyValueStore> = if ephemeral {
            output::verbose("using in-memory store");
            Box::new(MemoryStore::new())
        } else {
            let path = paths::store_file()?;
            output::verbose(&format!("store: {}", path.display()));
            Box::new(FileStore::new(path))
        };
        Ok(Self { settings, store })
    }

    pub fn install_path(&self) -> Option<PathBuf> {
        match self.store.get(project_identity::INSTALL_PATH_KEY) {
            Ok(value) => value.filter(|p| !p.trim().is_empty()).map(PathBuf::from),
            Err(e) => {
                output::warning(&format!("Could not read install path: {}", e));
                None
            }
        }
    }

    pub fn local_source(&self) -> LocalVersionSource {
        match self.settings.local_source() {
            LocalSourceKind::InstallPath => LocalVersionSource::InstallPath {
                path: self.install_path(),
                accessor: Some(Arc::new(PackageJsonAccessor)),
            },
            LocalSourceKind::SelfReported => LocalVersionSource::SelfReported {
                accessor: Some(Arc::new(BuildVersionAccessor)),
                fallback: self.settings.fallback_version(),
            },
        }
    }

    pub fn releases(&self) -> GitHubReleases {
        GitHubReleases::new(
            &self.settings.api_base_url(),
            self.settings.repo(),
            self.settings.http_timeout(),
        )
    }

    /// Latest release version, independent of the local installation.
    pub fn latest_release(&self) -> Result<Option<String>> {
        update_check::latest_version(&self.releases(), &self.settings.tag_prefixes())
    }

    pub fn resolver(&self, with_delay: bool) -> VersionResolver<GitHubReleases> {
        let delay = if with_delay {
            self.settings.startup_delay()
        } else {
            Duration::ZERO
        };
        VersionResolver::new(self.local_source(), self.releases())
            .with_policy(self.settings.comparison())
            .with_tag_prefixes(self.settings.tag_prefixes())
            .with_startup_delay(delay)
    }

    pub fn tracker(&self) -> DismissalTracker<&dyn KeyValueStore> {
        DismissalTracker::new(&*self.store)
    }
}
