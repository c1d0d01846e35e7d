//! Remembers which latest version the user dismissed the notice for.

use crate::error::Result;
use crate::project_identity;
use crate::storage::KeyValueStore;
use crate::ui;

pub struct DismissalTracker<S: KeyValueStore> {
    store: S,
    key: String,
    dismissed: bool,
}

impl<S: KeyValueStore> DismissalTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, project_identity::DISMISSED_VERSION_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            dismissed: false,
        }
    }

    /// Last dismissed version, if any. Read failures count as "none".
    pub fn dismissed_version(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                ui::verbose(&format!("could not read dismissal record: {}", e));
                None
            }
        }
    }

    /// Exact string match against the stored record.
    pub fn is_dismissed(&self, latest_version: &str) -> bool {
        self.dismissed_version().as_deref() == Some(latest_version)
    }

    /// Re-evaluate for a newly observed latest version.
    pub fn observe_latest(&mut self, latest_version: Option<&str>) {
        if let Some(latest) = latest_version {
            self.dismissed = self.is_dismissed(latest);
        }
    }

    /// Suppresses immediately; the flag stays set even if the write fails.
    pub fn dismiss(&mut self, version: &str) -> Result<()> {
        self.dismissed = true;
        self.store.set(&self.key, version)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.dismissed = false;
        self.store.remove(&self.key)
    }

    pub fn is_suppressed(&self) -> bool {
        self.dismissed
    }
}
