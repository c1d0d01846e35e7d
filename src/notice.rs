//! The update notice bar: when to show it, what it says, and its two actions.

use crate::dismissal::DismissalTracker;
use crate::error::{NoticeError, Result};
use crate::storage::KeyValueStore;
use crate::ui as output;
use crate::utils::platform;
use crate::utils::update_check::VersionInfo;
use colored::Colorize;
use std::process::Stdio;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub local_version: String,
    pub latest_version: String,
    pub update_url: String,
}

impl NoticeView {
    pub fn headline(&self) -> String {
        format!(
            "Update available: {} → {}",
            self.local_version, self.latest_version
        )
    }
}

/// Nothing is shown while loading, on error, without an update, or when suppressed.
pub fn decide(info: &VersionInfo, suppressed: bool, update_url: &str) -> Option<NoticeView> {
    if info.is_loading || info.error.is_some() || !info.update_available || suppressed {
        return None;
    }
    Some(NoticeView {
        local_version: info.local_version.clone()?,
        latest_version: info.latest_version.clone()?,
        update_url: update_url.to_string(),
    })
}

pub trait LinkOpener {
    fn open_external(&self, url: &str) -> Result<()>;
}

/// Desktop default handler (`xdg-open`, `open`, `start`).
#[derive(Debug, Default, Clone)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open_external(&self, url: &str) -> Result<()> {
        let status = platform::build_open_url_command(url)?
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| NoticeError::OpenLinkError {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(NoticeError::OpenLinkError {
                url: url.to_string(),
                reason: format!("opener exited with {}", status),
            })
        }
    }
}

/// Host opener when the host provides one, system browser otherwise.
#[derive(Default)]
pub struct ExternalLinks {
    host: Option<Box<dyn LinkOpener>>,
    fallback: SystemBrowser,
}

impl ExternalLinks {
    pub fn new(host: Option<Box<dyn LinkOpener>>) -> Self {
        Self {
            host,
            fallback: SystemBrowser,
        }
    }
}

impl LinkOpener for ExternalLinks {
    fn open_external(&self, url: &str) -> Result<()> {
        match &self.host {
            Some(host) => host.open_external(url),
            None => self.fallback.open_external(url),
        }
    }
}

pub struct NoticeBar<S: KeyValueStore, O: LinkOpener> {
    info: VersionInfo,
    tracker: DismissalTracker<S>,
    opener: O,
    update_url: String,
}

impl<S: KeyValueStore, O: LinkOpener> NoticeBar<S, O> {
    pub fn new(info: VersionInfo, mut tracker: DismissalTracker<S>, opener: O, update_url: &str) -> Self {
        tracker.observe_latest(info.latest_version.as_deref());
        Self {
            info,
            tracker,
            opener,
            update_url: update_url.to_string(),
        }
    }

    pub fn info(&self) -> &VersionInfo {
        &self.info
    }

    pub fn is_suppressed(&self) -> bool {
        self.tracker.is_suppressed()
    }

    /// Feed a fresh check result; a different latest version lifts a dismissal.
    pub fn refresh(&mut self, info: VersionInfo) {
        if info.latest_version != self.info.latest_version {
            self.tracker.observe_latest(info.latest_version.as_deref());
        }
        self.info = info;
    }

    pub fn view(&self) -> Option<NoticeView> {
        decide(&self.info, self.tracker.is_suppressed(), &self.update_url)
    }

    pub fn update(&self) -> Result<()> {
        self.opener.open_external(&self.update_url)
    }

    /// Hides at once; a failed write is only logged.
    pub fn dismiss(&mut self) {
        let Some(latest) = self.info.latest_version.clone() else {
            return;
        };
        if let Err(e) = self.tracker.dismiss(&latest) {
            output::warning(&format!("Could not remember dismissal: {}", e));
        }
    }
}

pub fn render(view: &NoticeView) -> Vec<String> {
    vec![
        format!("{} {}", "!".yellow().bold(), view.headline().bold()),
        format!("  {} {}", "Update:".cyan(), view.update_url),
        format!(
            "  {} {} dismiss {}",
            "Dismiss:".cyan(),
            crate::project_identity::BINARY_NAME,
            view.latest_version
        ),
    ]
}
