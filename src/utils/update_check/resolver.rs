use crate::error::{NoticeError, Result};
use crate::ui as output;
use crate::utils::update_check::fetcher::ReleaseSource;
use crate::utils::update_check::local_version::{LocalResolution, LocalVersionSource};
use crate::utils::update_check::types::{ComparisonPolicy, VersionInfo};
use crate::utils::update_check::versioning;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Runs one check cycle: local version, latest release, decision.
pub struct VersionResolver<R: ReleaseSource> {
    local: LocalVersionSource,
    releases: R,
    policy: ComparisonPolicy,
    tag_prefixes: Vec<String>,
    startup_delay: Duration,
}

impl<R: ReleaseSource> VersionResolver<R> {
    pub fn new(local: LocalVersionSource, releases: R) -> Self {
        Self {
            local,
            releases,
            policy: ComparisonPolicy::default(),
            tag_prefixes: versioning::DEFAULT_TAG_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            startup_delay: Duration::ZERO,
        }
    }

    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_tag_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.tag_prefixes = prefixes;
        self
    }

    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Never fails: every problem ends up in `VersionInfo::error`.
    pub fn check(&self) -> VersionInfo {
        if !self.startup_delay.is_zero() {
            thread::sleep(self.startup_delay);
        }

        let mut info = VersionInfo::loading();

        let local = match self.local.resolve() {
            LocalResolution::Found(v) => v,
            LocalResolution::NoInformation(reason) => {
                output::verbose(&format!("no local version: {}", reason));
                return VersionInfo::no_information();
            }
            LocalResolution::Failed(msg) => {
                return info.failed(NoticeError::HostAccessorError(msg).to_string());
            }
        };
        output::verbose(&format!("local version {}", local));
        info.local_version = Some(local.clone());

        let latest = match latest_version(&self.releases, &self.tag_prefixes) {
            Ok(latest) => latest,
            Err(e) => return info.failed(e.to_string()),
        };
        match &latest {
            Some(v) => output::verbose(&format!("latest release {}", v)),
            None => output::verbose("latest release has no usable tag"),
        }

        info.update_available = latest
            .as_deref()
            .is_some_and(|l| versioning::is_newer(l, &local, self.policy));
        info.latest_version = latest;
        info.is_loading = false;
        info
    }
}

/// Latest release as a bare version; `None` when the tag is missing or not a version.
pub fn latest_version<R: ReleaseSource + ?Sized>(
    releases: &R,
    tag_prefixes: &[String],
) -> Result<Option<String>> {
    Ok(releases
        .latest_tag()?
        .map(|t| versioning::normalize_tag(&t, tag_prefixes))
        .filter(|v| versioning::is_version_like(v)))
}

impl<R: ReleaseSource + 'static> VersionResolver<R> {
    /// Run the cycle on a worker thread.
    pub fn spawn(self) -> PendingCheck {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let info = self.check();
            // Receiver gone means the view was torn down; drop the result.
            let _ = tx.send(info);
        });
        PendingCheck {
            rx,
            handle: Some(handle),
            delivered: false,
        }
    }
}

/// Handle to an in-flight check. Dropping it discards the result.
pub struct PendingCheck {
    rx: Receiver<VersionInfo>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl PendingCheck {
    /// Result if the worker has finished, without blocking.
    pub fn try_result(&mut self) -> Option<VersionInfo> {
        if self.delivered {
            return None;
        }
        let info = match self.rx.try_recv() {
            Ok(info) => info,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => aborted(),
        };
        self.delivered = true;
        Some(info)
    }

    /// Block until the worker delivers.
    pub fn wait(mut self) -> VersionInfo {
        let info = self.rx.recv().unwrap_or_else(|_| aborted());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        info
    }
}

fn aborted() -> VersionInfo {
    VersionInfo::loading().failed("Version check aborted")
}
