mod fetcher;
mod local_version;
mod resolver;
mod types;
mod versioning;

pub use fetcher::{GitHubReleases, ReleaseSource};
pub use local_version::{
    AppVersionAccessor, BuildVersionAccessor, FALLBACK_APP_VERSION, InstallVersionAccessor,
    LocalResolution, LocalVersionSource, PackageJsonAccessor,
};
pub use resolver::{PendingCheck, VersionResolver, latest_version};
pub use types::{ComparisonPolicy, HostQuery, VersionInfo};
pub use versioning::{
    DEFAULT_TAG_PREFIXES, compare_versions, current_version, is_newer, normalize_tag,
};
