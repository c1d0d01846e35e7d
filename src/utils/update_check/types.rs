use serde::Serialize;

/// Outcome of one version check cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub local_version: Option<String>,
    pub latest_version: Option<String>,
    pub update_available: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl VersionInfo {
    /// State before the lookup has finished.
    pub fn loading() -> Self {
        Self {
            local_version: None,
            latest_version: None,
            update_available: false,
            is_loading: true,
            error: None,
        }
    }

    /// Nothing to report: no local version or no configuration.
    pub fn no_information() -> Self {
        Self {
            is_loading: false,
            ..Self::loading()
        }
    }

    /// Finish the cycle with an error, keeping whatever was already resolved.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.is_loading = false;
        self.error = Some(message.into());
        self
    }
}

/// How latest and local versions are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonPolicy {
    /// Dotted-numeric comparison; the update must be strictly newer.
    #[default]
    Numeric,
    /// Any difference counts as an update. Misjudges "2.10" vs "2.9".
    Inequality,
}

impl ComparisonPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonPolicy::Numeric => "numeric",
            ComparisonPolicy::Inequality => "inequality",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "numeric" => Some(ComparisonPolicy::Numeric),
            "inequality" => Some(ComparisonPolicy::Inequality),
            _ => None,
        }
    }
}

/// Result of asking the host for a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostQuery {
    Value(String),
    /// The capability exists but had nothing to report.
    NoValue,
    /// The host does not offer this capability.
    CapabilityAbsent,
    Failed(String),
}

impl HostQuery {
    /// Collapse blank values into `NoValue`.
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => HostQuery::Value(v.trim().to_string()),
            _ => HostQuery::NoValue,
        }
    }
}
