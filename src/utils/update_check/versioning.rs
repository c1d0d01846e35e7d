use crate::utils::update_check::types::ComparisonPolicy;
use std::cmp::Ordering;

/// Prefixes stripped from release tags, e.g. `client-v2.8.0`.
pub const DEFAULT_TAG_PREFIXES: &[&str] = &["client-", "v"];

pub fn current_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Dotted-numeric comparison.
///
/// Components are compared left to right as integers. Missing trailing
/// components count as zero, so `2.10` equals `2.10.0`, and a component
/// that does not parse also counts as zero.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = components(a);
    let right = components(b);
    let len = left.len().max(right.len());

    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn components(input: &str) -> Vec<u64> {
    input
        .trim()
        .split('.')
        .map(|part| part.trim().parse::<u64>().unwrap_or(0))
        .collect()
}

/// Whether `latest` counts as an update over `local` under `policy`.
pub fn is_newer(latest: &str, local: &str, policy: ComparisonPolicy) -> bool {
    match policy {
        ComparisonPolicy::Numeric => compare_versions(latest, local).is_gt(),
        ComparisonPolicy::Inequality => latest.trim() != local.trim(),
    }
}

/// Strip release-tag prefixes until none applies.
pub fn normalize_tag<S: AsRef<str>>(tag: &str, prefixes: &[S]) -> String {
    let mut current = tag.trim();
    loop {
        let stripped = prefixes
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|p| !p.is_empty())
            .find_map(|p| current.strip_prefix(p));
        match stripped {
            Some(rest) => current = rest,
            None => return current.to_string(),
        }
    }
}

/// A version must at least start with a numeric component.
pub(super) fn is_version_like(input: &str) -> bool {
    input
        .split('.')
        .next()
        .is_some_and(|major| !major.is_empty() && major.parse::<u64>().is_ok())
}
