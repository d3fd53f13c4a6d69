//! Resolution of the repositories a run acts on.

use std::collections::{BTreeMap, HashSet};

use github_client::Repository;
use tracing::{debug, warn};
use url::Url;

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Repository short names mapped to their clone URLs.
pub type RepositorySet = BTreeMap<String, Url>;

/// Maps every repository's short name to its clone URL.
///
/// Short names are unique within an organization. If two records do share a short
/// name anyway the later one replaces the earlier one and a warning is logged.
pub fn resolve_all(records: &[Repository]) -> RepositorySet {
    let mut set = RepositorySet::new();
    for record in records {
        if let Some(previous) = set.insert(record.name().to_string(), record.url().clone()) {
            warn!(
                repo = record.name(),
                replaced = %previous,
                url = %record.url(),
                "Duplicate repository name, keeping the last listed"
            );
        }
    }

    debug!(count = set.len(), "Resolved repository set");
    set
}

/// Keeps the records whose short name appears in `name_filter`.
///
/// The short name is the last segment of the full name. The result follows the order
/// of `records`. Names in the filter that match no record are ignored.
pub fn resolve_filtered<S: AsRef<str>>(records: &[Repository], name_filter: &[S]) -> Vec<Repository> {
    let wanted: HashSet<&str> = name_filter.iter().map(AsRef::as_ref).collect();

    let selected: Vec<Repository> = records
        .iter()
        .filter(|record| wanted.contains(record.short_name()))
        .cloned()
        .collect();

    debug!(
        requested = wanted.len(),
        matched = selected.len(),
        "Resolved filtered repository subset"
    );
    selected
}
