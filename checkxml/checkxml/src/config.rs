//! Reconciliation configuration and the process-wide defaults.
//!
//! A [`CheckConfig`] is plain data: build it once and share it read-only.
//! The free functions of this crate read a snapshot of a process-wide
//! default configuration, which the `set_*` functions below replace. Those
//! setters take a write lock but give no ordering guarantee relative to
//! checks running on other threads; prefer an explicit
//! [`Checker`](crate::Checker) when several threads need different settings.

use std::{
    collections::HashSet,
    sync::{LazyLock, PoisonError, RwLock},
};

use checkxml_core::path;

/// Document paths excluded from the unknown-tag report.
///
/// Entries are full dot-paths from the root, e.g. `"config"` or
/// `"data.ignore"`; matching is exact and case sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IgnoreTags(HashSet<String>);

impl IgnoreTags {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Schema field paths excluded from the missing-tag report.
///
/// Each entry remembers its depth (segment count). A field only matches an
/// entry at the same depth, so a shallow path string cannot match a deeper
/// field spelled the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IgnoreMembers(Vec<(String, usize)>);

impl IgnoreMembers {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(Into::into)
                .map(|p: String| {
                    let depth = path::depth(&p);
                    (p, depth)
                })
                .collect(),
        )
    }

    pub fn contains(&self, path: &str, depth: usize) -> bool {
        self.0.iter().any(|(p, d)| *d == depth && p == path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Settings consulted by both reconciliation directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub tags_to_ignore: IgnoreTags,
    pub members_to_ignore: IgnoreMembers,
    /// Do not report `omitempty` fields that are absent from the document.
    pub skip_omitempty: bool,
    /// Cast scalar values in the returned document tree.
    pub cast_values: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tags_to_ignore: IgnoreTags::default(),
            members_to_ignore: IgnoreMembers::default(),
            skip_omitempty: true,
            cast_values: false,
        }
    }
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder {
            config: CheckConfig::default(),
        }
    }
}

/// Builder for [`CheckConfig`].
#[derive(Debug, Clone)]
pub struct CheckConfigBuilder {
    config: CheckConfig,
}

impl CheckConfigBuilder {
    pub fn tags_to_ignore<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tags_to_ignore = IgnoreTags::new(paths);
        self
    }

    pub fn members_to_ignore<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.members_to_ignore = IgnoreMembers::new(paths);
        self
    }

    pub fn skip_omitempty(mut self, skip: bool) -> Self {
        self.config.skip_omitempty = skip;
        self
    }

    pub fn cast_values(mut self, cast: bool) -> Self {
        self.config.cast_values = cast;
        self
    }

    pub fn build(self) -> CheckConfig {
        self.config
    }
}

static DEFAULTS: LazyLock<RwLock<CheckConfig>> =
    LazyLock::new(|| RwLock::new(CheckConfig::default()));

fn update_defaults(f: impl FnOnce(&mut CheckConfig)) {
    let mut guard = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Snapshot of the process-wide default configuration.
pub fn default_config() -> CheckConfig {
    DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide unknown-tag exclusions. An empty slice clears them.
pub fn set_tags_to_ignore(paths: &[&str]) {
    let tags = IgnoreTags::new(paths.iter().copied());
    tracing::debug!(count = paths.len(), "set tags to ignore");
    update_defaults(|config| config.tags_to_ignore = tags);
}

/// Replace the process-wide missing-field exclusions. An empty slice clears them.
pub fn set_members_to_ignore(paths: &[&str]) {
    let members = IgnoreMembers::new(paths.iter().copied());
    tracing::debug!(count = paths.len(), "set members to ignore");
    update_defaults(|config| config.members_to_ignore = members);
}

/// Set whether absent `omitempty` fields are left out of missing-tag
/// reports. `None` toggles the current setting.
pub fn ignore_omitempty_tag(skip: Option<bool>) {
    update_defaults(|config| {
        config.skip_omitempty = skip.unwrap_or(!config.skip_omitempty);
    });
}

/// Set whether scalar values in returned document trees are cast.
/// `None` toggles the current setting.
pub fn set_value_cast(cast: Option<bool>) {
    update_defaults(|config| {
        config.cast_values = cast.unwrap_or(!config.cast_values);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_match_on_depth() {
        let members = IgnoreMembers::new(["why", "more.Not"]);
        assert!(members.contains("why", 1));
        assert!(!members.contains("why", 2));
        assert!(members.contains("more.Not", 2));
        assert!(!members.contains("more.Not", 1));
    }

    #[test]
    fn empty_tag_paths_are_dropped() {
        assert!(IgnoreTags::new([""]).is_empty());
        assert!(IgnoreTags::new(Vec::<String>::new()).is_empty());
        assert!(IgnoreTags::new(["a.b"]).contains("a.b"));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = CheckConfig::builder()
            .skip_omitempty(false)
            .cast_values(true)
            .build();
        assert!(!config.skip_omitempty);
        assert!(config.cast_values);
        assert!(config.tags_to_ignore.is_empty());
        assert!(config.members_to_ignore.is_empty());
    }
}
