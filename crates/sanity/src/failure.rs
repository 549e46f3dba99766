//! Failure kinds and the path-keyed failure map
//!
//! A check produces a [`Report`] holding one [`FailureKind`] per failing
//! path. When several rules fail on the same field the last one evaluated
//! replaces the earlier ones.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

use crate::path::Path;

// ============================================================================
// FAILURE KIND
// ============================================================================

/// The category of a validation failure, one per catalog rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Zero value on a field marked `notnull`.
    #[error("blank value sent to field marked as notnull")]
    NotNull,
    /// Value below the `gt` threshold.
    #[error("value does not satisfy greater than condition")]
    GreaterThan,
    /// Value above the `lt` threshold.
    #[error("value does not satisfy less than condition")]
    LessThan,
    /// Text without a match for the `regex` pattern.
    #[error("does not match pattern")]
    RegexMismatch,
    /// Text longer than `maxlen`.
    #[error("exceeds maximum length")]
    MaxLengthExceeded,
    /// Text shorter than `minlen`.
    #[error("len is smaller than minimum length")]
    MinLengthViolated,
}

impl FailureKind {
    /// Machine-readable code, identical to the serialized form.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotNull => "not_null",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::RegexMismatch => "regex_mismatch",
            Self::MaxLengthExceeded => "max_length_exceeded",
            Self::MinLengthViolated => "min_length_violated",
        }
    }
}

// ============================================================================
// FAILURE MAP
// ============================================================================

/// Mapping from dotted path to the failure recorded there.
///
/// Holds at most one failure per path. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureMap {
    entries: HashMap<String, FailureKind>,
}

impl FailureMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `kind` at `path`, replacing any earlier failure there.
    pub fn record(&mut self, path: &Path, kind: FailureKind) {
        tracing::trace!(path = %path, code = kind.code(), "recorded failure");
        self.entries.insert(path.to_string(), kind);
    }

    /// Folds a partial result into this one. Entries from `other` win.
    pub fn merge(&mut self, other: FailureMap) {
        self.entries.extend(other.entries);
    }

    /// Looks up the failure at a dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<FailureKind> {
        self.entries.get(path).copied()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(path, kind)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FailureKind)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the recorded paths, sorted, for stable display.
    #[must_use]
    pub fn sorted_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Consumes the map and returns the underlying `HashMap`.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, FailureKind> {
        self.entries
    }
}

impl IntoIterator for FailureMap {
    type Item = (String, FailureKind);
    type IntoIter = hash_map::IntoIter<String, FailureKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FailureKind)> for FailureMap {
    fn from_iter<I: IntoIterator<Item = (K, FailureKind)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of a single check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Failures keyed by dotted path.
    pub errors: FailureMap,
}

impl Report {
    #[must_use]
    pub fn new(errors: FailureMap) -> Self {
        Self { errors }
    }

    /// True when no failure was recorded.
    ///
    /// A record abandoned at an unannotated field also yields an empty map,
    /// so this only speaks for the fields that were visited.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
