//! Check configuration

use serde::{Deserialize, Serialize};

/// What to do on reaching a record member that declares no rule vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnannotatedPolicy {
    /// Stop visiting the remaining members of the enclosing record.
    #[default]
    Abandon,
    /// Skip that member and continue with its siblings.
    Skip,
}

/// How to count string length for `maxlen` / `minlen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

/// Options applied to every check run by a [`Checker`](crate::Checker).
///
/// ```
/// use sanity::{CheckOptions, LengthMode, UnannotatedPolicy};
///
/// let options: CheckOptions = serde_json::from_str(r#"{ "unannotated": "skip" }"#).unwrap();
/// assert_eq!(options.unannotated, UnannotatedPolicy::Skip);
/// assert_eq!(options.length_mode, LengthMode::Bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    pub unannotated: UnannotatedPolicy,
    pub length_mode: LengthMode,
    /// Deepest record nesting that is visited; `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl CheckOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_unannotated(mut self, policy: UnannotatedPolicy) -> Self {
        self.unannotated = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
