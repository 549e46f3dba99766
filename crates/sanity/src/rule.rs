//! Rule catalog
//!
//! The fixed vocabulary of rule names a field may declare. Each rule maps to
//! exactly one [`FailureKind`] produced when the rule is violated.
//!
//! Rule names use the short wire form found in field metadata:
//!
//! | Rule | Wire name | Parameter |
//! |---|---|---|
//! | [`Rule::NotNull`] | `notnull` | `"true"` to activate |
//! | [`Rule::GreaterThan`] | `gt` | integer threshold |
//! | [`Rule::LessThan`] | `lt` | integer threshold |
//! | [`Rule::Regex`] | `regex` | pattern |
//! | [`Rule::MaxLength`] | `maxlen` | integer |
//! | [`Rule::MinLength`] | `minlen` | integer |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::failure::FailureKind;

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Value must not be the zero value of its type.
    #[serde(rename = "notnull")]
    NotNull,
    /// Numeric value must not be below the threshold.
    #[serde(rename = "gt")]
    GreaterThan,
    /// Numeric value must not be above the threshold.
    #[serde(rename = "lt")]
    LessThan,
    /// Text must contain a match for the pattern.
    #[serde(rename = "regex")]
    Regex,
    /// Text length must not exceed the limit.
    #[serde(rename = "maxlen")]
    MaxLength,
    /// Text length must reach the limit.
    #[serde(rename = "minlen")]
    MinLength,
}

impl Rule {
    /// Every rule in the catalog.
    pub const ALL: [Rule; 6] = [
        Rule::NotNull,
        Rule::GreaterThan,
        Rule::LessThan,
        Rule::Regex,
        Rule::MaxLength,
        Rule::MinLength,
    ];

    /// Returns the wire name used in field metadata.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotNull => "notnull",
            Self::GreaterThan => "gt",
            Self::LessThan => "lt",
            Self::Regex => "regex",
            Self::MaxLength => "maxlen",
            Self::MinLength => "minlen",
        }
    }

    /// Returns the failure kind this rule produces on violation.
    #[must_use]
    pub const fn failure_kind(self) -> FailureKind {
        match self {
            Self::NotNull => FailureKind::NotNull,
            Self::GreaterThan => FailureKind::GreaterThan,
            Self::LessThan => FailureKind::LessThan,
            Self::Regex => FailureKind::RegexMismatch,
            Self::MaxLength => FailureKind::MaxLengthExceeded,
            Self::MinLength => FailureKind::MinLengthViolated,
        }
    }

    /// Whether a missing parameter is a schema error.
    ///
    /// `notnull` takes a boolean flag that is simply off when absent.
    #[must_use]
    pub const fn requires_parameter(self) -> bool {
        !matches!(self, Self::NotNull)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name is not part of the rule catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{0}`")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRule(s.to_owned()))
    }
}
