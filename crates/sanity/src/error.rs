//! Schema resolution errors
//!
//! [`SchemaError`] covers problems in the schema itself, never in the values
//! being checked.

use crate::rule::Rule;

/// Problems found while resolving a schema into rule instructions.
///
/// None of these abort a check: an instruction that cannot be resolved is
/// simply never evaluated. [`Checker::diagnostics`](crate::Checker::diagnostics)
/// lists them and [`Checker::strict`](crate::Checker::strict) refuses to build
/// when any is present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The schema document itself could not be decoded.
    #[error("invalid schema document: {0}")]
    Parse(String),

    /// A vocabulary entry is not part of the rule catalog.
    #[error("`{field}`: unknown rule `{name}`")]
    UnknownRule { field: String, name: String },

    /// A rule is listed in the vocabulary without a parameter.
    #[error("`{field}`: rule `{rule}` has no parameter")]
    MissingParameter { field: String, rule: Rule },

    /// `notnull` parameter is neither `true` nor `false`.
    #[error("`{field}`: notnull flag `{value}` is not a boolean")]
    InvalidFlag { field: String, value: String },

    /// `gt` / `lt` threshold is not an integer.
    #[error("`{field}`: `{rule}` threshold `{value}` is not an integer")]
    InvalidNumber {
        field: String,
        rule: Rule,
        value: String,
    },

    /// `maxlen` / `minlen` limit is not an integer.
    #[error("`{field}`: `{rule}` length `{value}` is not an integer")]
    InvalidLength {
        field: String,
        rule: Rule,
        value: String,
    },

    /// `regex` pattern does not compile.
    #[error("`{field}`: pattern `{pattern}` does not compile: {reason}")]
    InvalidPattern {
        field: String,
        pattern: String,
        reason: String,
    },
}

impl SchemaError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Parse(_) => "SCHEMA_PARSE",
            Self::UnknownRule { .. } => "SCHEMA_UNKNOWN_RULE",
            Self::MissingParameter { .. } => "SCHEMA_MISSING_PARAM",
            Self::InvalidFlag { .. } => "SCHEMA_INVALID_FLAG",
            Self::InvalidNumber { .. } => "SCHEMA_INVALID_NUMBER",
            Self::InvalidLength { .. } => "SCHEMA_INVALID_LENGTH",
            Self::InvalidPattern { .. } => "SCHEMA_INVALID_PATTERN",
        }
    }

    /// Dotted schema path of the offending field, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Parse(_) => None,
            Self::UnknownRule { field, .. }
            | Self::MissingParameter { field, .. }
            | Self::InvalidFlag { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidLength { field, .. }
            | Self::InvalidPattern { field, .. } => Some(field),
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
