//! Field metadata
//!
//! A [`Schema`] describes one record: for each declared member name it holds
//! a [`FieldSchema`] with the member's display name, its rule vocabulary, one
//! parameter string per rule, and the schema of nested records.
//!
//! Schemas are plain data. They can be built in code or decoded from JSON:
//!
//! ```
//! use sanity::Schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "id":    { "json": "id", "rules": ["notnull", "maxlen"], "params": { "notnull": "true", "maxlen": "5" } },
//!     "count": { "json": "used_count", "rules": ["gt"], "params": { "gt": "23" } }
//! }"#).unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.get("count").unwrap().resolved_name("count"), "used_count");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::rule::Rule;

// ============================================================================
// SCHEMA
// ============================================================================

/// Metadata for the members of one record, keyed by declared name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldSchema>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the metadata of a member.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        self.insert(name, field);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, field: FieldSchema) {
        self.fields.insert(name.into(), field);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes a schema from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a schema from an already parsed JSON value.
    pub fn from_json_value(json: serde_json::Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(json)?)
    }
}

// ============================================================================
// FIELD SCHEMA
// ============================================================================

/// Metadata attached to one record member.
///
/// `rules` is the member's rule vocabulary. `None` means the member declares
/// no vocabulary at all, which is what [`FieldSchema::default`] and
/// [`FieldSchema::unannotated`] produce; [`FieldSchema::new`] starts from an
/// empty but present vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSchema {
    /// External name used in paths.
    #[serde(rename = "json", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Rule names, in declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,

    /// Parameter string per rule name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub params: IndexMap<String, String>,

    /// Schema for record values found in this member, directly, behind an
    /// optional, or as sequence elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Schema>,
}

impl FieldSchema {
    /// An annotated member with no rules yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// A member with no rule vocabulary.
    #[must_use]
    pub fn unannotated() -> Self {
        Self::default()
    }

    /// Shorthand for an annotated member holding a nested record.
    #[must_use]
    pub fn record(fields: Schema) -> Self {
        Self::new().fields(fields)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replaces the vocabulary with a comma-separated list of rule names.
    #[must_use = "builder methods must be chained or built"]
    pub fn vocabulary(mut self, names: &str) -> Self {
        self.rules = Some(
            names
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_owned)
                .collect(),
        );
        self
    }

    /// Sets the parameter for a rule name without touching the vocabulary.
    #[must_use = "builder methods must be chained or built"]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Adds a rule name to the vocabulary and sets its parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let rules = self.rules.get_or_insert_with(Vec::new);
        if !rules.contains(&name) {
            rules.push(name.clone());
        }
        self.params.insert(name, value.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn not_null(self) -> Self {
        self.rule(Rule::NotNull.name(), "true")
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than(self, threshold: i64) -> Self {
        self.rule(Rule::GreaterThan.name(), threshold.to_string())
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn less_than(self, threshold: i64) -> Self {
        self.rule(Rule::LessThan.name(), threshold.to_string())
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn regex(self, pattern: impl Into<String>) -> Self {
        self.rule(Rule::Regex.name(), pattern)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.rule(Rule::MaxLength.name(), max.to_string())
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength.name(), min.to_string())
    }

    /// Sets the schema used for nested record values.
    #[must_use = "builder methods must be chained or built"]
    pub fn fields(mut self, fields: Schema) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Name used in paths: the display name, or `declared` when none is set.
    #[must_use]
    pub fn resolved_name<'a>(&'a self, declared: &'a str) -> &'a str {
        self.display_name.as_deref().unwrap_or(declared)
    }

    /// Whether the member declares a rule vocabulary.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.rules.is_some()
    }
}
