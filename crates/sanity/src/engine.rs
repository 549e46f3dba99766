//! Traversal engine
//!
//! [`Checker`] resolves a [`Schema`] once and then walks values depth-first,
//! dispatching on the closed set of [`Value`] shapes:
//!
//! - **Record**: members are visited in declaration order. A member whose
//!   metadata declares no rule vocabulary either ends the visit of the
//!   enclosing record or is skipped, per [`UnannotatedPolicy`].
//! - **Optional**: an absent value fails `notnull` when active and is
//!   otherwise ignored; a present value is visited in place of the wrapper.
//! - **Record member holding a record**: descends with the member's nested
//!   schema. The member's own rules are not applied to the record.
//! - **Sequence**: an empty sequence fails `notnull` when active; every
//!   element is visited with the member's instructions under its index.
//! - **String / bool / signed integer**: handed to the matching evaluator.
//! - **Unsigned, float, map, array**: never validated.
//!
//! Each step returns its own [`FailureMap`] and the caller merges it.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::evaluate::{evaluate_bool, evaluate_int, evaluate_str};
use crate::failure::{FailureKind, FailureMap, Report};
use crate::instruction::InstructionSet;
use crate::options::{CheckOptions, UnannotatedPolicy};
use crate::path::Path;
use crate::schema::Schema;
use crate::value::{Record, Value};

// ============================================================================
// COMPILED SCHEMA
// ============================================================================

#[derive(Debug, Default)]
struct CompiledSchema {
    fields: HashMap<String, CompiledField>,
}

#[derive(Debug)]
enum CompiledField {
    Unannotated,
    Annotated(Box<AnnotatedField>),
}

#[derive(Debug)]
struct AnnotatedField {
    name: String,
    instructions: InstructionSet,
    nested: CompiledSchema,
}

impl CompiledSchema {
    fn compile(schema: &Schema, prefix: &str, diagnostics: &mut Vec<SchemaError>) -> Self {
        let fields = schema
            .iter()
            .map(|(declared, field)| {
                if !field.is_annotated() {
                    return (declared.to_owned(), CompiledField::Unannotated);
                }

                let name = field.resolved_name(declared).to_owned();
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                let instructions = InstructionSet::resolve(&path, field, diagnostics);
                let nested = field
                    .fields
                    .as_ref()
                    .map(|nested| Self::compile(nested, &path, diagnostics))
                    .unwrap_or_default();

                (
                    declared.to_owned(),
                    CompiledField::Annotated(Box::new(AnnotatedField {
                        name,
                        instructions,
                        nested,
                    })),
                )
            })
            .collect();

        Self { fields }
    }
}

// ============================================================================
// CHECKER
// ============================================================================

/// A schema resolved into rule instructions, ready to check values.
///
/// Immutable after construction; one checker can serve any number of
/// concurrent checks.
///
/// ```
/// use sanity::{Checker, FailureKind, FieldSchema, Record, Schema};
///
/// let schema = Schema::new()
///     .field("Id", FieldSchema::new().display_name("id").not_null().max_length(5))
///     .field("UsedCount", FieldSchema::new().display_name("used_count").greater_than(23));
///
/// let checker = Checker::new(&schema);
/// let report = checker.check(&Record::new().with("Id", "").with("UsedCount", 24i64).into());
///
/// assert!(!report.is_valid());
/// assert_eq!(report.errors.get("id"), Some(FailureKind::NotNull));
/// assert_eq!(report.errors.len(), 1);
/// ```
#[derive(Debug)]
pub struct Checker {
    root: CompiledSchema,
    options: CheckOptions,
    diagnostics: Vec<SchemaError>,
}

impl Checker {
    /// Resolves `schema` with default options.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        Self::with_options(schema, CheckOptions::default())
    }

    /// Resolves `schema` with the given options.
    ///
    /// Instructions that cannot be resolved are dropped and kept as
    /// [`diagnostics`](Self::diagnostics).
    #[must_use]
    pub fn with_options(schema: &Schema, options: CheckOptions) -> Self {
        let mut diagnostics = Vec::new();
        let root = CompiledSchema::compile(schema, "", &mut diagnostics);

        for err in &diagnostics {
            tracing::warn!(code = err.code(), error = %err, "rule instruction will never fire");
        }

        Self {
            root,
            options,
            diagnostics,
        }
    }

    /// Like [`with_options`](Self::with_options), but fails on the first
    /// instruction that cannot be resolved.
    pub fn strict(schema: &Schema, options: CheckOptions) -> Result<Self, SchemaError> {
        let mut checker = Self::with_options(schema, options);
        if checker.diagnostics.is_empty() {
            Ok(checker)
        } else {
            Err(checker.diagnostics.swap_remove(0))
        }
    }

    /// Instructions dropped while resolving the schema.
    #[must_use]
    pub fn diagnostics(&self) -> &[SchemaError] {
        &self.diagnostics
    }

    #[must_use]
    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Walks `value` and collects every failure.
    ///
    /// The root must be a record, or a present optional holding one. Any
    /// other root yields an empty report.
    #[must_use]
    pub fn check(&self, value: &Value) -> Report {
        tracing::debug!(root = value.kind(), "check started");

        let errors = match value {
            Value::Record(record) => self.visit_record(record, &self.root, &Path::root(), 0),
            Value::Optional(Some(inner)) => match inner.as_ref() {
                Value::Record(record) => self.visit_record(record, &self.root, &Path::root(), 0),
                other => {
                    tracing::trace!(root = other.kind(), "root is not a record, nothing to check");
                    FailureMap::new()
                }
            },
            other => {
                tracing::trace!(root = other.kind(), "root is not a record, nothing to check");
                FailureMap::new()
            }
        };

        tracing::debug!(failures = errors.len(), "check finished");
        Report::new(errors)
    }

    fn visit_record(
        &self,
        record: &Record,
        schema: &CompiledSchema,
        path: &Path,
        depth: usize,
    ) -> FailureMap {
        let mut failures = FailureMap::new();

        if let Some(max) = self.options.max_depth
            && depth > max
        {
            tracing::warn!(path = %path, depth, max, "record nested beyond max depth, not visited");
            return failures;
        }

        for (declared, value) in record.iter() {
            let field = match schema.fields.get(declared) {
                Some(CompiledField::Annotated(field)) => field,
                Some(CompiledField::Unannotated) | None => match self.options.unannotated {
                    UnannotatedPolicy::Abandon => {
                        tracing::trace!(
                            path = %path,
                            member = declared,
                            "member has no rule vocabulary, abandoning record"
                        );
                        break;
                    }
                    UnannotatedPolicy::Skip => {
                        tracing::trace!(
                            path = %path,
                            member = declared,
                            "member has no rule vocabulary, skipped"
                        );
                        continue;
                    }
                },
            };

            let field_path = path.field(field.name.as_str());
            failures.merge(self.visit_field(value, field, &field_path, depth));
        }

        failures
    }

    fn visit_field(
        &self,
        value: &Value,
        field: &AnnotatedField,
        path: &Path,
        depth: usize,
    ) -> FailureMap {
        let set = &field.instructions;

        let failure = match value {
            Value::Optional(None) => set.not_null.then_some(FailureKind::NotNull),
            Value::Optional(Some(inner)) => {
                if let Value::Optional(_) = inner.as_ref() {
                    tracing::trace!(path = %path, "nested optional, skipped");
                    return FailureMap::new();
                }
                return self.visit_field(inner, field, path, depth);
            }
            Value::Record(record) => {
                return self.visit_record(record, &field.nested, path, depth + 1);
            }
            Value::Sequence(items) => return self.visit_sequence(items, field, path, depth),
            Value::Str(s) => evaluate_str(s, set, self.options.length_mode),
            Value::Bool(b) => evaluate_bool(*b, set),
            Value::Int(n) => evaluate_int(*n, set),
            Value::Uint(_) | Value::Float(_) | Value::Map(_) | Value::Array(_) => {
                tracing::trace!(path = %path, kind = value.kind(), "unsupported kind, skipped");
                None
            }
        };

        let mut failures = FailureMap::new();
        if let Some(kind) = failure {
            failures.record(path, kind);
        }
        failures
    }

    fn visit_sequence(
        &self,
        items: &[Value],
        field: &AnnotatedField,
        path: &Path,
        depth: usize,
    ) -> FailureMap {
        let mut failures = FailureMap::new();

        if field.instructions.not_null && items.is_empty() {
            failures.record(path, FailureKind::NotNull);
        }

        for (index, item) in items.iter().enumerate() {
            failures.merge(self.visit_field(item, field, &path.index(index), depth));
        }

        failures
    }
}

/// Checks `value` against `schema` with default options.
///
/// Returns the report together with its validity flag.
#[must_use]
pub fn check(schema: &Schema, value: &Value) -> (Report, bool) {
    let report = Checker::new(schema).check(value);
    let valid = report.is_valid();
    (report, valid)
}
