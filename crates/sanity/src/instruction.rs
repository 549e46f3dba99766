//! Rule instructions
//!
//! An [`InstructionSet`] is the resolved form of a member's rule vocabulary:
//! each `(rule name, parameter string)` pair is parsed once into a typed
//! parameter. Pairs that cannot be resolved are left out and reported as
//! [`SchemaError`] diagnostics.

use regex::Regex;

use crate::error::SchemaError;
use crate::rule::Rule;
use crate::schema::FieldSchema;

/// Typed instructions active on one member.
#[derive(Debug, Clone, Default)]
pub struct InstructionSet {
    pub not_null: bool,
    pub greater_than: Option<i64>,
    pub less_than: Option<i64>,
    pub regex: Option<Regex>,
    pub max_length: Option<i64>,
    pub min_length: Option<i64>,
}

impl InstructionSet {
    /// Resolves the vocabulary of `field`.
    ///
    /// `path` is the dotted schema path of the member and is only used to
    /// label diagnostics. Names outside the catalog, value rules without a
    /// parameter and malformed parameters are pushed to `diagnostics` and
    /// contribute nothing to the set. A `notnull` flag without a parameter
    /// stays off.
    pub fn resolve(path: &str, field: &FieldSchema, diagnostics: &mut Vec<SchemaError>) -> Self {
        let mut set = Self::default();
        let Some(names) = &field.rules else {
            return set;
        };

        for name in names {
            let rule = match name.parse::<Rule>() {
                Ok(rule) => rule,
                Err(_) => {
                    diagnostics.push(SchemaError::UnknownRule {
                        field: path.to_owned(),
                        name: name.clone(),
                    });
                    continue;
                }
            };

            let Some(param) = field.params.get(name).filter(|p| !p.is_empty()) else {
                if rule.requires_parameter() {
                    diagnostics.push(SchemaError::MissingParameter {
                        field: path.to_owned(),
                        rule,
                    });
                }
                continue;
            };

            if let Err(err) = set.apply(path, rule, param) {
                diagnostics.push(err);
            }
        }

        set
    }

    fn apply(&mut self, path: &str, rule: Rule, param: &str) -> Result<(), SchemaError> {
        match rule {
            Rule::NotNull => {
                self.not_null = match param {
                    "true" => true,
                    "false" => false,
                    _ => {
                        return Err(SchemaError::InvalidFlag {
                            field: path.to_owned(),
                            value: param.to_owned(),
                        });
                    }
                };
            }
            Rule::GreaterThan => self.greater_than = Some(parse_threshold(path, rule, param)?),
            Rule::LessThan => self.less_than = Some(parse_threshold(path, rule, param)?),
            Rule::Regex => {
                let regex = Regex::new(param).map_err(|e| SchemaError::InvalidPattern {
                    field: path.to_owned(),
                    pattern: param.to_owned(),
                    reason: e.to_string(),
                })?;
                self.regex = Some(regex);
            }
            Rule::MaxLength => self.max_length = Some(parse_length(path, rule, param)?),
            Rule::MinLength => self.min_length = Some(parse_length(path, rule, param)?),
        }
        Ok(())
    }

    /// Whether no instruction is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.not_null
            && self.greater_than.is_none()
            && self.less_than.is_none()
            && self.regex.is_none()
            && self.max_length.is_none()
            && self.min_length.is_none()
    }
}

fn parse_threshold(path: &str, rule: Rule, param: &str) -> Result<i64, SchemaError> {
    param
        .parse::<i64>()
        .map_err(|_| SchemaError::InvalidNumber {
            field: path.to_owned(),
            rule,
            value: param.to_owned(),
        })
}

fn parse_length(path: &str, rule: Rule, param: &str) -> Result<i64, SchemaError> {
    param
        .parse::<i64>()
        .map_err(|_| SchemaError::InvalidLength {
            field: path.to_owned(),
            rule,
            value: param.to_owned(),
        })
}
