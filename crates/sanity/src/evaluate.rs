//! Leaf evaluators
//!
//! One evaluator per scalar type. Each runs the instructions that apply to
//! its type in a fixed order (`notnull` first, then the type-specific
//! rules) and returns the failure of the last check that failed.

use crate::failure::FailureKind;
use crate::instruction::InstructionSet;
use crate::options::LengthMode;
use crate::value::Int;

/// Text: `notnull`, `regex`, `maxlen`, `minlen`.
#[must_use]
pub fn evaluate_str(input: &str, set: &InstructionSet, mode: LengthMode) -> Option<FailureKind> {
    let mut failure = None;
    let len = i64::try_from(mode.measure(input)).unwrap_or(i64::MAX);

    if set.not_null && input.is_empty() {
        failure = Some(FailureKind::NotNull);
    }

    if let Some(regex) = &set.regex
        && !regex.is_match(input)
    {
        failure = Some(FailureKind::RegexMismatch);
    }

    if let Some(max) = set.max_length
        && len > max
    {
        failure = Some(FailureKind::MaxLengthExceeded);
    }

    if let Some(min) = set.min_length
        && len < min
    {
        failure = Some(FailureKind::MinLengthViolated);
    }

    failure
}

/// Boolean: `notnull` only.
#[must_use]
pub fn evaluate_bool(input: bool, set: &InstructionSet) -> Option<FailureKind> {
    (set.not_null && !input).then_some(FailureKind::NotNull)
}

/// Signed integer: `notnull`, `gt`, `lt`.
///
/// The input is widened to `i64` before comparing, whatever its width.
#[must_use]
pub fn evaluate_int(input: Int, set: &InstructionSet) -> Option<FailureKind> {
    let mut failure = None;
    let n = input.get();

    if set.not_null && input.is_zero() {
        failure = Some(FailureKind::NotNull);
    }

    if let Some(gt) = set.greater_than
        && n < gt
    {
        failure = Some(FailureKind::GreaterThan);
    }

    if let Some(lt) = set.less_than
        && n > lt
    {
        failure = Some(FailureKind::LessThan);
    }

    failure
}
