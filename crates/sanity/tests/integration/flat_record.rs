use pretty_assertions::assert_eq;
use sanity::prelude::*;

fn flat_schema() -> Schema {
    Schema::new()
        .field(
            "Id",
            FieldSchema::unannotated()
                .display_name("id")
                .vocabulary("notnull,maxlen")
                .param("notnull", "true")
                .param("maxlen", "5"),
        )
        .field(
            "Description",
            FieldSchema::unannotated()
                .display_name("description")
                .vocabulary("notnull")
                .param("notnull", "true"),
        )
        .field(
            "UsedCount",
            FieldSchema::unannotated()
                .display_name("used_count")
                .vocabulary("notnull,gt")
                .param("gt", "23")
                .param("notnull", "true"),
        )
}

fn flat(id: &str, description: Option<&str>, used_count: i64) -> Value {
    Record::new()
        .with("Id", id)
        .with("Description", description)
        .with("UsedCount", used_count)
        .into()
}

#[test]
fn fully_valid_record() {
    let (report, valid) = check(&flat_schema(), &flat("abc", Some("sample"), 24));
    assert!(valid);
    assert_eq!(report, Report::default());
}

#[test]
fn blank_id_is_the_only_failure() {
    let (report, valid) = check(
        &flat_schema(),
        &flat("", Some("this is just a sample description"), 24),
    );
    assert!(!valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors.get("id"), Some(FailureKind::NotNull));
}

#[test]
fn every_member_can_fail_at_once() {
    let (report, _) = check(&flat_schema(), &flat("abcdef", None, 0));
    assert_eq!(
        report.errors.sorted_paths(),
        ["description", "id", "used_count"]
    );
    assert_eq!(report.errors.get("id"), Some(FailureKind::MaxLengthExceeded));
    assert_eq!(
        report.errors.get("description"),
        Some(FailureKind::NotNull)
    );
    // 0 is both null and under the threshold; the later check wins.
    assert_eq!(
        report.errors.get("used_count"),
        Some(FailureKind::GreaterThan)
    );
}

#[test]
fn threshold_boundary() {
    let schema = flat_schema();
    assert!(check(&schema, &flat("a", Some("d"), 24)).1);
    assert!(check(&schema, &flat("a", Some("d"), 23)).1);
    let (report, valid) = check(&schema, &flat("a", Some("d"), 22));
    assert!(!valid);
    assert_eq!(
        report.errors.get("used_count"),
        Some(FailureKind::GreaterThan)
    );
}

#[test]
fn report_serializes_as_error_map() {
    let (report, _) = check(&flat_schema(), &flat("", Some("d"), 24));
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({ "errors": { "id": "not_null" } })
    );
}
