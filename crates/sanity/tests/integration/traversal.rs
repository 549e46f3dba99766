use pretty_assertions::assert_eq;
use sanity::prelude::*;

fn order_schema() -> Schema {
    Schema::new().field(
        "Order",
        FieldSchema::record(
            Schema::new()
                .field("Ref", FieldSchema::new().display_name("ref").not_null())
                .field(
                    "Items",
                    FieldSchema::new()
                        .display_name("items")
                        .not_null()
                        .min_length(2)
                        .max_length(6),
                ),
        )
        .display_name("order"),
    )
}

fn order(items: Vec<&str>) -> Value {
    Record::new()
        .with(
            "Order",
            Record::new().with("Ref", "r-1").with("Items", items),
        )
        .into()
}

#[test]
fn failing_second_element_is_index_qualified() {
    let (report, valid) = check(&order_schema(), &order(vec!["pen", "notebooks"]));
    assert!(!valid);
    assert_eq!(report.errors.sorted_paths(), ["order.items.1"]);
    assert_eq!(
        report.errors.get("order.items.1"),
        Some(FailureKind::MaxLengthExceeded)
    );
}

#[test]
fn empty_sequence_fails_once_at_member_path() {
    let (report, _) = check(&order_schema(), &order(Vec::new()));
    assert_eq!(report.errors.sorted_paths(), ["order.items"]);
    assert_eq!(
        report.errors.get("order.items"),
        Some(FailureKind::NotNull)
    );
}

#[test]
fn repeated_occurrences_get_distinct_paths() {
    let (report, _) = check(&order_schema(), &order(vec!["x", "ok", "y", ""]));
    assert_eq!(
        report.errors.sorted_paths(),
        ["order.items.0", "order.items.2", "order.items.3"]
    );
    // Blank element: not-null fires first, then min-length replaces it.
    assert_eq!(
        report.errors.get("order.items.3"),
        Some(FailureKind::MinLengthViolated)
    );
}

#[test]
fn sequence_of_optional_records() {
    let schema = Schema::new().field(
        "people",
        FieldSchema::record(
            Schema::new().field("name", FieldSchema::new().regex("^[A-Z][a-z]+$")),
        )
        .not_null(),
    );
    let value = Record::new()
        .with(
            "people",
            vec![
                Value::some(Record::new().with("name", "Ada")),
                Value::none(),
                Value::some(Record::new().with("name", "bob")),
            ],
        )
        .into();

    let (report, _) = check(&schema, &value);
    assert_eq!(
        report.errors.sorted_paths(),
        ["people.1", "people.2.name"]
    );
    assert_eq!(report.errors.get("people.1"), Some(FailureKind::NotNull));
    assert_eq!(
        report.errors.get("people.2.name"),
        Some(FailureKind::RegexMismatch)
    );
}

#[test]
fn absent_optional_without_not_null_leaves_no_entry() {
    let schema = Schema::new()
        .field(
            "profile",
            FieldSchema::record(Schema::new().field("age", FieldSchema::new().not_null())),
        )
        .field("active", FieldSchema::new().not_null());
    let value = Record::new()
        .with("profile", Value::none())
        .with("active", true)
        .into();

    let (report, valid) = check(&schema, &value);
    assert!(valid);
    assert!(!report.errors.iter().any(|(p, _)| p.starts_with("profile")));
}

#[test]
fn present_optional_record_is_descended() {
    let schema = Schema::new().field(
        "profile",
        FieldSchema::record(Schema::new().field("age", FieldSchema::new().greater_than(18))),
    );
    let value = Record::new()
        .with("profile", Value::some(Record::new().with("age", 12i8)))
        .into();
    let (report, _) = check(&schema, &value);
    assert_eq!(
        report.errors.get("profile.age"),
        Some(FailureKind::GreaterThan)
    );
}

#[test]
fn fields_after_an_unannotated_member_are_never_visited() {
    let schema = Schema::new()
        .field("first", FieldSchema::new().not_null())
        .field("second", FieldSchema::unannotated())
        .field("third", FieldSchema::new().not_null());
    let value = Record::new()
        .with("first", "")
        .with("second", "")
        .with("third", "")
        .into();

    let (report, _) = check(&schema, &value);
    assert_eq!(report.errors.sorted_paths(), ["first"]);
}

#[test]
fn skip_policy_visits_fields_after_unannotated_member() {
    let schema = Schema::new()
        .field("first", FieldSchema::new().not_null())
        .field("second", FieldSchema::unannotated())
        .field("third", FieldSchema::new().not_null());
    let value = Record::new()
        .with("first", "")
        .with("second", "")
        .with("third", "")
        .into();

    let checker = Checker::with_options(
        &schema,
        CheckOptions::new().with_unannotated(UnannotatedPolicy::Skip),
    );
    assert_eq!(checker.check(&value).errors.sorted_paths(), ["first", "third"]);
}

#[test]
fn unsigned_members_are_unvalidatable() {
    let schema = Schema::new()
        .field("count", FieldSchema::new().not_null().greater_than(5))
        .field("flag", FieldSchema::new().not_null());
    let value = Record::new()
        .with("count", 0u64)
        .with("flag", false)
        .into();
    let (report, _) = check(&schema, &value);
    assert_eq!(report.errors.sorted_paths(), ["flag"]);
}

#[test]
fn every_signed_width_is_checked() {
    let schema = Schema::new()
        .field("a", FieldSchema::new().less_than(10))
        .field("b", FieldSchema::new().less_than(10))
        .field("c", FieldSchema::new().less_than(10))
        .field("d", FieldSchema::new().less_than(10))
        .field("e", FieldSchema::new().less_than(10));
    let value = Record::new()
        .with("a", 11i8)
        .with("b", 11i16)
        .with("c", 11i32)
        .with("d", 11i64)
        .with("e", 11isize)
        .into();
    let (report, _) = check(&schema, &value);
    assert_eq!(report.errors.len(), 5);
    assert!(report.errors.iter().all(|(_, k)| k == FailureKind::LessThan));
}

#[test]
fn checking_twice_yields_identical_maps() {
    let checker = Checker::new(&order_schema());
    let value = order(vec!["x", "okay", "waytoolong"]);
    let first = checker.check(&value);
    let second = checker.check(&value);
    assert_eq!(first, second);
}

#[test]
fn malformed_parameters_never_fire() {
    let schema = Schema::new()
        .field("n", FieldSchema::new().rule("gt", "lots"))
        .field("s", FieldSchema::new().rule("maxlen", "five").rule("regex", "(["));
    let value = Record::new().with("n", -100i32).with("s", "abcdefgh").into();

    let checker = Checker::new(&schema);
    assert!(checker.check(&value).is_valid());
    assert_eq!(checker.diagnostics().len(), 3);
    assert!(Checker::strict(&schema, CheckOptions::default()).is_err());
}

#[test]
fn thresholds_wider_than_the_field_still_apply() {
    let schema = Schema::new()
        .field("small", FieldSchema::new().greater_than(300))
        .field("tiny", FieldSchema::new().less_than(-300));
    let value = Record::new().with("small", 5i8).with("tiny", 5i8).into();

    let (report, valid) = check(&schema, &value);
    assert!(!valid);
    assert_eq!(report.errors.get("small"), Some(FailureKind::GreaterThan));
    assert_eq!(report.errors.get("tiny"), Some(FailureKind::LessThan));
}

#[test]
fn negative_max_length_fails_every_string() {
    let schema = Schema::new()
        .field("code", FieldSchema::new().rule("maxlen", "-1"))
        .field("note", FieldSchema::new().rule("minlen", "-1"));
    let value = Record::new().with("code", "a").with("note", "").into();

    let checker = Checker::new(&schema);
    assert!(checker.diagnostics().is_empty());
    assert_eq!(
        checker.check(&value).errors.sorted_paths(),
        ["code"]
    );
}

#[test]
fn padded_length_never_fires() {
    let schema = Schema::new().field("code", FieldSchema::new().rule("maxlen", " 5"));
    let value = Record::new().with("code", "abcdefgh").into();

    let checker = Checker::new(&schema);
    assert!(checker.check(&value).is_valid());
    assert_eq!(checker.diagnostics().len(), 1);
}
