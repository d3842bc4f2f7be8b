//! Schema compilation and evaluation through the public API.

use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use validity::prelude::*;

use crate::init_tracing;

fn person() -> Validator {
    Validator::with_config(
        [
            FieldSpec::int("age").rules(["between:18,65"]),
            FieldSpec::float("salary").rules(["min:0", "digits_between:3,6"]),
            FieldSpec::text("name").rules(["full_name", "between:3,40"]),
            FieldSpec::text("email").rules(["optional", "email"]),
            FieldSpec::special("cnp").rule("cnp"),
            FieldSpec::special("iban").rule("iban").optional(),
            FieldSpec::special("born").rule("short_date"),
        ],
        ValidatorConfig::default().with_reference_year(2026),
    )
    .unwrap()
}

#[test]
fn valid_person() {
    init_tracing();
    let results = person().validate(&json!({
        "age": 40,
        "salary": "4500.50",
        "name": "Ion Popescu",
        "email": "popescu@vlad.ro",
        "cnp": "1851021345131",
        "iban": "RO49AAAA1B31007593840000",
        "born": "21.10.1985",
    }));

    assert!(results.is_valid());
    assert_eq!(results.value("age"), Some(&TypedValue::Int(40)));
    assert_eq!(results.value("salary"), Some(&TypedValue::Float(4500.5)));
    assert_eq!(results.data().len(), 7);
    assert!(results.error_map().is_empty());
}

#[test]
fn every_failure_is_reported() {
    let results = person().validate(&json!({
        "age": "seventy",
        "salary": -5,
        "name": "I-",
        "email": "popescu@vlad",
        "cnp": "1851021345132",
        "born": "30.02.1985",
    }));

    assert!(!results.is_valid());
    assert_eq!(results.errors("age"), ["Int"]);
    assert_eq!(results.errors("salary"), ["min:0", "digits_between:3,6"]);
    assert_eq!(results.errors("name"), ["full_name", "between:3,40"]);
    assert_eq!(results.errors("email"), ["email"]);
    assert_eq!(results.errors("cnp"), ["cnp"]);
    assert!(results.errors("iban").is_empty());
    assert_eq!(results.errors("born"), ["short_date"]);
    assert!(results.data().is_empty());
}

#[test]
fn required_and_optional_omission() {
    let results = person().validate(&json!({}));
    assert_eq!(results.errors("age"), ["required"]);
    assert_eq!(results.errors("cnp"), ["required"]);

    let email = results.field("email").unwrap();
    assert!(email.is_valid);
    assert!(email.errors.is_empty());
    assert_eq!(email.value, None);
}

#[test]
fn null_counts_as_absent() {
    let results = person().validate(&json!({ "age": null, "email": null }));
    assert_eq!(results.errors("age"), ["required"]);
    assert!(results.errors("email").is_empty());
}

#[rstest]
#[case(17, false)]
#[case(18, true)]
#[case(65, true)]
#[case(66, false)]
fn between_is_inclusive(#[case] age: i64, #[case] valid: bool) {
    let results = person().validate(&json!({ "age": age }));
    assert_eq!(results.field("age").unwrap().is_valid, valid);
}

#[test]
fn data_sources_agree() {
    let validator = Validator::new([FieldSpec::int("n").rule("digits:4")]).unwrap();

    let object = json!({ "n": 5000 });
    let hash: HashMap<String, Value> = [("n".to_owned(), json!(5000))].into();
    let tree: BTreeMap<String, Value> = [("n".to_owned(), json!("500"))].into();

    assert!(validator.validate(&object).is_valid());
    assert!(validator.validate(object.as_object().unwrap()).is_valid());
    assert!(validator.validate(&hash).is_valid());
    assert_eq!(validator.validate(&tree).errors("n"), ["digits:4"]);
}

#[test]
fn schema_from_json() {
    let validator = Validator::from_json(
        r#"[
            { "name": "company", "type": "Special", "rules": ["cif"] },
            { "name": "title", "kind": "String", "rules": ["required", "max_len:10"] },
            { "name": "score", "kind": "Float", "rules": ["value_strict:0,10"], "optional": true }
        ]"#,
        ValidatorConfig::default(),
    )
    .unwrap();

    let kinds: Vec<FieldKind> = validator.fields().map(FieldSpec::kind).collect();
    assert_eq!(kinds, [FieldKind::Special, FieldKind::Text, FieldKind::Float]);

    let results = validator.validate(&json!({ "company": "13880063", "title": "Director general" }));
    assert!(results.field("company").unwrap().is_valid);
    assert_eq!(results.errors("title"), ["max_len:10"]);
    assert!(results.field("score").unwrap().is_valid);
}

#[rstest]
#[case(FieldSpec::int("x").rule("between:1"), "RULE_ARITY")]
#[case(FieldSpec::int("x").rule("between:9,1"), "RULE_INVALID_RANGE")]
#[case(FieldSpec::int("x").rule("min:ten"), "RULE_INVALID_ARGUMENT")]
#[case(FieldSpec::int("x").rule("email"), "RULE_UNKNOWN")]
#[case(FieldSpec::text("x").rule("iban"), "RULE_UNKNOWN")]
#[case(FieldSpec::special("x").rule("between:1,2"), "RULE_UNKNOWN")]
#[case(FieldSpec::text("x").rule("regexp:[a-"), "RULE_INVALID_PATTERN")]
#[case(FieldSpec::text("x").rule("  "), "RULE_EMPTY")]
fn configuration_errors_are_not_failures(#[case] field: FieldSpec, #[case] code: &str) {
    let err = Validator::new([field]).unwrap_err();
    assert_eq!(err.code(), code);
    assert_eq!(err.field(), Some("x"));
}

#[test]
fn unknown_rule_message_names_kind() {
    let err = Validator::new([FieldSpec::int("x").rule("frobnicate")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `x`: the Int checker does not have the rule `frobnicate`"
    );
}

#[test]
fn validate_map_compiles_and_runs() {
    let results = validate_map(
        &json!({ "ip": "10.0.0.256" }),
        [FieldSpec::text("ip").rule("ip")],
    )
    .unwrap();
    assert_eq!(results.errors("ip"), ["ip"]);

    assert!(validate_map(&json!({}), [FieldSpec::text("ip").rule("cnp")]).is_err());
}

#[test]
fn parallel_evaluation_matches_sequential() {
    init_tracing();
    let fields: Vec<FieldSpec> = (0..64)
        .map(|i| FieldSpec::int(format!("f{i}")).rules(["min:10", "digits:2"]))
        .collect();
    let validator = Validator::new(fields).unwrap();
    let data: serde_json::Map<String, Value> = (0..64)
        .filter(|i| i % 7 != 0)
        .map(|i| (format!("f{i}"), json!(i * 3)))
        .collect();

    let sequential = validator.validate(&data);
    for workers in [0, 2, 4, 8, 100] {
        assert_eq!(validator.validate_parallel(&data, workers), sequential);
    }
    assert!(!sequential.is_valid());
}

#[test]
fn extreme_personal_id_age_does_not_panic() {
    let config = ValidatorConfig::from_json(
        r#"{ "personal_id_min_age": -2147483648, "reference_year": 2026 }"#,
    )
    .unwrap();
    let validator = Validator::with_config([FieldSpec::special("cnp").rule("cnp")], config).unwrap();
    assert!(validator.validate(&json!({ "cnp": "7000229400012" })).is_valid());
    assert!(validator.validate(&json!({ "cnp": "1851021345131" })).is_valid());
}

#[rstest]
#[case(json!(40.0), Some(40))]
#[case(json!(-3.0), Some(-3))]
#[case(json!(40.5), None)]
#[case(json!(1e300), None)]
fn whole_json_floats_are_integers(#[case] raw: Value, #[case] expected: Option<i64>) {
    let results = Validator::new([FieldSpec::int("age")])
        .unwrap()
        .validate(&json!({ "age": raw }));
    assert_eq!(results.value("age").and_then(TypedValue::as_int), expected);
    if expected.is_none() {
        assert_eq!(results.errors("age"), ["Int"]);
    }
}

#[test]
fn text_dates_carry_a_zone() {
    init_tracing();
    let validator = Validator::new([FieldSpec::text("published").rule("date")]).unwrap();
    let results = validator.validate(&json!({ "published": "Feb 3, 2013 at 7:54pm (PST)" }));
    assert!(results.is_valid());

    let results = validator.validate(&json!({ "published": "03.02.2013" }));
    assert_eq!(results.errors("published"), ["date"]);
    assert_eq!(
        results.translate(&Catalog::builtin(), "en").unwrap()["published"],
        ["It must be a valid DATE, e.g. Jan 2, 2006 at 3:04pm (MST)"]
    );
}
