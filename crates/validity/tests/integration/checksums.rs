//! Romanian identifier checks through Special fields.

use rstest::rstest;
use serde_json::json;
use validity::prelude::*;

fn check(rule: &str, value: &str) -> bool {
    let validator = Validator::with_config(
        [FieldSpec::special("v").rule(rule)],
        ValidatorConfig::default().with_reference_year(2026),
    )
    .unwrap();
    validator.validate(&json!({ "v": value })).is_valid()
}

#[rstest]
#[case("RO49AAAA1B31007593840000")]
#[case("RO14CECEGR0201RON0269171")]
#[case("RO74rzbr0000060001635742")]
fn bank_accounts(#[case] iban: &str) {
    assert!(check("iban", iban));
}

#[test]
fn bank_account_mutations_fail() {
    let iban = "RO14CECEGR0201RON0269171";
    for digit in ['0', '2', '3', '4', '5', '6', '7', '8', '9'] {
        let mutated = format!("{}{digit}", &iban[..iban.len() - 1]);
        assert!(!check("iban", &mutated), "{mutated}");
    }
    assert!(!check("iban", ""));
    assert!(!check("iban", "RO"));
    assert!(!check("iban", "XX49AAAA1B31007593840000"));
}

#[test]
fn company_ids() {
    assert!(check("cif", "13880063"));
    assert!(check("cif", "4446651"));
    for last in ['0', '1', '2', '4', '5', '6', '7', '8', '9'] {
        assert!(!check("cif", &format!("1388006{last}")));
    }
    assert!(!check("cif", "aaaaaaaaaa"));
}

#[test]
fn personal_ids() {
    assert!(check("cnp", "1851021345131"));
    for last in '0'..='9' {
        assert_eq!(check("cnp", &format!("185102134513{last}")), last == '1');
    }
    assert!(!check("cnp", "5160230000000"));
}

#[test]
fn special_email_is_bounded() {
    assert!(check("email", "popescu@vlad.ro"));
    assert!(!check("email", "popescu@vlad"));
    assert!(!check("email", ""));

    let validator = Validator::with_config(
        [FieldSpec::special("v").rule("email")],
        ValidatorConfig::default().with_email_len(3, 100),
    )
    .unwrap();
    assert!(validator.validate(&json!({ "v": "a@b.ro" })).is_valid());
}
