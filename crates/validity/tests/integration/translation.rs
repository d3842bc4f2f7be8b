//! Message rendering for validation results.

use pretty_assertions::assert_eq;
use serde_json::json;
use validity::prelude::*;

fn results() -> Results {
    Validator::new([
        FieldSpec::int("age").rules(["between_strict:18,65"]),
        FieldSpec::text("nick").rules(["alpha_dash", "max:4"]),
        FieldSpec::special("cnp").rule("cnp"),
        FieldSpec::float("score").rule("min:1"),
    ])
    .unwrap()
    .validate(&json!({ "age": 18, "nick": "a b c d", "score": "n/a" }))
}

#[test]
fn english() {
    let messages = Catalog::builtin().translate(&results(), "english").unwrap();
    assert_eq!(
        messages["age"],
        ["It must be an integer between 18 and 65 (the boundaries are not allowed)"]
    );
    assert_eq!(
        messages["nick"],
        [
            "It may have alpha-numeric characters, as well as dashes and underscores",
            "It must have at most 4 characters",
        ]
    );
    assert_eq!(messages["cnp"], ["The field is required"]);
    assert_eq!(messages["score"], ["It must be a real number (e.g. 1.45)"]);
}

#[test]
fn romanian() {
    let messages = results().translate(&Catalog::builtin(), "RO").unwrap();
    assert_eq!(
        messages["age"],
        ["Trebuie să fie un număr întreg între 18 și 65 (intervalele nu sunt acceptate)"]
    );
    assert_eq!(messages["nick"][1], "Trebuie să conțină cel mult 4 caractere");
    assert_eq!(messages["cnp"], ["Câmpul este obligatoriu"]);
}

#[test]
fn valid_results_translate_to_nothing() {
    let results = Validator::new([FieldSpec::int("age").rule("min:1")])
        .unwrap()
        .validate(&json!({ "age": 3 }));
    assert!(Catalog::builtin().translate(&results, "en").unwrap().is_empty());
}

#[test]
fn unsupported_locale_is_an_error() {
    let err = Catalog::builtin().translate(&results(), "fr").unwrap_err();
    assert_eq!(err.code(), "TRANSLATE_UNSUPPORTED_LOCALE");
}

#[test]
fn custom_table_from_json() {
    let table = LocaleTable::from_json(
        r#"{
            "tag": "fr",
            "aliases": ["french"],
            "conjunction": "et",
            "rules": { "required": "Champ obligatoire" },
            "kinds": { "Int": { "between_strict": "Entre {args}, bornes exclues" } },
            "fallback": "La règle [{rule}] a échoué"
        }"#,
    )
    .unwrap();
    let catalog = Catalog::builtin().with(table);

    let messages = catalog.translate(&results(), "French").unwrap();
    assert_eq!(messages["age"], ["Entre 18 et 65, bornes exclues"]);
    assert_eq!(messages["cnp"], ["Champ obligatoire"]);
    assert_eq!(messages["score"], ["La règle [Float] a échoué"]);
    assert_eq!(catalog.locales().collect::<Vec<_>>(), ["en", "ro", "fr"]);
}
