//! English messages

use crate::translate::LocaleTable;
use crate::value::FieldKind;

pub(crate) fn table() -> LocaleTable {
    let table = LocaleTable::new("en", "and")
        .with_alias("english")
        .with_alias("en-us")
        .with_alias("en-gb")
        .with_fallback("Validation for rule [{rule}] failed!")
        .with_rule("required", "The field is required")
        .with_rule("int", "It must be an integer (e.g. 563)")
        .with_rule("float", "It must be a real number (e.g. 1.45)")
        .with_rule("accepted", "It must be 'yes', 'on' or 1")
        .with_rule("email", "It must be a valid EMAIL address")
        .with_rule("url", "It must be a valid URL")
        .with_rule("ipv4", "It must be a valid IPV4 address")
        .with_rule("ipv6", "It must be a valid IPV6 address")
        .with_rule("ip", "It must be a valid IP address")
        .with_rule("date", "It must be a valid DATE, e.g. Jan 2, 2006 at 3:04pm (MST)")
        .with_rule("regexp", "It must match this pattern: {raw}")
        .with_rule("regex", "It must match this pattern: {raw}")
        .with_rule("alpha", "It must be entirely alphabetic characters")
        .with_rule("alpha_num", "It must be entirely alpha-numeric characters")
        .with_rule(
            "alpha_dash",
            "It may have alpha-numeric characters, as well as dashes and underscores",
        )
        .with_rule(
            "full_name",
            "The field must contain alpha-numeric characters or dots or spaces",
        );

    let table = numeric(table, FieldKind::Int, "an integer");
    let table = numeric(table, FieldKind::Float, "a real number");

    table
        .with_kind_rule(FieldKind::Text, "min", "It must have at least {args} characters")
        .with_kind_rule(FieldKind::Text, "min_len", "It must have at least {args} characters")
        .with_kind_rule(FieldKind::Text, "max", "It must have at most {args} characters")
        .with_kind_rule(FieldKind::Text, "max_len", "It must have at most {args} characters")
        .with_kind_rule(FieldKind::Text, "len", "It must have exactly {args} characters")
        .with_kind_rule(
            FieldKind::Text,
            "between",
            "The length should be between {args} characters (the boundaries are allowed)",
        )
        .with_kind_rule(
            FieldKind::Text,
            "between_strict",
            "The length should be between {args} characters (the boundaries are not allowed)",
        )
        .with_kind_rule(FieldKind::Special, "iban", "It must be a valid bank account (IBAN)")
        .with_kind_rule(
            FieldKind::Special,
            "cif",
            "It must be a valid fiscal identification code (CIF)",
        )
        .with_kind_rule(FieldKind::Special, "cnp", "It must be a valid personal numeric code (CNP)")
        .with_kind_rule(
            FieldKind::Special,
            "short_date",
            "It must be a short date. For example: 02.01.2006",
        )
        .with_kind_rule(
            FieldKind::Special,
            "long_date",
            "It must be a long date. For example: 02.01.2006T15:04:05",
        )
}

fn numeric(table: LocaleTable, kind: FieldKind, noun: &str) -> LocaleTable {
    let between = format!("It must be {noun} between {{args}} (the boundaries are allowed)");
    let between_strict =
        format!("It must be {noun} between {{args}} (the boundaries are not allowed)");
    table
        .with_kind_rule(kind, "min", format!("It must be {noun} greater than or equal to {{args}}"))
        .with_kind_rule(kind, "max", format!("It must be {noun} less than or equal to {{args}}"))
        .with_kind_rule(kind, "between", between.clone())
        .with_kind_rule(kind, "value", between)
        .with_kind_rule(kind, "between_strict", between_strict.clone())
        .with_kind_rule(kind, "value_strict", between_strict)
        .with_kind_rule(kind, "digits", format!("It must be {noun} with exactly {{args}} digits"))
        .with_kind_rule(
            kind,
            "digits_between",
            format!("It must be {noun} with between {{args}} digits (the boundaries are allowed)"),
        )
        .with_kind_rule(
            kind,
            "digits_between_strict",
            format!(
                "It must be {noun} with between {{args}} digits (the boundaries are not allowed)"
            ),
        )
        .with_kind_rule(kind, "accepted", format!("It must be {noun} greater than 0"))
}
