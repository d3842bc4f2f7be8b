//! Romanian messages

use crate::translate::LocaleTable;
use crate::value::FieldKind;

pub(crate) fn table() -> LocaleTable {
    let table = LocaleTable::new("ro", "și")
        .with_alias("romanian")
        .with_alias("română")
        .with_alias("ro-ro")
        .with_fallback("Validarea pentru regula [{rule}] a eșuat!")
        .with_rule("required", "Câmpul este obligatoriu")
        .with_rule("int", "Trebuie să fie un număr întreg (ex. 563)")
        .with_rule("float", "Trebuie să fie un număr real (ex. 1,45)")
        .with_rule("accepted", "Trebuie să fie 'yes', 'on' sau 1")
        .with_rule("email", "Trebuie să fie o adresă de e-mail validă")
        .with_rule("url", "Trebuie să fie un URL valid")
        .with_rule("ipv4", "Trebuie să fie o adresă IPv4 validă")
        .with_rule("ipv6", "Trebuie să fie o adresă IPv6 validă")
        .with_rule("ip", "Trebuie să fie o adresă IP validă")
        .with_rule(
            "date",
            "Trebuie să fie o dată calendaristică validă. De exemplu: Jan 2, 2006 at 3:04pm (MST)",
        )
        .with_rule("regexp", "Trebuie să se potrivească acestei expresii regulate: {raw}")
        .with_rule("regex", "Trebuie să se potrivească acestei expresii regulate: {raw}")
        .with_rule("alpha", "Trebuie să conțină doar litere")
        .with_rule("alpha_num", "Trebuie să conțină doar litere și cifre")
        .with_rule(
            "alpha_dash",
            "Trebuie să conțină doar litere, cifre, cratime și liniuțe de subliniere",
        )
        .with_rule("full_name", "Trebuie să conțină doar litere, cifre, puncte sau spații");

    let table = numeric(table, FieldKind::Int, "un număr întreg");
    let table = numeric(table, FieldKind::Float, "un număr real");

    table
        .with_kind_rule(FieldKind::Text, "min", "Trebuie să conțină cel puțin {args} caractere")
        .with_kind_rule(FieldKind::Text, "min_len", "Trebuie să conțină cel puțin {args} caractere")
        .with_kind_rule(FieldKind::Text, "max", "Trebuie să conțină cel mult {args} caractere")
        .with_kind_rule(FieldKind::Text, "max_len", "Trebuie să conțină cel mult {args} caractere")
        .with_kind_rule(FieldKind::Text, "len", "Trebuie să conțină exact {args} caractere")
        .with_kind_rule(
            FieldKind::Text,
            "between",
            "Trebuie să conțină între {args} caractere (inclusiv intervalele)",
        )
        .with_kind_rule(
            FieldKind::Text,
            "between_strict",
            "Trebuie să conțină între {args} caractere (intervalele nu sunt acceptate)",
        )
        .with_kind_rule(FieldKind::Special, "iban", "Trebuie să fie un cont bancar valid (IBAN)")
        .with_kind_rule(
            FieldKind::Special,
            "cif",
            "Trebuie să fie un cod de identificare fiscală valid (CIF)",
        )
        .with_kind_rule(
            FieldKind::Special,
            "cnp",
            "Trebuie să fie un cod numeric personal (CNP) valid",
        )
        .with_kind_rule(
            FieldKind::Special,
            "short_date",
            "Trebuie să fie o dată calendaristică scurtă. De exemplu: 02.01.2006",
        )
        .with_kind_rule(
            FieldKind::Special,
            "long_date",
            "Trebuie să fie o dată calendaristică lungă. De exemplu: 02.01.2006T15:04:05",
        )
}

fn numeric(table: LocaleTable, kind: FieldKind, noun: &str) -> LocaleTable {
    let between = format!("Trebuie să fie {noun} între {{args}} (inclusiv intervalele)");
    let between_strict =
        format!("Trebuie să fie {noun} între {{args}} (intervalele nu sunt acceptate)");
    table
        .with_kind_rule(kind, "min", format!("Trebuie să fie {noun} mai mare sau egal cu {{args}}"))
        .with_kind_rule(kind, "max", format!("Trebuie să fie {noun} mai mic sau egal cu {{args}}"))
        .with_kind_rule(kind, "between", between.clone())
        .with_kind_rule(kind, "value", between)
        .with_kind_rule(kind, "between_strict", between_strict.clone())
        .with_kind_rule(kind, "value_strict", between_strict)
        .with_kind_rule(
            kind,
            "digits",
            format!("Trebuie să fie {noun} și să aibă exact {{args}} cifre"),
        )
        .with_kind_rule(
            kind,
            "digits_between",
            format!("Trebuie să fie {noun} care să aibă între {{args}} cifre (inclusiv intervalele)"),
        )
        .with_kind_rule(
            kind,
            "digits_between_strict",
            format!(
                "Trebuie să fie {noun} care să aibă între {{args}} cifre (intervalele nu sunt acceptate)"
            ),
        )
        .with_kind_rule(kind, "accepted", format!("Trebuie să fie {noun} mai mare decât 0"))
}
