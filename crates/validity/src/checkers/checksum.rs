//! Checksum algorithms for Romanian identifiers
//!
//! - **IBAN**: international bank account number, ISO 7064 mod 97-10
//! - **CIF**: company fiscal code, weighted mod 11 over `753217532`
//! - **CNP**: personal numeric code, weighted mod 11 plus embedded
//!   birth date, county and sequence number
//!
//! All functions are total: malformed input is simply invalid.

use chrono::NaiveDate;

// ============================================================================
// IBAN
// ============================================================================

const IBAN_MIN_LEN: usize = 10;

/// Validates a bank account number.
///
/// Letters are case-insensitive. `is_known_country` receives the uppercased
/// two-letter prefix.
///
/// # Examples
///
/// ```
/// use validity::checkers::checksum::iban;
///
/// assert!(iban("RO49AAAA1B31007593840000", |c| c == "RO"));
/// assert!(!iban("RO49AAAA1B31007593840001", |c| c == "RO"));
/// ```
pub fn iban(value: &str, is_known_country: impl Fn(&str) -> bool) -> bool {
    let value = value.to_ascii_uppercase();
    if value.len() < IBAN_MIN_LEN || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }
    if !is_known_country(&value[..2]) {
        return false;
    }

    let (head, tail) = value.split_at(4);
    let remainder = tail
        .bytes()
        .chain(head.bytes())
        .fold(0_u32, |acc, byte| {
            if byte.is_ascii_digit() {
                (acc * 10 + u32::from(byte - b'0')) % 97
            } else {
                (acc * 100 + u32::from(byte - b'A') + 10) % 97
            }
        });
    remainder == 1
}

// ============================================================================
// CIF
// ============================================================================

/// `753217532`, least significant digit first.
const CIF_CONTROL: [u32; 9] = [2, 3, 5, 7, 1, 2, 3, 5, 7];

/// Validates a company fiscal code: 6 to 10 digits, the last being the
/// check digit.
///
/// ```
/// use validity::checkers::checksum::cif;
///
/// assert!(cif("13880063"));
/// assert!(!cif("13880064"));
/// ```
pub fn cif(value: &str) -> bool {
    if !(6..=10).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
    let Some((&check, payload)) = digits.split_last() else {
        return false;
    };

    let sum: u32 = payload
        .iter()
        .rev()
        .zip(CIF_CONTROL)
        .map(|(digit, weight)| digit * weight)
        .sum();

    let control = (sum * 10) % 11;
    let control = if control == 10 { 0 } else { control };
    control == check
}

// ============================================================================
// CNP
// ============================================================================

const CNP_LEN: usize = 13;
const CNP_WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];
const CNP_MAX_REGION: u32 = 52;

/// Validates a personal numeric code.
///
/// The first digit encodes sex and century. Residents (`7`, `8`, `9`)
/// carry no century: they are placed in the 2000s unless that would make
/// the holder younger than `min_age` in `reference_year`, in which case
/// they move back to the 1900s.
///
/// ```
/// use validity::checkers::checksum::cnp;
///
/// assert!(cnp("1851021345131", 2026, 14));
/// assert!(!cnp("1851021345132", 2026, 14));
/// ```
pub fn cnp(value: &str, reference_year: i32, min_age: i32) -> bool {
    if value.len() != CNP_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
    let number = |from: usize, to: usize| digits[from..to].iter().fold(0, |acc, d| acc * 10 + d);

    let Some(century) = century(digits[0]) else {
        return false;
    };
    let mut year = century + number(1, 3) as i32;
    if digits[0] >= 7 && year > reference_year.saturating_sub(min_age) {
        year -= 100;
    }

    if NaiveDate::from_ymd_opt(year, number(3, 5), number(5, 7)).is_none() {
        return false;
    }
    if !(1..=CNP_MAX_REGION).contains(&number(7, 9)) || number(9, 12) == 0 {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .zip(CNP_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let control = sum % 11;
    let control = if control == 10 { 1 } else { control };
    control == digits[12]
}

fn century(sex_digit: u32) -> Option<i32> {
    match sex_digit {
        1 | 2 => Some(1900),
        3 | 4 => Some(1800),
        5..=9 => Some(2000),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
