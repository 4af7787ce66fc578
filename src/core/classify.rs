//! Shape recognizers for IBANs, BICs and German routing codes.

use std::sync::LazyLock;

use regex::Regex;

static IBAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{10,}$").expect("IBAN pattern"));

static BIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("BIC pattern")
});

/// Strip every character that is not a letter or digit and upper-case the rest.
///
/// Applied to every identifier before classification, comparison, or use as
/// a cache key. `"de89 3704-0044"` becomes `"DE8937040044"`.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// True if `s` looks like an IBAN once cleaned.
///
/// Shape only: country letters, two check digits, at least ten BBAN
/// characters. The checksum is not verified, see [`iban_checksum_valid`](super::iban_checksum_valid).
pub fn is_iban_shaped(s: &str) -> bool {
    IBAN_RE.is_match(&clean(s))
}

/// True if `s` is an 8- or 11-character BIC (bank, country, location, optional branch).
pub fn is_bic_shaped(s: &str) -> bool {
    BIC_RE.is_match(s)
}

/// True if the first character of the cleaned string is a decimal digit.
///
/// Distinguishes a BLZ from a BIC stored in the same column. Leading
/// separators and spreadsheet text markers (`'10010010`) are ignored.
pub fn is_numeric_routing_code(s: &str) -> bool {
    s.chars()
        .find(char::is_ascii_alphanumeric)
        .is_some_and(|c| c.is_ascii_digit())
}

/// True if `s` cleans to exactly 8 digits (a well-formed BLZ).
pub fn is_blz(s: &str) -> bool {
    let cleaned = clean(s);
    cleaned.len() == 8 && cleaned.bytes().all(|b| b.is_ascii_digit())
}
