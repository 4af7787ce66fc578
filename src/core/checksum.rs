//! ISO 7064 MOD 97-10 check digits for IBANs.

use super::classify::clean;

/// ISO 7064 numeric encoding of the placeholder `"DE00"` in rearranged
/// position: D=13, E=14, check digits 00.
const DE_SUFFIX: &str = "131400";

/// Minimum width of the account part (Kontonummer); shorter accounts are zero-padded.
const DE_ACCOUNT_LEN: usize = 10;

/// Remainder of a decimal digit string modulo 97.
///
/// Folds digit by digit so arbitrarily long numbers never overflow.
/// Non-digit characters are ignored; callers pass digit-only strings.
pub fn mod97(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |rem, d| (rem * 10 + d) % 97)
}

/// Construct a German IBAN from a BLZ and a domestic account number.
///
/// Both inputs are cleaned first. The account is zero-padded on the left to
/// 10 digits (longer accounts are kept whole), and the check digits are
/// `98 - (BLZ ‖ account ‖ "131400") mod 97`.
///
/// Returns `None` if the BLZ is not exactly 8 digits, or the account is
/// empty or not purely numeric. The result is a pure function of its inputs.
///
/// ```
/// use bankdaten::core::construct_de_iban;
///
/// assert_eq!(
///     construct_de_iban("37040044", "532013000").as_deref(),
///     Some("DE89370400440532013000"),
/// );
/// assert_eq!(construct_de_iban("DEUTDEFF", "532013000"), None);
/// ```
pub fn construct_de_iban(routing_code: &str, account_no: &str) -> Option<String> {
    let blz = clean(routing_code);
    if blz.len() != 8 || !blz.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let account = clean(account_no);
    if account.is_empty() || !account.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let account = format!("{account:0>width$}", width = DE_ACCOUNT_LEN);
    let remainder = mod97(&format!("{blz}{account}{DE_SUFFIX}"));
    let check = 98 - remainder;

    Some(format!("DE{check:02}{blz}{account}"))
}

/// Verify an IBAN's check digits (any country).
///
/// The IBAN is cleaned, its first four characters are moved to the end,
/// letters are expanded to two digits (A=10 … Z=35), and the result must be
/// congruent to 1 modulo 97. Does not check country-specific lengths.
pub fn iban_checksum_valid(iban: &str) -> bool {
    let iban = clean(iban);
    if iban.len() < 5 {
        return false;
    }

    let (head, tail) = iban.split_at(4);
    let mut expanded = String::with_capacity(iban.len() * 2);
    for c in tail.chars().chain(head.chars()) {
        match c.to_digit(36) {
            Some(v) => expanded.push_str(&v.to_string()),
            None => return false,
        }
    }

    mod97(&expanded) == 1
}
