//! Property-based tests for IBAN construction and classification.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "resolve")]

use bankdaten::core::*;
use bankdaten::resolve::*;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// An 8-digit BLZ.
fn arb_blz() -> impl Strategy<Value = String> {
    "[0-9]{8}"
}

/// A domestic account number of 1 to 10 digits.
fn arb_account() -> impl Strategy<Value = String> {
    "[0-9]{1,10}"
}

/// Reference mod-97 check over the rearranged IBAN using u128 chunks.
fn reference_mod97(iban: &str) -> u32 {
    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    let digits: String = rearranged
        .chars()
        .map(|c| c.to_digit(36).unwrap().to_string())
        .collect();
    let mut rem: u128 = 0;
    for chunk in digits.as_bytes().chunks(18) {
        let part: u128 = std::str::from_utf8(chunk).unwrap().parse().unwrap();
        rem = (rem * 10u128.pow(chunk.len() as u32) + part) % 97;
    }
    rem as u32
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn construction_is_deterministic(blz in arb_blz(), account in arb_account()) {
        prop_assert_eq!(construct_de_iban(&blz, &account), construct_de_iban(&blz, &account));
    }

    #[test]
    fn constructed_iban_passes_checksum(blz in arb_blz(), account in arb_account()) {
        let iban = construct_de_iban(&blz, &account).unwrap();
        prop_assert_eq!(iban.len(), 22);
        prop_assert!(iban.starts_with("DE"));
        prop_assert!(iban_checksum_valid(&iban));
        prop_assert_eq!(reference_mod97(&iban), 1);
    }

    #[test]
    fn constructed_iban_embeds_blz_and_padded_account(blz in arb_blz(), account in arb_account()) {
        let iban = construct_de_iban(&blz, &account).unwrap();
        prop_assert_eq!(&iban[4..12], blz.as_str());
        prop_assert_eq!(iban[12..].trim_start_matches('0'), account.trim_start_matches('0'));
    }

    #[test]
    fn constructed_iban_is_iban_shaped(blz in arb_blz(), account in arb_account()) {
        let iban = construct_de_iban(&blz, &account).unwrap();
        prop_assert!(is_iban_shaped(&iban));
    }

    #[test]
    fn iban_passes_through_any_bank_code(
        blz in arb_blz(),
        account in arb_account(),
        bank_code in "[A-Z0-9 ]{0,12}",
    ) {
        let iban = construct_de_iban(&blz, &account).unwrap();
        prop_assert_eq!(resolve_iban(&bank_code, &iban), iban);
    }

    #[test]
    fn single_digit_typo_breaks_checksum(blz in arb_blz(), account in arb_account(), pos in 4usize..22) {
        let iban = construct_de_iban(&blz, &account).unwrap();
        let mut bytes = iban.into_bytes();
        bytes[pos] = if bytes[pos] == b'9' { b'0' } else { bytes[pos] + 1 };
        let typo = String::from_utf8(bytes).unwrap();
        prop_assert!(!iban_checksum_valid(&typo));
    }

    #[test]
    fn bic_code_never_yields_iban_from_domestic_account(
        bic in "[A-Z]{6}[A-Z0-9]{2}",
        account in arb_account(),
    ) {
        prop_assert_eq!(resolve_iban(&bic, &account), "");
    }

    #[test]
    fn country_is_empty_or_two_letters(iban in "[A-Z0-9 ]{0,30}", bic in "[A-Z0-9]{0,11}") {
        let cc = resolve_country(&iban, &bic);
        prop_assert!(cc.is_empty() || (cc.len() == 2 && cc.bytes().all(|b| b.is_ascii_uppercase())));
    }
}
