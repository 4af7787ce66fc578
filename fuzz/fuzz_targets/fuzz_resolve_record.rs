#![no_main]

use bankdaten::core::{InputRecord, iban_checksum_valid};
use bankdaten::registry::Registry;
use bankdaten::resolve::{IbanResolution, NoLookup, ResolutionRun, classify_iban};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, '|');
        let record = InputRecord::new(
            parts.next().unwrap_or(""),
            parts.next().unwrap_or(""),
            parts.next().unwrap_or(""),
        );

        // Constructed IBANs always carry valid check digits.
        if let IbanResolution::Constructed(iban) = classify_iban(&record.bank_code, &record.account_no) {
            assert!(iban_checksum_valid(&iban));
        }

        let registry = Registry::default();
        let _ = ResolutionRun::new(&registry, NoLookup).resolve_record(&record);
    }
});
