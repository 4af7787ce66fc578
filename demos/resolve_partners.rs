use bankdaten::core::*;
use bankdaten::registry::Registry;
use bankdaten::resolve::*;

fn main() {
    let registry = Registry::from_entries(vec![
        RegistryEntry::new("10010010", "Postbank Ndl der Deutsche Bank", "Berlin", "PBNKDEFFXXX"),
        RegistryEntry::new("37040044", "Commerzbank", "Köln", "COBADEFFXXX"),
        RegistryEntry::new("50010517", "ING-DiBa", "Frankfurt am Main", "INGDDEFFXXX"),
    ]);

    let partners = [
        InputRecord::new("10010010", "0648489890", "nan").with_partner_id("00001"),
        InputRecord::new("", "DE12 5001 0517 0648 4898 90", "").with_partner_id("00002"),
        InputRecord::new("BNPAFRPP", "FR76 3000 6000 0112 3456 7890 189", "BNP Paribas")
            .with_partner_id("00003"),
        InputRecord::new("DEUTDEFF", "1234567", "").with_partner_id("00004"),
        InputRecord::new("", "", "none").with_partner_id("00005"),
    ];

    println!("=== Bank Data Resolution ===\n");

    let mut run = ResolutionRun::new(&registry, RegistryLookup::new(&registry));
    for resolved in run.resolve_all(&partners) {
        println!(
            "  {:<6} iban={:<28} bic={:<12} country={:<3} place={:<18} name={}",
            resolved.partner_id,
            resolved.iban,
            resolved.swift_bic,
            resolved.bank_country,
            resolved.bank_place,
            resolved.bank_name,
        );
    }

    let stats = run.finish();
    println!(
        "\n  {} records: {} IBANs constructed, {} passed through, {} unresolved",
        stats.records, stats.iban_constructed, stats.iban_passed_through, stats.iban_unresolved
    );
}
