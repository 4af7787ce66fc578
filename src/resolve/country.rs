use crate::core::{clean, is_numeric_routing_code};
use crate::registry::Registry;

/// Two-letter bank country from the IBAN prefix, else from the BIC's `[4:6]`.
pub fn resolve_country(iban: &str, bic: &str) -> String {
    let iban = clean(iban);
    if let Some(cc) = letters_at(&iban, 0) {
        return cc.to_string();
    }

    let bic = clean(bic);
    if bic.len() >= 6 {
        if let Some(cc) = letters_at(&bic, 4) {
            return cc.to_string();
        }
    }

    String::new()
}

/// City of the bank, for a BLZ `bank_code` found in the registry.
pub fn resolve_place(bank_code: &str, registry: &Registry) -> String {
    if !is_numeric_routing_code(bank_code) {
        return String::new();
    }
    registry.city(bank_code).unwrap_or_default().to_string()
}

fn letters_at(s: &str, start: usize) -> Option<&str> {
    s.get(start..start + 2)
        .filter(|cc| cc.bytes().all(|b| b.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegistryEntry;

    #[test]
    fn country_from_iban() {
        assert_eq!(resolve_country("DE12500105170648489890", ""), "DE");
        assert_eq!(resolve_country("fr76 3000", "DEUTDEFF"), "FR");
    }

    #[test]
    fn country_from_bic() {
        assert_eq!(resolve_country("", "DEUTDEFF500"), "DE");
        assert_eq!(resolve_country("12", "BNPAFRPP"), "FR");
    }

    #[test]
    fn country_unresolved() {
        assert_eq!(resolve_country("", ""), "");
        assert_eq!(resolve_country("1", "DEUT1"), "");
        assert_eq!(resolve_country("", "DEUT12FF"), "");
    }

    #[test]
    fn place_from_registry() {
        let r = Registry::from_entries(vec![RegistryEntry::new("10010010", "Postbank", "Berlin", "")]);
        assert_eq!(resolve_place("10010010", &r), "Berlin");
        assert_eq!(resolve_place("PBNKDEFF", &r), "");
        assert_eq!(resolve_place("99999999", &r), "");
    }
}
