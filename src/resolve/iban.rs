use crate::core::{clean, construct_de_iban, is_iban_shaped, is_numeric_routing_code};

/// How a record's IBAN was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IbanResolution {
    /// The account column already held an IBAN.
    PassedThrough(String),
    /// Built from a BLZ and a domestic account number.
    Constructed(String),
    /// No IBAN can be derived: BIC without IBAN, garbage, or empty input.
    Unresolved,
}

impl IbanResolution {
    /// The IBAN, or an empty string if unresolved.
    pub fn into_iban(self) -> String {
        match self {
            Self::PassedThrough(iban) | Self::Constructed(iban) => iban,
            Self::Unresolved => String::new(),
        }
    }
}

/// Decide between passing through an IBAN and constructing one.
///
/// | `bank_code` | `account_no` | Result |
/// |-------------|--------------|--------|
/// | anything | IBAN | pass-through (cleaned) |
/// | BLZ | domestic account | constructed `DE` IBAN |
/// | BIC | domestic account | unresolved |
/// | empty | domestic account | unresolved |
pub fn classify_iban(bank_code: &str, account_no: &str) -> IbanResolution {
    let account = clean(account_no);
    if is_iban_shaped(&account) {
        return IbanResolution::PassedThrough(account);
    }

    if is_numeric_routing_code(bank_code) {
        if let Some(iban) = construct_de_iban(bank_code, &account) {
            return IbanResolution::Constructed(iban);
        }
    }

    IbanResolution::Unresolved
}

/// Resolve the IBAN of a record; empty if none can be derived.
pub fn resolve_iban(bank_code: &str, account_no: &str) -> String {
    classify_iban(bank_code, account_no).into_iban()
}
