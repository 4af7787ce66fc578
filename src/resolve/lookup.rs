//! Delegated IBAN → BIC and BIC → bank name lookups.

use crate::core::{LookupError, clean};
use crate::registry::Registry;

/// External source of bank identifiers, consulted as the last resort.
///
/// Implementations may call a web service or an IBAN library; the resolvers
/// only rely on the input/output shape. Calls must be idempotent: the same key
/// is never looked up twice within a run, but may be looked up again in the
/// next one.
pub trait BankLookup {
    /// BIC of the bank holding `iban` (cleaned, upper-case).
    fn lookup_bic_by_iban(&self, iban: &str) -> Result<Option<String>, LookupError>;

    /// Name of the bank identified by `bic` (cleaned, upper-case).
    fn lookup_bank_name_by_bic(&self, bic: &str) -> Result<Option<String>, LookupError>;
}

impl<T: BankLookup + ?Sized> BankLookup for &T {
    fn lookup_bic_by_iban(&self, iban: &str) -> Result<Option<String>, LookupError> {
        (**self).lookup_bic_by_iban(iban)
    }

    fn lookup_bank_name_by_bic(&self, bic: &str) -> Result<Option<String>, LookupError> {
        (**self).lookup_bank_name_by_bic(bic)
    }
}

/// A lookup that never knows anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl BankLookup for NoLookup {
    fn lookup_bic_by_iban(&self, _iban: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }

    fn lookup_bank_name_by_bic(&self, _bic: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

/// Offline lookup backed by the BLZ registry.
///
/// A German IBAN carries its BLZ at positions `[4:12]`, which selects the
/// registry BIC. Foreign IBANs are unknown. Bank names are found through
/// [`Registry::bank_name_for_bic`].
#[derive(Debug, Clone, Copy)]
pub struct RegistryLookup<'r> {
    registry: &'r Registry,
}

impl<'r> RegistryLookup<'r> {
    /// Look up through `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }
}

/// Length of a German IBAN: DE + 2 check digits + 8 BLZ + 10 account.
const DE_IBAN_LEN: usize = 22;

impl BankLookup for RegistryLookup<'_> {
    fn lookup_bic_by_iban(&self, iban: &str) -> Result<Option<String>, LookupError> {
        let iban = clean(iban);
        if iban.len() != DE_IBAN_LEN || !iban.starts_with("DE") {
            return Ok(None);
        }
        Ok(self.registry.bic(&iban[4..12]).map(str::to_string))
    }

    fn lookup_bank_name_by_bic(&self, bic: &str) -> Result<Option<String>, LookupError> {
        Ok(self.registry.bank_name_for_bic(bic).map(str::to_string))
    }
}
