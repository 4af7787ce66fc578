use super::lookup::BankLookup;
use super::memo::MemoCache;
use crate::core::{clean, is_bic_shaped, is_numeric_routing_code};
use crate::registry::Registry;

/// Resolve the BIC of a record.
///
/// Priority:
/// 1. `bank_code` itself, if it is a BIC;
/// 2. the registry BIC for a BLZ `bank_code`;
/// 3. the delegated lookup for the resolved `iban`, memoized in `cache`;
/// 4. empty.
///
/// Lookup failures count as "no BIC" and are memoized as such.
pub fn resolve_bic<L: BankLookup + ?Sized>(
    iban: &str,
    bank_code: &str,
    registry: &Registry,
    cache: &mut MemoCache,
    lookup: &L,
) -> String {
    let code = clean(bank_code);
    if !is_numeric_routing_code(&code) && is_bic_shaped(&code) {
        return code;
    }

    if is_numeric_routing_code(&code) {
        if let Some(bic) = registry.bic(&code) {
            return bic.to_string();
        }
    }

    let iban = clean(iban);
    if iban.is_empty() {
        return String::new();
    }

    cache.get_or_resolve(&iban, |key| match lookup.lookup_bic_by_iban(key) {
        Ok(Some(bic)) => clean(&bic),
        Ok(None) => String::new(),
        Err(e) => {
            tracing::debug!(error = %e, "BIC lookup failed");
            String::new()
        }
    })
}
