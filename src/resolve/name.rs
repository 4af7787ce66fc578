use super::lookup::BankLookup;
use super::memo::MemoCache;
use crate::core::{clean, is_numeric_routing_code};
use crate::registry::Registry;

/// Values the ERP export writes for "no bank name".
const PLACEHOLDER_NAMES: [&str; 2] = ["nan", "none"];

/// True for empty names and the `nan`/`none` placeholders (any case).
pub fn is_placeholder_name(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || PLACEHOLDER_NAMES.iter().any(|p| name.eq_ignore_ascii_case(p))
}

/// Resolve the bank name of a record.
///
/// Priority:
/// 1. `source_name` verbatim, unless it is a placeholder;
/// 2. the registry name for a BLZ `bank_code`;
/// 3. the delegated lookup for `bic`, memoized in `cache`;
/// 4. empty.
///
/// `bic` must be the record's already resolved BIC.
pub fn resolve_bank_name<L: BankLookup + ?Sized>(
    source_name: &str,
    bank_code: &str,
    bic: &str,
    registry: &Registry,
    cache: &mut MemoCache,
    lookup: &L,
) -> String {
    if !is_placeholder_name(source_name) {
        return source_name.to_string();
    }

    if is_numeric_routing_code(bank_code) {
        if let Some(name) = registry.bank_name(bank_code) {
            return name.to_string();
        }
    }

    let bic = clean(bic);
    if bic.is_empty() {
        return String::new();
    }

    cache.get_or_resolve(&bic, |key| match lookup.lookup_bank_name_by_bic(key) {
        Ok(Some(name)) => name.trim().to_string(),
        Ok(None) => String::new(),
        Err(e) => {
            tracing::debug!(error = %e, "bank name lookup failed");
            String::new()
        }
    })
}
