//! Bank identifier resolution: IBAN, BIC, bank name, bank place, bank country.
//!
//! Each field is resolved by a fixed priority chain. For every record the
//! IBAN is resolved first, then the BIC (which may look up the IBAN), then
//! the bank name (which may look up the BIC), and finally the country.
//! Unresolvable fields are left empty; a single bad row never fails a batch.
//!
//! # Example
//!
//! ```
//! use bankdaten::core::*;
//! use bankdaten::registry::Registry;
//! use bankdaten::resolve::*;
//!
//! let registry = Registry::from_entries(vec![RegistryEntry::new(
//!     "10010010", "Postbank Ndl der Deutsche Bank", "Berlin", "PBNKDEFFXXX",
//! )]);
//! let records = vec![
//!     InputRecord::new("10010010", "0648489890", "").with_partner_id("100"),
//!     InputRecord::new("DEUTDEFF", "1234567", "Deutsche Bank").with_partner_id("200"),
//! ];
//!
//! let resolved = resolve_batch(&records, &registry, RegistryLookup::new(&registry), None);
//! assert_eq!(resolved[0].iban, "DE48100100100648489890");
//! assert_eq!(resolved[0].bank_place, "Berlin");
//! assert_eq!(resolved[1].iban, "");
//! assert_eq!(resolved[1].swift_bic, "DEUTDEFF");
//! assert_eq!(resolved[1].bank_country, "DE");
//! ```

mod bic;
mod country;
mod engine;
mod iban;
mod lookup;
mod memo;
mod name;

pub use bic::resolve_bic;
pub use country::{resolve_country, resolve_place};
pub use engine::{ResolutionRun, RunStats, resolve_batch};
pub use iban::{IbanResolution, classify_iban, resolve_iban};
pub use lookup::{BankLookup, NoLookup, RegistryLookup};
pub use memo::{MemoCache, ResolutionCaches};
pub use name::{is_placeholder_name, resolve_bank_name};
