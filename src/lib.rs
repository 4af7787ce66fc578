//! # bankdaten
//!
//! Resolution of German business-partner bank data into a consistent set of
//! identifiers: IBAN, SWIFT/BIC, bank name, bank place and bank country.
//!
//! Raw ERP rows rarely agree on what goes where. The `bank_code` column holds
//! a Bankleitzahl (BLZ) for some partners and a BIC for others, `account_no`
//! is sometimes a domestic account number and sometimes a full IBAN, and the
//! bank name is frequently empty or a `nan` placeholder. This crate applies a
//! fixed priority chain per field, backed by the Deutsche Bundesbank BLZ
//! registry, and never fails on a single bad row.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "resolve")] {
//! use bankdaten::core::*;
//! use bankdaten::registry::Registry;
//! use bankdaten::resolve::{NoLookup, ResolutionRun};
//!
//! let registry = Registry::from_entries(vec![RegistryEntry::new(
//!     "37040044", "Commerzbank", "Köln", "COBADEFFXXX",
//! )]);
//! let mut run = ResolutionRun::new(&registry, NoLookup);
//!
//! let resolved = run.resolve_record(&InputRecord::new("37040044", "532013000", "nan"));
//! assert_eq!(resolved.iban, "DE89370400440532013000");
//! assert_eq!(resolved.swift_bic, "COBADEFFXXX");
//! assert_eq!(resolved.bank_name, "Commerzbank");
//! assert_eq!(resolved.bank_place, "Köln");
//! assert_eq!(resolved.bank_country, "DE");
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Record types, pattern classifier, IBAN checksum |
//! | `registry` | BLZ registry: fixed-width feed parser, CSV cache artifact |
//! | `resolve` (default) | IBAN/BIC/bank name/country resolvers and batch engine |
//! | `fetch` | Blocking HTTP download of the Bundesbank BLZ file |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "registry")]
pub mod registry;

#[cfg(feature = "resolve")]
pub mod resolve;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
