//! Core record types, identifier classification, and IBAN checksums.
//!
//! Everything in this module is pure: no I/O, no caches, no registry.

mod checksum;
mod classify;
mod error;
mod types;

pub use checksum::*;
pub use classify::*;
pub use error::*;
pub use types::*;
