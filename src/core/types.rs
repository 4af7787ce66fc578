use serde::{Deserialize, Serialize};

/// Raw banking fields of one business partner, as delivered by the ERP query.
///
/// Missing or NULL columns are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Business partner identifier (ERP address ID). May be empty.
    #[serde(default)]
    pub partner_id: String,
    /// A German BLZ (8 digits), a BIC (8 or 11 characters), or empty.
    #[serde(default)]
    pub bank_code: String,
    /// A domestic account number, a full IBAN, or empty.
    #[serde(default)]
    pub account_no: String,
    /// Bank name as stored in the ERP. Often empty or "nan".
    #[serde(default)]
    pub bank_name: String,
}

impl InputRecord {
    /// Create a record without a partner ID.
    pub fn new(
        bank_code: impl Into<String>,
        account_no: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Self {
        Self {
            partner_id: String::new(),
            bank_code: bank_code.into(),
            account_no: account_no.into(),
            bank_name: bank_name.into(),
        }
    }

    /// Set the business partner ID.
    pub fn with_partner_id(mut self, id: impl Into<String>) -> Self {
        self.partner_id = id.into();
        self
    }
}

/// One bank of the Bundesbank BLZ registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// 8-digit Bankleitzahl.
    pub routing_code: String,
    /// Full bank name (Bezeichnung).
    pub bank_name: String,
    /// City of the bank (Ort).
    pub city: String,
    /// BIC, empty if the bank has none.
    pub bic: String,
}

impl RegistryEntry {
    /// Create an entry from its four fields.
    pub fn new(
        routing_code: impl Into<String>,
        bank_name: impl Into<String>,
        city: impl Into<String>,
        bic: impl Into<String>,
    ) -> Self {
        Self {
            routing_code: routing_code.into(),
            bank_name: bank_name.into(),
            city: city.into(),
            bic: bic.into(),
        }
    }
}

/// Resolved bank identifiers for one business partner.
///
/// Every field uses the empty string for "could not be resolved".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    /// Copied from [`InputRecord::partner_id`].
    pub partner_id: String,
    /// Passed-through or constructed IBAN.
    pub iban: String,
    /// SWIFT/BIC code.
    pub swift_bic: String,
    /// Bank name; the ERP value wins over registry and lookup.
    pub bank_name: String,
    /// City of the bank from the BLZ registry.
    pub bank_place: String,
    /// Two-letter country code of the bank.
    pub bank_country: String,
}

impl ResolvedRecord {
    /// True if neither an IBAN nor a BIC could be resolved.
    pub fn is_unresolved(&self) -> bool {
        self.iban.is_empty() && self.swift_bic.is_empty()
    }
}
