use thiserror::Error;

/// Errors that abort a resolution run.
///
/// Per-record problems (malformed codes, unknown banks, failed lookups) are
/// never reported through this type; the affected output field stays empty.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankdatenError {
    /// The BLZ registry could neither be read from cache nor fetched.
    #[error("registry unavailable: {0}")]
    RegistryUnavailable(String),

    /// The fixed-width registry feed could not be parsed.
    #[error("registry feed parse error: {0}")]
    FeedParse(String),

    /// The local registry cache artifact could not be written.
    #[error("registry cache error: {0}")]
    Cache(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a delegated IBAN/BIC lookup.
///
/// The resolvers treat this exactly like "no answer": the failure is logged
/// and an empty result is memoized for the key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("lookup of '{key}' failed: {message}")]
pub struct LookupError {
    /// The IBAN or BIC that was looked up.
    pub key: String,
    /// Human-readable failure description.
    pub message: String,
}

impl LookupError {
    /// Create a lookup error for the given key.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}
