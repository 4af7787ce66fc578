//! Deutsche Bundesbank BLZ registry (Bankleitzahlendatei).
//!
//! Maps 8-digit routing codes to bank name, city and BIC. The registry is
//! loaded once per run, either from a local CSV cache artifact or from the
//! Bundesbank's fixed-width text file, and is immutable afterwards.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "fetch")] {
//! use bankdaten::registry::*;
//!
//! let config = RegistryConfigBuilder::new()
//!     .cache_path("data/blz_registry.csv")
//!     .build();
//! let registry = load_registry(&config, &HttpFeed::from_config(&config)).unwrap();
//! assert_eq!(registry.bic("10010010"), Some("PBNKDEFFXXX"));
//! # }
//! ```

mod cache;
mod feed;
#[cfg(feature = "fetch")]
mod http;

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{BankdatenError, RegistryEntry, clean};

pub use cache::{CACHE_COLUMNS, read_cache, write_cache};
pub use feed::{FEED_MIN_LINE_LEN, FeedSource, StaticFeed, decode_latin1, parse_feed};
#[cfg(feature = "fetch")]
pub use http::HttpFeed;

/// Bundesbank download URL of the current BLZ file (changes with each quarterly release).
pub const BUNDESBANK_BLZ_URL: &str = "https://www.bundesbank.de/resource/blob/602632/bec25ca5df1eb62fefadd8325dafe67c/472B63F073F071307366337C94F8C870/blz-aktuell-txt-data.txt";

/// Configuration for loading the BLZ registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Local CSV cache artifact. Read if present and valid, written after a fetch.
    pub cache_path: PathBuf,
    /// URL of the fixed-width registry feed.
    pub feed_url: String,
    /// User-Agent sent with the feed request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from("data/blz_registry.csv"),
            feed_url: BUNDESBANK_BLZ_URL.into(),
            user_agent: concat!("Mozilla/5.0 (compatible; bankdaten/", env!("CARGO_PKG_VERSION"), ")")
                .into(),
            timeout_secs: 60,
        }
    }
}

/// Builder for [`RegistryConfig`].
///
/// ```
/// use bankdaten::registry::RegistryConfigBuilder;
///
/// let config = RegistryConfigBuilder::new()
///     .cache_path("/tmp/blz.csv")
///     .timeout_secs(10)
///     .build();
/// assert_eq!(config.timeout_secs, 10);
/// ```
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local cache artifact path.
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.cache_path = path.into();
        self
    }

    /// Set the feed URL.
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.config.feed_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RegistryConfig {
        self.config
    }
}

/// Immutable routing code → bank lookup tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    code_to_city: HashMap<String, String>,
    code_to_bic: HashMap<String, String>,
    code_to_bank_name: HashMap<String, String>,
    bic_to_bank_name: HashMap<String, String>,
}

impl Registry {
    /// Build the lookup tables. Duplicate routing codes keep their first entry.
    pub fn from_entries(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let entries = dedup_entries(entries);
        let mut registry = Self {
            code_to_city: HashMap::with_capacity(entries.len()),
            code_to_bic: HashMap::with_capacity(entries.len()),
            code_to_bank_name: HashMap::with_capacity(entries.len()),
            ..Default::default()
        };

        for e in &entries {
            let code = clean(&e.routing_code);
            registry.code_to_city.insert(code.clone(), e.city.clone());
            registry.code_to_bic.insert(code.clone(), e.bic.clone());
            registry
                .code_to_bank_name
                .insert(code, e.bank_name.clone());

            let bic = clean(&e.bic);
            if !bic.is_empty() && !e.bank_name.is_empty() {
                registry
                    .bic_to_bank_name
                    .entry(bic)
                    .or_insert_with(|| e.bank_name.clone());
            }
        }

        registry.entries = entries;
        registry
    }

    /// City (Ort) of the bank with this routing code.
    pub fn city(&self, routing_code: &str) -> Option<&str> {
        non_empty(self.code_to_city.get(&clean(routing_code)))
    }

    /// BIC of the bank with this routing code, if it has one.
    pub fn bic(&self, routing_code: &str) -> Option<&str> {
        non_empty(self.code_to_bic.get(&clean(routing_code)))
    }

    /// Name of the bank with this routing code.
    pub fn bank_name(&self, routing_code: &str) -> Option<&str> {
        non_empty(self.code_to_bank_name.get(&clean(routing_code)))
    }

    /// Name of the first registry bank carrying this BIC.
    ///
    /// 8-character BICs also match their `XXX` primary-office form and vice versa.
    pub fn bank_name_for_bic(&self, bic: &str) -> Option<&str> {
        let bic = clean(bic);
        if let Some(name) = self.bic_to_bank_name.get(&bic) {
            return Some(name.as_str());
        }
        let alternate = match bic.len() {
            8 => format!("{bic}XXX"),
            11 if bic.ends_with("XXX") => bic[..8].to_string(),
            _ => return None,
        };
        self.bic_to_bank_name.get(&alternate).map(String::as_str)
    }

    /// All entries, in feed order, without duplicates.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of distinct routing codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the registry holds no banks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Drop later entries whose routing code was already seen.
fn dedup_entries(entries: impl IntoIterator<Item = RegistryEntry>) -> Vec<RegistryEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(clean(&e.routing_code)))
        .collect()
}

/// Load the registry: from the cache artifact if valid, otherwise from `feed`.
///
/// On the feed path, exactly one fetch is performed; the parsed and
/// deduplicated table is written to `config.cache_path` before returning.
///
/// # Errors
///
/// Fetch failures propagate from the [`FeedSource`]. A feed without a single
/// parseable bank line yields [`BankdatenError::FeedParse`]. Failing to write
/// the cache artifact yields [`BankdatenError::Cache`] or [`BankdatenError::Io`].
pub fn load_registry(
    config: &RegistryConfig,
    feed: &dyn FeedSource,
) -> Result<Registry, BankdatenError> {
    if let Some(entries) = read_cache(&config.cache_path) {
        let registry = Registry::from_entries(entries);
        tracing::info!(
            path = %config.cache_path.display(),
            banks = registry.len(),
            "loaded BLZ registry from cache"
        );
        return Ok(registry);
    }

    let text = feed.fetch()?;
    let entries = dedup_entries(parse_feed(&text));
    if entries.is_empty() {
        return Err(BankdatenError::FeedParse(
            "feed contained no bank records".into(),
        ));
    }

    write_cache(&config.cache_path, &entries)?;
    let registry = Registry::from_entries(entries);
    tracing::info!(
        path = %config.cache_path.display(),
        banks = registry.len(),
        "fetched BLZ registry and wrote cache"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        Registry::from_entries(vec![
            RegistryEntry::new("10010010", "Postbank Ndl der Deutsche Bank", "Berlin", "PBNKDEFFXXX"),
            RegistryEntry::new("10010010", "Duplicate", "Nowhere", "DUPLDEFFXXX"),
            RegistryEntry::new("10010111", "SEB", "Berlin", ""),
            RegistryEntry::new("50070010", "Deutsche Bank", "Frankfurt am Main", "DEUTDEFF"),
        ])
    }

    #[test]
    fn lookups_by_code() {
        let r = sample();
        assert_eq!(r.city("10010010"), Some("Berlin"));
        assert_eq!(r.bic("10010010"), Some("PBNKDEFFXXX"));
        assert_eq!(r.bank_name("100 100 10"), Some("Postbank Ndl der Deutsche Bank"));
        assert_eq!(r.bic("99999999"), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let r = sample();
        assert_eq!(r.len(), 3);
        assert_eq!(r.city("10010010"), Some("Berlin"));
    }

    #[test]
    fn empty_bic_is_none() {
        assert_eq!(sample().bic("10010111"), None);
    }

    #[test]
    fn bank_name_for_bic_variants() {
        let r = sample();
        assert_eq!(
            r.bank_name_for_bic("PBNKDEFF"),
            Some("Postbank Ndl der Deutsche Bank")
        );
        assert_eq!(r.bank_name_for_bic("deutdeffxxx"), Some("Deutsche Bank"));
        assert_eq!(r.bank_name_for_bic("DUPLDEFFXXX"), None);
        assert_eq!(r.bank_name_for_bic(""), None);
    }

    #[test]
    fn config_defaults() {
        let c = RegistryConfig::default();
        assert!(c.feed_url.starts_with("https://"));
        assert!(!c.user_agent.is_empty());
        assert_eq!(c.timeout_secs, 60);
    }
}
