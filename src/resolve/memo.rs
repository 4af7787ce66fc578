use std::collections::HashMap;

/// Run-scoped memo of delegated lookup results.
///
/// Keys are cleaned identifiers. Empty results are stored too, so a key that
/// failed once is never looked up again in the same run. Entries are never
/// removed or overwritten.
#[derive(Debug, Clone, Default)]
pub struct MemoCache {
    entries: HashMap<String, String>,
    misses: usize,
}

impl MemoCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, if it was resolved before.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Return the cached value for `key`, calling `resolve` on the first request only.
    pub fn get_or_resolve(&mut self, key: &str, resolve: impl FnOnce(&str) -> String) -> String {
        if let Some(value) = self.entries.get(key) {
            return value.clone();
        }
        self.misses += 1;
        let value = resolve(key);
        self.entries.insert(key.to_string(), value.clone());
        value
    }

    /// Number of times `resolve` was invoked.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two memo caches of one resolution run.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCaches {
    /// Cleaned IBAN → BIC.
    pub bic_by_iban: MemoCache,
    /// Upper-cased BIC → bank name.
    pub name_by_bic: MemoCache,
}
