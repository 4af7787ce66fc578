//! Local CSV cache artifact of the parsed registry.

use std::collections::HashMap;
use std::path::Path;

use crate::core::{BankdatenError, RegistryEntry};

/// Column header written to the cache artifact, in order.
pub const CACHE_COLUMNS: [&str; 4] = ["routing_code", "bank_name", "city", "bic"];

/// Accepted spellings of the key column (compared lower-cased).
const KEY_ALIASES: [&str; 2] = ["routing_code", "blz"];

/// Read the cache artifact.
///
/// Returns `None` when the file does not exist, lacks one of the required
/// columns (names are matched case-insensitively), cannot be parsed, or holds
/// no rows. Every `None` except a missing file is logged as a warning; the
/// caller falls back to the remote feed either way.
pub fn read_cache(path: &Path) -> Option<Vec<RegistryEntry>> {
    if !path.exists() {
        return None;
    }

    let mut rdr = match csv::ReaderBuilder::new().flexible(true).from_path(path) {
        Ok(rdr) => rdr,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open registry cache");
            return None;
        }
    };

    let columns: HashMap<String, usize> = match rdr.headers() {
        Ok(headers) => headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read registry cache header");
            return None;
        }
    };

    let key = KEY_ALIASES.iter().find_map(|k| columns.get(*k).copied());
    let (Some(key), Some(name), Some(city), Some(bic)) = (
        key,
        columns.get("bank_name").copied(),
        columns.get("city").copied(),
        columns.get("bic").copied(),
    ) else {
        tracing::warn!(path = %path.display(), "registry cache is missing required columns");
        return None;
    };

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "registry cache is corrupt");
                return None;
            }
        };
        let get = |i: usize| record.get(i).unwrap_or("").trim().to_string();
        entries.push(RegistryEntry {
            routing_code: get(key),
            bank_name: get(name),
            city: get(city),
            bic: get(bic),
        });
    }

    if entries.is_empty() {
        tracing::warn!(path = %path.display(), "registry cache has no rows");
        return None;
    }
    Some(entries)
}

/// Write the cache artifact, creating parent directories as needed.
pub fn write_cache(path: &Path, entries: &[RegistryEntry]) -> Result<(), BankdatenError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| BankdatenError::Cache(format!("{}: {e}", path.display())))?;
    wtr.write_record(CACHE_COLUMNS)
        .map_err(|e| BankdatenError::Cache(e.to_string()))?;
    for entry in entries {
        wtr.write_record([&entry.routing_code, &entry.bank_name, &entry.city, &entry.bic])
            .map_err(|e| BankdatenError::Cache(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<RegistryEntry> {
        vec![
            RegistryEntry::new("10010010", "Postbank", "Berlin", "PBNKDEFFXXX"),
            RegistryEntry::new("37040044", "Commerzbank", "Köln", "COBADEFFXXX"),
        ]
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blz.csv");
        write_cache(&path, &entries()).unwrap();
        assert_eq!(read_cache(&path), Some(entries()));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_cache(&dir.path().join("absent.csv")), None);
    }

    #[test]
    fn headers_case_insensitive_with_blz_alias() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blz.csv");
        std::fs::write(&path, "BLZ,Bank_Name,CITY,Bic\n10010010,Postbank,Berlin,PBNKDEFFXXX\n")
            .unwrap();
        let read = read_cache(&path).unwrap();
        assert_eq!(read[0], entries()[0]);
    }

    #[test]
    fn missing_column_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blz.csv");
        std::fs::write(&path, "routing_code,bank_name,city\n10010010,Postbank,Berlin\n").unwrap();
        assert_eq!(read_cache(&path), None);
    }

    #[test]
    fn header_only_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blz.csv");
        std::fs::write(&path, "routing_code,bank_name,city,bic\n").unwrap();
        assert_eq!(read_cache(&path), None);
    }
}
