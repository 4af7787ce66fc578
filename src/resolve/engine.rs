//! Per-run resolution engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bic::resolve_bic;
use super::country::{resolve_country, resolve_place};
use super::iban::{IbanResolution, classify_iban};
use super::lookup::BankLookup;
use super::memo::ResolutionCaches;
use super::name::resolve_bank_name;
use crate::core::{InputRecord, ResolvedRecord};
use crate::registry::Registry;

/// Counters collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Records resolved.
    pub records: usize,
    /// Records dropped by the partner filter.
    pub skipped: usize,
    pub iban_passed_through: usize,
    pub iban_constructed: usize,
    pub iban_unresolved: usize,
    pub bic_resolved: usize,
    pub bank_name_resolved: usize,
    pub country_resolved: usize,
    /// Delegated lookups actually performed (cache misses).
    pub external_lookups: usize,
}

/// One batch of bank data resolution.
///
/// Borrows the registry and owns the delegated lookup, the two memo caches,
/// and the optional partner filter. Records are processed one at a time, in
/// order; the caches live exactly as long as the run.
#[derive(Debug)]
pub struct ResolutionRun<'r, L: BankLookup> {
    registry: &'r Registry,
    lookup: L,
    caches: ResolutionCaches,
    filter: Option<HashSet<String>>,
    stats: RunStats,
}

impl<'r, L: BankLookup> ResolutionRun<'r, L> {
    /// Start a run that resolves every record.
    pub fn new(registry: &'r Registry, lookup: L) -> Self {
        Self {
            registry,
            lookup,
            caches: ResolutionCaches::default(),
            filter: None,
            stats: RunStats::default(),
        }
    }

    /// Only resolve records whose `partner_id` is in `ids`.
    ///
    /// An empty list means no filter.
    pub fn with_filter<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        self.filter = (!ids.is_empty()).then_some(ids);
        self
    }

    /// True if `record` passes the partner filter.
    pub fn accepts(&self, record: &InputRecord) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|ids| ids.contains(record.partner_id.trim()))
    }

    /// Resolve one record: IBAN, then BIC, then bank name, then country.
    ///
    /// Ignores the partner filter.
    pub fn resolve_record(&mut self, record: &InputRecord) -> ResolvedRecord {
        let iban = match classify_iban(&record.bank_code, &record.account_no) {
            IbanResolution::PassedThrough(iban) => {
                self.stats.iban_passed_through += 1;
                iban
            }
            IbanResolution::Constructed(iban) => {
                self.stats.iban_constructed += 1;
                iban
            }
            IbanResolution::Unresolved => {
                self.stats.iban_unresolved += 1;
                String::new()
            }
        };

        let swift_bic = resolve_bic(
            &iban,
            &record.bank_code,
            self.registry,
            &mut self.caches.bic_by_iban,
            &self.lookup,
        );

        let bank_name = resolve_bank_name(
            &record.bank_name,
            &record.bank_code,
            &swift_bic,
            self.registry,
            &mut self.caches.name_by_bic,
            &self.lookup,
        );

        let bank_country = resolve_country(&iban, &swift_bic);
        let bank_place = resolve_place(&record.bank_code, self.registry);

        self.stats.records += 1;
        self.stats.bic_resolved += usize::from(!swift_bic.is_empty());
        self.stats.bank_name_resolved += usize::from(!bank_name.is_empty());
        self.stats.country_resolved += usize::from(!bank_country.is_empty());
        self.stats.external_lookups =
            self.caches.bic_by_iban.misses() + self.caches.name_by_bic.misses();

        ResolvedRecord {
            partner_id: record.partner_id.clone(),
            iban,
            swift_bic,
            bank_name,
            bank_place,
            bank_country,
        }
    }

    /// Resolve every record that passes the filter, preserving input order.
    pub fn resolve_all(&mut self, records: &[InputRecord]) -> Vec<ResolvedRecord> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            if !self.accepts(record) {
                self.stats.skipped += 1;
                continue;
            }
            out.push(self.resolve_record(record));
        }

        tracing::info!(
            records = self.stats.records,
            skipped = self.stats.skipped,
            iban_constructed = self.stats.iban_constructed,
            iban_passed_through = self.stats.iban_passed_through,
            iban_unresolved = self.stats.iban_unresolved,
            bic_resolved = self.stats.bic_resolved,
            external_lookups = self.stats.external_lookups,
            "bank data resolution finished"
        );
        out
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Lookup caches of this run.
    pub fn caches(&self) -> &ResolutionCaches {
        &self.caches
    }

    /// End the run, dropping its caches.
    pub fn finish(self) -> RunStats {
        self.stats
    }
}

/// Resolve a batch in a fresh run.
///
/// `filter` limits the batch to the listed partner IDs; `None` or an empty
/// list resolves everything.
pub fn resolve_batch<L: BankLookup>(
    records: &[InputRecord],
    registry: &Registry,
    lookup: L,
    filter: Option<&[String]>,
) -> Vec<ResolvedRecord> {
    let mut run = ResolutionRun::new(registry, lookup);
    if let Some(ids) = filter {
        run = run.with_filter(ids);
    }
    run.resolve_all(records)
}
