// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-memory result set.
//!
//! The store validates every record on insertion so later stages can assume
//! positive timings and unique identifiers.

use crate::error::{Error, Result};
use crate::record::BenchmarkRecord;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Ordered, validated collection of benchmark records.
///
/// Records keep their insertion order, which is the order reports use.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    records: Vec<BenchmarkRecord>,
    index: HashMap<String, usize>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, failing on the first invalid one.
    pub fn from_records(records: impl IntoIterator<Item = BenchmarkRecord>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Validate and append a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if a timing is not strictly positive
    /// or the identifier is already present. The store is left unchanged.
    pub fn insert(&mut self, record: BenchmarkRecord) -> Result<()> {
        if self.index.contains_key(&record.benchmark_id) {
            return Err(Error::duplicate_id(record.benchmark_id));
        }
        record.validate()?;

        debug!(
            benchmark_id = %record.benchmark_id,
            runtimes = record.timings.len(),
            "Accepted benchmark record"
        );
        self.index
            .insert(record.benchmark_id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Look up a record by identifier.
    pub fn get(&self, benchmark_id: &str) -> Option<&BenchmarkRecord> {
        self.index.get(benchmark_id).map(|&i| &self.records[i])
    }

    /// Every runtime name seen in any record, sorted.
    pub fn runtimes(&self) -> BTreeSet<&str> {
        self.records.iter().flat_map(BenchmarkRecord::runtimes).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultStore {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
