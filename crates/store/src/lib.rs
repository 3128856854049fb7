//! Local catalog of analyzed strings.
//!
//! This crate stores [`StringRecord`]s keyed by content hash, persists them as
//! JSON, and answers filter queries against them, both structured and written
//! in informal natural language (see [`filter`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use string_analyzer_rs::models::StringRecord;
use thiserror::Error;

pub mod filter;
mod manager;
mod store;

pub use manager::{ManagerError, ManagerResult, NaturalLanguageResult, StringManager};
pub use store::{CatalogStore, CatalogStoreError};

/// Current on-disk schema version of the catalog.
const CATALOG_VERSION: u32 = 1;

/// Errors raised by catalog mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with the same content hash is already stored.
    #[error("string already exists: {id}")]
    AlreadyExists {
        /// Content hash of the duplicate.
        id: String,
    },
}

/// In-memory collection of analyzed strings.
///
/// Records keep their insertion order. Lookups by id go through an index that
/// is not serialized; [`Catalog::rebuild_index`] restores it after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema version of the serialized catalog.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Stored records, oldest first.
    #[serde(default)]
    records: Vec<StringRecord>,

    /// Record id to position in `records`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.records == other.records
    }
}

impl Catalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self {
            version: CATALOG_VERSION,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Rebuilds the id index from the record list.
    pub fn rebuild_index(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.clone(), i))
            .collect();
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by content hash.
    pub fn get(&self, id: &str) -> Option<&StringRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Looks a record up by its original value.
    pub fn get_by_value(&self, value: &str) -> Option<&StringRecord> {
        self.get(&string_analyzer_rs::properties::content_hash(value))
    }

    /// Returns true if a record with this id is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Inserts a record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AlreadyExists` if a record with the same id is
    /// already stored; the catalog is left unchanged.
    pub fn insert(&mut self, record: StringRecord) -> Result<&StringRecord, CatalogError> {
        if self.contains(&record.id) {
            return Err(CatalogError::AlreadyExists { id: record.id });
        }
        let position = self.records.len();
        self.index.insert(record.id.clone(), position);
        self.records.push(record);
        Ok(&self.records[position])
    }

    /// Removes the record stored for `value`, returning it.
    pub fn remove_by_value(&mut self, value: &str) -> Option<StringRecord> {
        let id = string_analyzer_rs::properties::content_hash(value);
        let position = self.index.remove(&id)?;
        let record = self.records.remove(position);
        // Positions after the removed record shift down by one
        for i in self.index.values_mut() {
            if *i > position {
                *i -= 1;
            }
        }
        Some(record)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
