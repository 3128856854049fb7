//! CRUD layer over the catalog and its on-disk store.
//!
//! The `StringManager` owns a [`Catalog`] and the [`CatalogStore`] it was
//! loaded from. Every mutation is persisted before it returns; if the write
//! fails the in-memory change is rolled back so the two never drift apart.
//!
//! # Example
//!
//! ```no_run
//! use string_store_rs::{CatalogStore, StringManager};
//!
//! let mut manager = StringManager::new(CatalogStore::new()?)?;
//! manager.create("racecar")?;
//!
//! let result = manager.filter_natural_language("palindromic strings")?;
//! println!("{} match", result.records.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod lookups;

use string_analyzer_rs::models::StringRecord;
use tracing::info;

use crate::filter::{FilterError, FilterEvaluator, QueryInterpreter, ValidatedFilterSet};
use crate::{Catalog, CatalogStore, CatalogStoreError};

use lookups::format_not_found_error;

/// Errors that can occur during manager operations.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    /// The submitted value cannot be stored.
    #[error("invalid value: {reason}")]
    InvalidValue {
        /// Why the value was rejected.
        reason: String,
    },

    /// A record with the same content already exists.
    #[error("string '{value}' already exists")]
    AlreadyExists {
        /// The duplicate value.
        value: String,
    },

    /// No record is stored for the value.
    #[error("{}", format_not_found_error(value, suggestion.as_deref()))]
    NotFound {
        /// The value that was looked up.
        value: String,
        /// Closest stored value, if any is near enough.
        suggestion: Option<String>,
    },

    /// The filter could not be interpreted or validated.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Catalog storage error.
    #[error("store error: {0}")]
    Store(#[from] CatalogStoreError),
}

/// Result type for manager operations.
pub type ManagerResult<T> = std::result::Result<T, ManagerError>;

/// Outcome of a natural-language filter request.
#[derive(Debug)]
pub struct NaturalLanguageResult<'a> {
    /// How the query was understood.
    pub interpreted: ValidatedFilterSet,
    /// Matching records in insertion order.
    pub records: Vec<&'a StringRecord>,
}

/// Owns the catalog and keeps it in sync with its store.
#[derive(Debug)]
pub struct StringManager {
    store: CatalogStore,
    catalog: Catalog,
}

impl StringManager {
    /// Loads the catalog from `store`, starting empty if the file is missing.
    pub fn new(store: CatalogStore) -> ManagerResult<Self> {
        let catalog = store.load_or_default()?;
        Ok(Self { store, catalog })
    }

    /// Async equivalent of [`new()`](Self::new).
    pub async fn new_async(store: CatalogStore) -> ManagerResult<Self> {
        let catalog = store.load_or_default_async().await?;
        Ok(Self { store, catalog })
    }

    /// Creates a manager around an already-loaded catalog.
    pub fn with_catalog(store: CatalogStore, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// Returns the in-memory catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the backing store.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    // ==================== Mutations ====================

    /// Analyzes and stores a new value.
    ///
    /// # Errors
    ///
    /// - `ManagerError::InvalidValue` for empty or whitespace-only input.
    /// - `ManagerError::AlreadyExists` if the value is already stored.
    /// - `ManagerError::Store` if persisting fails; the catalog is unchanged.
    pub fn create(&mut self, value: &str) -> ManagerResult<StringRecord> {
        let record = self.insert(value)?;
        if let Err(e) = self.store.save(&self.catalog) {
            self.catalog.remove_by_value(value);
            return Err(e.into());
        }
        info!(id = %record.id, "created string");
        Ok(record)
    }

    /// Async equivalent of [`create()`](Self::create).
    pub async fn create_async(&mut self, value: &str) -> ManagerResult<StringRecord> {
        let record = self.insert(value)?;
        if let Err(e) = self.store.save_async(&self.catalog).await {
            self.catalog.remove_by_value(value);
            return Err(e.into());
        }
        info!(id = %record.id, "created string");
        Ok(record)
    }

    /// Removes a stored value.
    ///
    /// # Errors
    ///
    /// - `ManagerError::NotFound` if nothing is stored for the value.
    /// - `ManagerError::Store` if persisting fails; the record is restored.
    pub fn delete(&mut self, value: &str) -> ManagerResult<StringRecord> {
        let removed = self.remove(value)?;
        if let Err(e) = self.store.save(&self.catalog) {
            self.restore(removed);
            return Err(e.into());
        }
        info!(id = %removed.id, "deleted string");
        Ok(removed)
    }

    /// Async equivalent of [`delete()`](Self::delete).
    pub async fn delete_async(&mut self, value: &str) -> ManagerResult<StringRecord> {
        let removed = self.remove(value)?;
        if let Err(e) = self.store.save_async(&self.catalog).await {
            self.restore(removed);
            return Err(e.into());
        }
        info!(id = %removed.id, "deleted string");
        Ok(removed)
    }

    fn insert(&mut self, value: &str) -> ManagerResult<StringRecord> {
        if value.trim().is_empty() {
            return Err(ManagerError::InvalidValue {
                reason: "value must not be empty".to_string(),
            });
        }
        match self.catalog.insert(StringRecord::new(value)) {
            Ok(record) => Ok(record.clone()),
            Err(crate::CatalogError::AlreadyExists { .. }) => Err(ManagerError::AlreadyExists {
                value: value.to_string(),
            }),
        }
    }

    fn remove(&mut self, value: &str) -> ManagerResult<StringRecord> {
        match self.catalog.remove_by_value(value) {
            Some(record) => Ok(record),
            None => Err(self.not_found(value)),
        }
    }

    // Rollback after a failed write. The id was just vacated, so insert cannot fail.
    fn restore(&mut self, record: StringRecord) {
        let _ = self.catalog.insert(record);
    }

    // ==================== Queries ====================

    /// Returns the record stored for `value`.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::NotFound`, with a suggestion when a stored value
    /// is within a small edit distance.
    pub fn get(&self, value: &str) -> ManagerResult<&StringRecord> {
        self.catalog
            .get_by_value(value)
            .ok_or_else(|| self.not_found(value))
    }

    /// Returns every record satisfying the filter set, in insertion order.
    pub fn list(&self, filters: &ValidatedFilterSet) -> Vec<&StringRecord> {
        FilterEvaluator::new(filters.filters()).filter_records(self.catalog.records())
    }

    /// Interprets a natural-language query and lists the matching records.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::Filter` when the query is unparseable or its
    /// filters conflict. Nothing is listed in that case.
    pub fn filter_natural_language(&self, query: &str) -> ManagerResult<NaturalLanguageResult<'_>> {
        let interpreted = QueryInterpreter::parse(query)?;
        let records = self.list(&interpreted);
        Ok(NaturalLanguageResult {
            interpreted,
            records,
        })
    }

    fn not_found(&self, value: &str) -> ManagerError {
        ManagerError::NotFound {
            value: value.to_string(),
            suggestion: self.catalog.suggest_value(value),
        }
    }
}
