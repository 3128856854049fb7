//! Catalog file storage with XDG path support.
//!
//! The catalog is stored as pretty-printed JSON at `<data_dir>/sa/strings.json`
//! (`~/.local/share/sa/strings.json` on Linux).
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `save()`, `load()` - synchronous, using `std::fs`
//! - `save_async()`, `load_async()` - asynchronous, using `tokio::fs`
//!
//! The HTTP service uses the async methods so request handlers never block the
//! runtime; the CLI uses the synchronous ones.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::Catalog;

/// Default catalog filename.
const CATALOG_FILENAME: &str = "strings.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "sa";

/// Errors that can occur during catalog storage operations.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write catalog file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create data directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogStoreError {
    /// Returns true if this is a read error caused by a missing file.
    fn is_not_found(&self) -> bool {
        matches!(self, Self::ReadError { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// Persistent storage for the string catalog.
///
/// Writes are atomic (temp file + rename), but the store does not lock the
/// file. Callers that share a store across tasks serialize access themselves;
/// the HTTP service keeps its manager behind a `RwLock`.
///
/// # Example
///
/// ```no_run
/// use string_store_rs::CatalogStore;
///
/// let store = CatalogStore::new()?;
/// let catalog = store.load_or_default()?;
/// store.save(&catalog)?;
/// # Ok::<(), string_store_rs::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG path for the catalog file.
    ///
    /// On Linux: `~/.local/share/sa/strings.json`
    /// On macOS: `~/Library/Application Support/sa/strings.json`
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogStoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(CATALOG_FILENAME))
    }

    /// Returns the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn decode(contents: &str) -> Result<Catalog> {
        let mut catalog: Catalog = serde_json::from_str(contents)?;
        catalog.rebuild_index();
        Ok(catalog)
    }

    /// Loads the catalog from disk.
    ///
    /// # Errors
    ///
    /// - `CatalogStoreError::ReadError` if the file cannot be read (including
    ///   when it does not exist; see [`load_or_default`](Self::load_or_default)).
    /// - `CatalogStoreError::Json` if the file contains invalid JSON.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|e| CatalogStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let catalog = Self::decode(&contents)?;
        debug!(path = %self.path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Loads the catalog, returning an empty one if the file doesn't exist.
    pub fn load_or_default(&self) -> Result<Catalog> {
        match self.load() {
            Err(e) if e.is_not_found() => {
                debug!(path = %self.path.display(), "no catalog file, starting empty");
                Ok(Catalog::default())
            }
            other => other,
        }
    }

    /// Saves the catalog to disk atomically, creating the parent directory.
    ///
    /// # Errors
    ///
    /// - `CatalogStoreError::CreateDirError` if the directory cannot be created.
    /// - `CatalogStoreError::WriteError` if the file cannot be written.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CatalogStoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(catalog)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, &json).map_err(|e| CatalogStoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| CatalogStoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), records = catalog.len(), "saved catalog");
        Ok(())
    }

    // =========================================================================
    // Async I/O Methods
    // =========================================================================

    /// Async equivalent of [`load()`](Self::load).
    pub async fn load_async(&self) -> Result<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogStoreError::ReadError {
                path: self.path.clone(),
                source: e,
            }
        })?;
        let catalog = Self::decode(&contents)?;
        debug!(path = %self.path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Async equivalent of [`load_or_default()`](Self::load_or_default).
    pub async fn load_or_default_async(&self) -> Result<Catalog> {
        match self.load_async().await {
            Err(e) if e.is_not_found() => Ok(Catalog::default()),
            other => other,
        }
    }

    /// Async equivalent of [`save()`](Self::save).
    pub async fn save_async(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CatalogStoreError::CreateDirError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let json = serde_json::to_string_pretty(catalog)?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &json)
            .await
            .map_err(|e| CatalogStoreError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| CatalogStoreError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), records = catalog.len(), "saved catalog");
        Ok(())
    }
}
