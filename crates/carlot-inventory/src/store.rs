//! Inventory file loading.
//!
//! The inventory dataset is a JSON file holding a top-level array of car
//! objects. The store only reads: the dataset is immutable by contract,
//! so there is no save path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Car, Inventory};

/// Errors that can occur while loading the inventory.
#[derive(Debug, Error)]
pub enum InventoryStoreError {
    /// I/O error during file read.
    #[error("failed to read inventory file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON deserialization error.
    #[error("invalid inventory JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for inventory store operations.
pub type Result<T> = std::result::Result<T, InventoryStoreError>;

/// Loader for the inventory dataset file.
///
/// # Example
///
/// ```no_run
/// use carlot_inventory_rs::InventoryStore;
///
/// let store = InventoryStore::with_path("cars.json");
/// let inventory = store.load()?;
/// # Ok::<(), carlot_inventory_rs::InventoryStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InventoryStore {
    /// Path to the inventory file.
    path: PathBuf,
}

impl InventoryStore {
    /// Creates a store reading from the given path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the inventory from disk.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryStoreError::ReadError`] if the file cannot be
    /// read, or [`InventoryStoreError::Json`] if it is not a valid JSON
    /// array of car objects.
    pub fn load(&self) -> Result<Inventory> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            InventoryStoreError::ReadError {
                path: self.path.clone(),
                source,
            }
        })?;

        let cars: Vec<Car> = serde_json::from_str(&contents)?;
        Ok(Inventory::new(cars))
    }
}
