//! JSON file-based favorites storage.
//!
//! This module persists the favorites list as a plain JSON array in a single
//! file, using atomic writes (write-to-temp + rename) to prevent corruption
//! on crashes.

use crate::domain::error::{MealdexError, Result};
use crate::domain::Meal;
use crate::storage::backend::FavoritesStore;
use std::path::PathBuf;

/// JSON file storage for favorites.
///
/// The on-disk format is exactly the serialized favorites array; there is no
/// wrapper object. A missing file reads as an empty collection, and a file
/// that exists but does not parse surfaces [`MealdexError::MalformedData`]
/// for the caller to handle.
///
/// # File Format
///
/// ```json
/// [
///   {
///     "idMeal": "52772",
///     "strMeal": "Teriyaki Chicken Casserole",
///     "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg"
///   }
/// ]
/// ```
pub struct JsonFavoritesStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonFavoritesStore {
    /// Creates a JSON favorites store at the given path.
    ///
    /// Parent directories are created immediately; the file itself is only
    /// created on the first `save`.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mealdex::storage::JsonFavoritesStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFavoritesStore::new(PathBuf::from("/tmp/favorites.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON favorites store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn load(&self) -> Result<Vec<Meal>> {
        let _span = tracing::debug_span!("favorites_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("favorites file absent, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let favorites: Vec<Meal> = serde_json::from_str(&contents)
            .map_err(|e| MealdexError::MalformedData(format!("failed to parse favorites: {e}")))?;

        tracing::debug!(count = favorites.len(), "favorites loaded");
        Ok(favorites)
    }

    fn save(&mut self, favorites: &[Meal]) -> Result<()> {
        let _span = tracing::debug_span!(
            "favorites_save",
            path = ?self.file_path,
            count = favorites.len()
        )
        .entered();

        let json = serde_json::to_string_pretty(favorites).map_err(|e| {
            MealdexError::MalformedData(format!("failed to serialize favorites: {e}"))
        })?;

        // Write to a temporary file first, then rename into place, so the
        // slot is never left half-written.
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("favorites saved");
        Ok(())
    }
}
