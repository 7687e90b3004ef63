//! Mealdex: a recipe browser core over TheMealDB.
//!
//! Mealdex provides:
//! - Keyword search against TheMealDB with a typed response envelope
//! - A random-meal fetch
//! - Detail selection over the fetched results or the saved favorites
//! - A favorites list persisted as JSON with atomic writes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────┘
//!                      │
//! ┌─────────────────────────────────────────────┐
//! │  Application Layer (app/)                   │  ← State container
//! │  - Action functions                         │  ← Loading discipline
//! │  - Selection resolution                     │
//! └─────────────────────────────────────────────┘
//!          │                        │
//! ┌──────────────────┐    ┌──────────────────┐
//! │ Remote Layer     │    │ Storage Layer    │
//! │ (remote/)        │    │ (storage/)       │
//! │ - TheMealDB API  │    │ - JSON favorites │
//! │ - Normalization  │    │ - Atomic writes  │
//! └──────────────────┘    └──────────────────┘
//!          │                        │
//! ┌─────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers             │
//! │  - Platform paths (infrastructure/)         │
//! │  - Error types (domain/error)               │
//! │  - Meal model (domain/meal)                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state container and action store
//! - [`domain`]: Core domain types (Meal, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`remote`]: TheMealDB client and wire types
//! - [`storage`]: JSON favorites persistence
//! - [`observability`]: Tracing setup
//!
//! # Example
//!
//! ```no_run
//! use mealdex::{initialize, Config};
//!
//! # async fn run() -> mealdex::Result<()> {
//! let config = Config::default();
//! let mut app = initialize(&config)?;
//! app.load_initial().await;
//!
//! app.set_search_term("chicken").await;
//! for meal in &app.state().meals {
//!     println!("{}  {}", meal.id, meal.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Remote and storage failures never escape the action functions; they are
//! logged and the state degrades (stale results, empty favorites). The
//! typed [`MealdexError`] surfaces only from constructors and the
//! composition root.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod remote;
pub mod storage;

pub use app::{App, AppState};
pub use domain::{Meal, MealdexError, Result};
pub use remote::{HttpMealApi, MealApi};
pub use storage::{FavoritesStore, JsonFavoritesStore};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Library configuration.
///
/// `Default` carries TheMealDB production endpoints and the platform data
/// directory, so most callers never touch a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint; the term is sent as the `s` query parameter.
    pub search_url: String,

    /// Random-meal endpoint, queried without parameters.
    pub random_url: String,

    /// Location of the favorites slot.
    ///
    /// `None` selects the platform default under
    /// [`infrastructure::get_data_dir`].
    pub favorites_path: Option<PathBuf>,

    /// Tracing level used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: "https://www.themealdb.com/api/json/v1/1/search.php".to_string(),
            random_url: "https://www.themealdb.com/api/json/v1/1/random.php".to_string(),
            favorites_path: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Every field is optional; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| MealdexError::Config(format!("invalid config: {e}")))
    }

    /// Resolves the favorites path, falling back to the platform default.
    #[must_use]
    pub fn resolved_favorites_path(&self) -> PathBuf {
        self.favorites_path
            .clone()
            .unwrap_or_else(infrastructure::default_favorites_path)
    }
}

/// Builds the production application store from configuration.
///
/// Wires the HTTP client and the JSON favorites store together; the
/// persisted favorites are loaded during construction. The startup fetch is
/// left to the caller since it is asynchronous:
///
/// ```no_run
/// # async fn run() -> mealdex::Result<()> {
/// let mut app = mealdex::initialize(&mealdex::Config::default())?;
/// app.load_initial().await;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the storage
/// directory cannot be created.
pub fn initialize(config: &Config) -> Result<App<HttpMealApi, JsonFavoritesStore>> {
    tracing::debug!("initializing mealdex");

    let api = HttpMealApi::new(config)?;
    let store = JsonFavoritesStore::new(config.resolved_favorites_path())?;

    Ok(App::new(api, store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_themealdb() {
        let config = Config::default();
        assert!(config.search_url.ends_with("search.php"));
        assert!(config.random_url.ends_with("random.php"));
    }

    #[test]
    fn config_file_fields_are_all_optional() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search_url, Config::default().search_url);
        assert!(config.favorites_path.is_none());
    }

    #[test]
    fn config_file_overrides_take_effect() {
        let config: Config = toml::from_str(
            r#"
            search_url = "http://localhost:9000/search.php"
            favorites_path = "/tmp/mealdex-favorites.json"
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.search_url, "http://localhost:9000/search.php");
        assert_eq!(
            config.resolved_favorites_path(),
            PathBuf::from("/tmp/mealdex-favorites.json")
        );
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }
}
