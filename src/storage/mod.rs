//! Storage layer for persisted favorites.
//!
//! This module provides the persistence abstraction for the user's favorite
//! meals. The collection is always read and written as one unit; there is no
//! per-entry access at this boundary.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for favorites persistence
//! - `json`: JSON file-based implementation

pub mod backend;
pub mod json;

pub use backend::FavoritesStore;
pub use json::JsonFavoritesStore;
