//! Storage backend abstraction.
//!
//! This module defines the [`FavoritesStore`] trait that abstracts over
//! favorites persistence. The state store only ever needs the whole
//! collection read or replaced, so the trait is exactly those two
//! operations, not a generic key-value interface.
//!
//! # Design Philosophy
//!
//! Persistence is an explicit, injected dependency of the application store
//! rather than an ambient side effect, so tests substitute an in-memory
//! fake and assert on exactly what was written.

use crate::domain::error::Result;
use crate::domain::Meal;

/// Abstraction over the durable favorites slot.
///
/// Implementations persist the favorites list as one unit. Partial updates
/// do not exist at this boundary; `save` always receives the full
/// collection.
///
/// # Implementations
///
/// - [`JsonFavoritesStore`](crate::storage::JsonFavoritesStore): JSON file
///   with atomic writes (default)
pub trait FavoritesStore: Send {
    /// Reads the persisted favorites collection.
    ///
    /// An absent slot is not an error and yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` if the slot exists but its contents cannot
    /// be parsed, or an I/O error if it cannot be read.
    fn load(&self) -> Result<Vec<Meal>>;

    /// Serializes the full collection and overwrites the favorites slot.
    ///
    /// Whole-collection replace semantics; the previous contents are gone
    /// once this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, favorites: &[Meal]) -> Result<()>;
}
