//! Meal domain model.
//!
//! This module defines the core `Meal` type representing a single recipe as
//! returned by TheMealDB. The fields the application reads are typed; every
//! other field of the remote payload is retained opaquely so a meal saved to
//! favorites round-trips through storage without losing data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single recipe as returned by TheMealDB.
///
/// Meals are immutable once fetched. They are never edited locally, only
/// copied between the search results list and the favorites list, so the
/// untyped remainder of the payload is carried along verbatim.
///
/// # Fields
///
/// - `id`: unique string key, `idMeal` on the wire
/// - `name`: display title, `strMeal` on the wire
/// - `thumbnail`: image reference, `strMealThumb` on the wire; some records
///   lack one
/// - `extra`: every other remote-sourced field, untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal")]
    pub name: String,

    #[serde(rename = "strMealThumb", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Meal {
    /// Creates a meal with only the typed fields populated.
    ///
    /// Mostly useful for fixtures; production meals come out of the
    /// deserializer carrying their full payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use mealdex::Meal;
    ///
    /// let meal = Meal::new("52772", "Teriyaki Chicken Casserole");
    /// assert_eq!(meal.id, "52772");
    /// assert!(meal.thumbnail.is_none());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: None,
            extra: Map::new(),
        }
    }
}
