//! Wire types for TheMealDB responses.
//!
//! Both the search and random endpoints return one JSON object whose `meals`
//! field carries the results. The API signals "no matches" by setting the
//! field to `null` (or omitting it) rather than returning an empty array;
//! normalization hides that distinction from the rest of the crate.

use crate::domain::Meal;
use serde::Deserialize;

/// Response envelope shared by the search and random endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Result entries; `None` is the API's "no matches" signal.
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl SearchResponse {
    /// Normalizes the envelope into a list of meals.
    ///
    /// A missing or `null` `meals` field becomes an empty list.
    #[must_use]
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}
