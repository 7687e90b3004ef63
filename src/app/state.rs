//! Application state container.
//!
//! This module defines [`AppState`], the single source of truth for all
//! UI-relevant state: the current search results, the loading flag, the
//! search term, the detail selection, modal visibility, and the favorites
//! list. It is mutated only through [`App`](crate::app::App) actions or the
//! pure methods here; consumers read the fields directly.
//!
//! # State Components
//!
//! - **Meals**: search results, replaced wholesale on every successful fetch
//! - **Loading**: true strictly while a fetch is in flight
//! - **Search term**: free-text query driving the remote search endpoint
//! - **Selection**: the meal designated for detail display, plus modal
//!   visibility
//! - **Favorites**: user-curated persisted subset, unique by identifier
//!
//! The methods on `AppState` are pure state transitions, so they can be
//! tested without collaborators; everything effectful lives in the store.

use crate::domain::Meal;

/// Central application state container.
///
/// Owns every value the presentation layer can read. Created with
/// empty/default values apart from the favorites loaded at startup, mutated
/// only through store actions, and dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current search results.
    ///
    /// Replaced wholesale on every successful fetch; empty after a
    /// no-matches response. Never persisted.
    pub meals: Vec<Meal>,

    /// True strictly while a fetch is in flight, false otherwise, including
    /// after a failed fetch.
    pub loading: bool,

    /// The search term driving the remote search endpoint.
    ///
    /// Retained even when empty; an empty term leaves the previous results
    /// in place rather than clearing them.
    pub search_term: String,

    /// The meal currently designated for detail display.
    ///
    /// `None` before any selection, and after selecting an identifier that
    /// matched nothing. Not cleared when the modal closes; the stale value
    /// is dead state, never read while the modal is hidden.
    pub selected_meal: Option<Meal>,

    /// Whether the detail modal is visible.
    ///
    /// Set together with the selection by [`select_meal`](Self::select_meal)
    /// and cleared alone by [`close_modal`](Self::close_modal).
    pub show_modal: bool,

    /// User-curated favorites.
    ///
    /// Unique by identifier, insertion order preserved. Mirrored to durable
    /// storage by the store on every mutation.
    pub favorites: Vec<Meal>,
}

impl AppState {
    /// Creates state with the given favorites and everything else empty.
    #[must_use]
    pub fn new(favorites: Vec<Meal>) -> Self {
        Self {
            favorites,
            ..Self::default()
        }
    }

    /// Resolves `id` against the favorites list or the search results and
    /// marks the result selected, opening the modal either way.
    ///
    /// Lookup is a first-match linear scan; identifiers are unique within
    /// each list. A miss clears the selection, but the modal still opens and
    /// shows its empty state.
    pub fn select_meal(&mut self, id: &str, from_favorites: bool) {
        let source = if from_favorites {
            &self.favorites
        } else {
            &self.meals
        };
        self.selected_meal = source.iter().find(|meal| meal.id == id).cloned();
        self.show_modal = true;

        tracing::debug!(
            id = %id,
            from_favorites = from_favorites,
            found = self.selected_meal.is_some(),
            "meal selected"
        );
    }

    /// Hides the detail modal without touching the selection value.
    pub fn close_modal(&mut self) {
        self.show_modal = false;
    }

    /// Returns whether a favorite with this identifier exists.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|meal| meal.id == id)
    }

    /// Returns the "no meals matched" empty-state condition.
    ///
    /// Holds after a genuine zero-match response, and also when a startup
    /// fetch failed and nothing has ever loaded; the two cases are
    /// indistinguishable to the user by design.
    #[must_use]
    pub fn no_matches(&self) -> bool {
        !self.loading && self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, name: &str) -> Meal {
        Meal::new(id, name)
    }

    #[test]
    fn select_from_results_sets_selection_and_opens_modal() {
        let mut state = AppState::default();
        state.meals = vec![meal("1", "Chicken"), meal("2", "Beef")];

        state.select_meal("2", false);

        assert_eq!(state.selected_meal.as_ref().map(|m| m.id.as_str()), Some("2"));
        assert!(state.show_modal);
    }

    #[test]
    fn select_from_favorites_uses_favorites_list() {
        let mut state = AppState::new(vec![meal("9", "Pie")]);
        state.meals = vec![meal("1", "Chicken")];

        state.select_meal("9", true);

        assert_eq!(state.selected_meal.as_ref().map(|m| m.name.as_str()), Some("Pie"));
    }

    #[test]
    fn select_miss_clears_selection_but_still_opens_modal() {
        let mut state = AppState::default();
        state.meals = vec![meal("1", "Chicken")];
        state.select_meal("1", false);

        state.select_meal("nope", false);

        assert!(state.selected_meal.is_none());
        assert!(state.show_modal);
    }

    #[test]
    fn close_modal_keeps_selection_value() {
        let mut state = AppState::default();
        state.meals = vec![meal("1", "Chicken")];
        state.select_meal("1", false);

        state.close_modal();

        assert!(!state.show_modal);
        assert!(state.selected_meal.is_some());
    }

    #[test]
    fn no_matches_requires_idle_and_empty() {
        let mut state = AppState::default();
        assert!(state.no_matches());

        state.loading = true;
        assert!(!state.no_matches());

        state.loading = false;
        state.meals = vec![meal("1", "Chicken")];
        assert!(!state.no_matches());
    }
}
