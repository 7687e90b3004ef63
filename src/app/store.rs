//! The application store: state plus injected collaborators.
//!
//! [`App`] owns the [`AppState`] together with the two effectful
//! collaborators (remote meal API, favorites store) and exposes the action
//! functions the presentation layer drives. Each action applies its state
//! updates before returning; fetch-backed actions hold the loading flag for
//! exactly the lifetime of the request.
//!
//! # Error Policy
//!
//! Remote and persistence failures never escape an action. They are logged
//! and the state degrades: a failed fetch leaves the previous results in
//! place, and a failed save leaves the in-memory favorites ahead of the
//! slot until the next successful save.

use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::domain::Meal;
use crate::remote::client::LocalMealApi;
use crate::storage::backend::FavoritesStore;

/// The application store.
///
/// Generic over its two seams so tests can substitute in-memory fakes. The
/// actions take `&mut self`, which also means two fetches can never overlap
/// on one store; a slow stale response cannot clobber a newer one.
pub struct App<A, S> {
    state: AppState,
    api: A,
    store: S,
}

impl<A, S> App<A, S>
where
    A: LocalMealApi,
    S: FavoritesStore,
{
    /// Creates a store, loading favorites from the persistence adapter.
    ///
    /// A load failure (unreadable or malformed slot) is logged and degrades
    /// to empty favorites; construction itself never fails.
    pub fn new(api: A, store: S) -> Self {
        let favorites = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load favorites, starting empty");
            Vec::new()
        });

        tracing::debug!(favorite_count = favorites.len(), "store created");

        Self {
            state: AppState::new(favorites),
            api,
            store,
        }
    }

    /// Read access to the full application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Performs the startup fetch: one unconditional empty-term search to
    /// populate the initial results list.
    pub async fn load_initial(&mut self) {
        self.fetch_search("").await;
    }

    /// Updates the search term and, when it is non-empty, fetches matching
    /// meals.
    ///
    /// An empty term records the term but triggers no fetch, leaving the
    /// previous results stale.
    pub async fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.state.search_term.clone_from(&term);

        if term.is_empty() {
            tracing::debug!("empty search term, skipping fetch");
            return;
        }

        self.fetch_search(&term).await;
    }

    /// Fetches one random meal, replacing the results list with it.
    pub async fn fetch_random_meal(&mut self) {
        self.state.loading = true;
        let outcome = self.api.random().await;
        self.apply_fetch_outcome(outcome);
    }

    /// Resolves `id` in the indicated list and opens the detail modal.
    ///
    /// With `from_favorites` set the favorites list is scanned, otherwise
    /// the current search results. A miss still opens the modal with no
    /// selection.
    pub fn select_meal(&mut self, id: &str, from_favorites: bool) {
        self.state.select_meal(id, from_favorites);
    }

    /// Hides the detail modal; the selection value stays resident.
    pub fn close_modal(&mut self) {
        self.state.close_modal();
    }

    /// Copies the meal with this identifier from the search results into the
    /// favorites, then persists the updated collection.
    ///
    /// A no-op when the identifier is already a favorite or matches nothing
    /// in the current results, so calling it twice is safe.
    pub fn add_to_favorites(&mut self, id: &str) {
        if self.state.is_favorite(id) {
            tracing::debug!(id = %id, "already a favorite");
            return;
        }

        let Some(found) = self.state.meals.iter().find(|meal| meal.id == id).cloned() else {
            tracing::debug!(id = %id, "identifier not in current results");
            return;
        };

        self.state.favorites.push(found);
        self.persist_favorites();
    }

    /// Removes any favorite with this identifier, then persists the updated
    /// collection. A no-op when the identifier is absent.
    pub fn remove_from_favorites(&mut self, id: &str) {
        let before = self.state.favorites.len();
        self.state.favorites.retain(|meal| meal.id != id);

        if self.state.favorites.len() == before {
            tracing::debug!(id = %id, "identifier not in favorites");
            return;
        }

        self.persist_favorites();
    }

    /// Runs one search fetch under the loading-flag discipline.
    async fn fetch_search(&mut self, term: &str) {
        self.state.loading = true;
        let outcome = self.api.search(term).await;
        self.apply_fetch_outcome(outcome);
    }

    /// Applies a fetch outcome: success replaces the results, failure is
    /// logged and leaves them untouched. The loading flag clears either way.
    fn apply_fetch_outcome(&mut self, outcome: Result<Vec<Meal>>) {
        match outcome {
            Ok(meals) => {
                tracing::debug!(count = meals.len(), "results replaced");
                self.state.meals = meals;
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed, keeping previous results");
            }
        }
        self.state.loading = false;
    }

    /// Writes the favorites through the persistence adapter, logging instead
    /// of propagating on failure.
    fn persist_favorites(&mut self) {
        if let Err(e) = self.store.save(&self.state.favorites) {
            tracing::error!(error = %e, "failed to persist favorites");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::MealdexError;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn meal(id: &str, name: &str) -> Meal {
        Meal::new(id, name)
    }

    fn transport_error() -> MealdexError {
        MealdexError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    /// Fake remote API returning canned outcomes in order and recording the
    /// search terms it was called with.
    struct FakeApi {
        outcomes: RefCell<VecDeque<Result<Vec<Meal>>>>,
        terms: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn returning(outcomes: Vec<Result<Vec<Meal>>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                terms: RefCell::new(Vec::new()),
            }
        }

        fn unused() -> Self {
            Self::returning(Vec::new())
        }
    }

    impl LocalMealApi for FakeApi {
        async fn search(&self, term: &str) -> Result<Vec<Meal>> {
            self.terms.borrow_mut().push(term.to_string());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("unexpected search call")
        }

        async fn random(&self) -> Result<Vec<Meal>> {
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("unexpected random call")
        }
    }

    /// Fake favorites store recording every saved snapshot.
    #[derive(Default)]
    struct FakeStore {
        initial: Vec<Meal>,
        fail_load: bool,
        saved: Vec<Vec<Meal>>,
    }

    impl FavoritesStore for FakeStore {
        fn load(&self) -> Result<Vec<Meal>> {
            if self.fail_load {
                Err(MealdexError::MalformedData("not json".to_string()))
            } else {
                Ok(self.initial.clone())
            }
        }

        fn save(&mut self, favorites: &[Meal]) -> Result<()> {
            self.saved.push(favorites.to_vec());
            Ok(())
        }
    }

    #[test]
    fn favorites_load_at_construction() {
        let store = FakeStore {
            initial: vec![meal("9", "Pie")],
            ..Default::default()
        };

        let app = App::new(FakeApi::unused(), store);

        assert!(app.state().is_favorite("9"));
        assert!(!app.state().loading);
    }

    #[test]
    fn unreadable_favorites_slot_degrades_to_empty() {
        let store = FakeStore {
            fail_load: true,
            ..Default::default()
        };

        let app = App::new(FakeApi::unused(), store);

        assert!(app.state().favorites.is_empty());
    }

    #[tokio::test]
    async fn search_replaces_results_and_clears_loading() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let mut app = App::new(api, FakeStore::default());

        app.set_search_term("chicken").await;

        assert_eq!(app.state().search_term, "chicken");
        assert_eq!(app.state().meals.len(), 1);
        assert_eq!(app.state().meals[0].id, "1");
        assert!(!app.state().loading);
    }

    #[tokio::test]
    async fn empty_term_records_term_without_fetching() {
        let mut app = App::new(FakeApi::unused(), FakeStore::default());

        app.set_search_term("").await;

        assert!(app.api.terms.borrow().is_empty());
        assert!(app.state().meals.is_empty());
    }

    #[tokio::test]
    async fn no_match_response_empties_results() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")]), Ok(Vec::new())]);
        let mut app = App::new(api, FakeStore::default());

        app.set_search_term("chicken").await;
        app.set_search_term("zzznomatch").await;

        assert!(app.state().meals.is_empty());
        assert!(app.state().no_matches());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_results() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")]), Err(transport_error())]);
        let mut app = App::new(api, FakeStore::default());

        app.set_search_term("chicken").await;
        app.set_search_term("beef").await;

        assert_eq!(app.state().meals.len(), 1);
        assert_eq!(app.state().meals[0].id, "1");
        assert!(!app.state().loading);
    }

    #[tokio::test]
    async fn load_initial_issues_one_empty_term_search() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let mut app = App::new(api, FakeStore::default());

        app.load_initial().await;

        assert_eq!(app.api.terms.borrow().as_slice(), ["".to_string()]);
        assert_eq!(app.state().meals.len(), 1);
    }

    #[tokio::test]
    async fn random_replaces_results() {
        let api = FakeApi::returning(vec![
            Ok(vec![meal("1", "Chicken"), meal("2", "Beef")]),
            Ok(vec![meal("3", "Pie")]),
        ]);
        let mut app = App::new(api, FakeStore::default());

        app.set_search_term("a").await;
        app.fetch_random_meal().await;

        assert_eq!(app.state().meals.len(), 1);
        assert_eq!(app.state().meals[0].id, "3");
    }

    #[tokio::test]
    async fn add_to_favorites_is_idempotent_and_persists() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let mut app = App::new(api, FakeStore::default());
        app.set_search_term("chicken").await;

        app.add_to_favorites("1");
        app.add_to_favorites("1");

        assert_eq!(app.state().favorites.len(), 1);
        assert_eq!(app.store.saved.len(), 1);
        assert_eq!(app.store.saved[0], app.state().favorites);
    }

    #[tokio::test]
    async fn add_with_unknown_id_is_a_no_op() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let mut app = App::new(api, FakeStore::default());
        app.set_search_term("chicken").await;

        app.add_to_favorites("nope");

        assert!(app.state().favorites.is_empty());
        assert!(app.store.saved.is_empty());
    }

    #[tokio::test]
    async fn remove_then_re_add_restores_single_entry() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let mut app = App::new(api, FakeStore::default());
        app.set_search_term("chicken").await;

        app.add_to_favorites("1");
        app.remove_from_favorites("1");
        app.add_to_favorites("1");

        let ids: Vec<&str> = app.state().favorites.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[tokio::test]
    async fn last_favorite_remove_and_re_add_tracks_storage() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let mut app = App::new(api, FakeStore::default());
        app.set_search_term("chicken").await;
        app.add_to_favorites("1");

        app.remove_from_favorites("1");
        assert!(app.state().favorites.is_empty());
        assert_eq!(app.store.saved.last().unwrap(), &app.state().favorites);

        app.add_to_favorites("1");
        assert_eq!(app.state().favorites.len(), 1);
        assert_eq!(app.store.saved.last().unwrap(), &app.state().favorites);
    }

    #[tokio::test]
    async fn remove_of_absent_id_does_not_save() {
        let mut app = App::new(FakeApi::unused(), FakeStore::default());

        app.remove_from_favorites("1");

        assert!(app.store.saved.is_empty());
    }

    #[tokio::test]
    async fn selection_resolves_against_either_list() {
        let api = FakeApi::returning(vec![Ok(vec![meal("1", "Chicken")])]);
        let store = FakeStore {
            initial: vec![meal("9", "Pie")],
            ..Default::default()
        };
        let mut app = App::new(api, store);
        app.set_search_term("chicken").await;

        app.select_meal("1", false);
        assert_eq!(app.state().selected_meal.as_ref().map(|m| m.id.as_str()), Some("1"));
        assert!(app.state().show_modal);

        app.close_modal();
        assert!(!app.state().show_modal);

        app.select_meal("9", true);
        assert_eq!(app.state().selected_meal.as_ref().map(|m| m.id.as_str()), Some("9"));
        assert!(app.state().show_modal);
    }
}
