//! HTTP client for TheMealDB endpoints.
//!
//! The application store is written against the [`LocalMealApi`] seam so
//! tests can drive it with an in-memory fake; [`HttpMealApi`] is the
//! production implementation over `reqwest`.

use crate::domain::error::Result;
use crate::domain::Meal;
use crate::remote::response::SearchResponse;
use crate::Config;
use reqwest::Client;
use std::time::Duration;

/// Client-wide request timeout. Deliberately not configurable; a slow
/// endpoint surfaces as a swallowed `Network` error.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Remote meal database operations.
///
/// Both operations return an already-normalized list: the wire-level
/// presence/absence of the `meals` field never leaves this layer.
#[trait_variant::make(MealApi: Send)]
pub trait LocalMealApi {
    /// Searches meals by free-text term.
    ///
    /// An empty term is valid and returns the API's full listing.
    ///
    /// # Errors
    ///
    /// Returns `Network` on transport or HTTP failure.
    async fn search(&self, term: &str) -> Result<Vec<Meal>>;

    /// Fetches one random meal.
    ///
    /// Returns at most one entry.
    ///
    /// # Errors
    ///
    /// Returns `Network` on transport or HTTP failure.
    async fn random(&self) -> Result<Vec<Meal>>;
}

/// `reqwest`-backed implementation of the meal API.
///
/// No retries, no caching; one GET per call against the endpoints named in
/// the configuration.
pub struct HttpMealApi {
    client: Client,
    search_url: String,
    random_url: String,
}

impl HttpMealApi {
    /// Creates a client for the endpoints named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            random_url: config.random_url.clone(),
        })
    }
}

impl LocalMealApi for HttpMealApi {
    async fn search(&self, term: &str) -> Result<Vec<Meal>> {
        tracing::debug!(term = %term, "searching meals");

        let response: SearchResponse = self
            .client
            .get(&self.search_url)
            .query(&[("s", term)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_meals())
    }

    async fn random(&self) -> Result<Vec<Meal>> {
        tracing::debug!("fetching random meal");

        let response: SearchResponse = self
            .client
            .get(&self.random_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_meals())
    }
}
