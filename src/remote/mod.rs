//! Remote search client for TheMealDB.
//!
//! This module owns everything that talks to the meal database: the typed
//! wire envelope, the async trait seam the application store is written
//! against, and the HTTP implementation of that seam.
//!
//! # Modules
//!
//! - `client`: API trait seam and HTTP implementation
//! - `response`: Wire envelope and normalization

pub mod client;
pub mod response;

pub use client::{HttpMealApi, LocalMealApi, MealApi};
pub use response::SearchResponse;
