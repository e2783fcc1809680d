//! # Exchange Locator
//!
//! Nearby currency-exchange office search with currency-aware ranking.
//!
//! The crate locates exchange offices around a geographic point, filters
//! and ranks them, and computes a currency-specific equivalent value so a
//! caller can compare effective rates across offices without knowing which
//! side of a two-way rate applies to their conversion direction.
//!
//! # Architecture
//!
//! - [`domain`]: entities, value objects, and invariants
//! - [`application`]: the search pipeline (direction resolution, spatial
//!   query, hours and rate evaluation, ranking, pagination)
//! - [`infrastructure`]: store ports and in-memory implementations
//! - [`api`]: the axum REST surface
//! - [`config`]: typed application configuration
//!
//! # Example
//!
//! ```ignore
//! use exchange_locator::application::SearchFilter;
//! use exchange_locator::application::services::NearbySearchEngine;
//!
//! let engine = NearbySearchEngine::with_defaults(store, lookup);
//! let filter = SearchFilter::builder(33.5731, -7.5898, 10.0).build()?;
//! let page = engine.search(filter).await?;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
