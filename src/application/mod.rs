//! # Application Layer
//!
//! Use-case orchestration for the nearby-office search.
//!
//! The entry point is
//! [`NearbySearchEngine`](services::NearbySearchEngine); requests arrive as
//! a validated [`SearchFilter`](search_filter::SearchFilter) and leave as a
//! [`NearbySearchPage`](services::NearbySearchPage) or a typed
//! [`SearchError`](error::SearchError).

pub mod error;
pub mod search_filter;
pub mod services;

pub use error::{SearchError, SearchResult};
pub use search_filter::{CurrencyRef, SearchFilter, SearchFilterBuilder};
