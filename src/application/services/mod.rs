//! # Application Services
//!
//! The stages of the nearby-search pipeline.
//!
//! - [`direction`]: currency-direction resolution with swap semantics
//! - [`spatial`]: radius search plus non-spatial filtering
//! - [`hours`]: open/closed evaluation against weekly schedules
//! - [`rate_evaluation`]: equivalent-value computation
//! - [`ranking`]: ordering and best-office selection
//! - [`pagination`]: page slicing and metadata
//! - [`nearby_search`]: the orchestrator composing all of the above

pub mod direction;
pub mod hours;
pub mod nearby_search;
pub mod pagination;
pub mod ranking;
pub mod rate_evaluation;
pub mod spatial;

pub use direction::{CurrencyDirectionResolver, ResolvedCurrencyFilter};
pub use hours::WorkingHoursEvaluator;
pub use nearby_search::{NearbySearchEngine, NearbySearchPage, RankedOfficeResult, SearchConfig};
pub use pagination::{Page, PaginationAssembler};
pub use ranking::RankingEngine;
pub use rate_evaluation::RateEvaluator;
pub use spatial::{OfficeCandidate, SpatialFilterEngine, SpatialQueryConfig};
