//! # REST Handlers
//!
//! Request/response DTOs and handler functions for the REST API.
//!
//! DTO mapping happens here and only here: the pipeline works with domain
//! values, the wire format is camelCase JSON.

use crate::application::error::SearchError;
use crate::application::search_filter::{CurrencyRef, SearchFilter, DEFAULT_LIMIT};
use crate::application::services::nearby_search::{
    NearbySearchEngine, NearbySearchPage, RankedOfficeResult,
};
use crate::domain::entities::WorkingHour;
use crate::domain::value_objects::{OfficeId, SortPreference, TimeOfDay, Weekday};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Shared state for the REST API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The search engine serving `/offices/nearby`.
    pub engine: Arc<NearbySearchEngine>,
}

/// Query parameters for `GET /offices/nearby`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyOfficesParams {
    /// Search center latitude.
    pub latitude: f64,
    /// Search center longitude.
    pub longitude: f64,
    /// Search radius in kilometres.
    pub radius_in_km: f64,
    /// Base currency code or id.
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Target currency code or id.
    #[serde(default)]
    pub target_currency: Option<String>,
    /// Amount being converted.
    #[serde(default)]
    pub target_currency_rate: Option<Decimal>,
    /// Comma-separated target currency codes the office must trade.
    #[serde(default)]
    pub available_currencies: Option<String>,
    /// Filter on the active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Filter on the verified flag.
    #[serde(default)]
    pub is_verified: Option<bool>,
    /// Filter on the featured flag.
    #[serde(default)]
    pub is_featured: Option<bool>,
    /// Only offices open right now (synonym of `showOnlyOpenNow`).
    #[serde(default)]
    pub is_open: Option<bool>,
    /// Only offices open right now.
    #[serde(default)]
    pub show_only_open_now: Option<bool>,
    /// Order by ascending distance.
    #[serde(default)]
    pub nearest: Option<bool>,
    /// Order by the popularity proxy.
    #[serde(default)]
    pub is_popular: Option<bool>,
    /// Order by the trending proxy.
    #[serde(default)]
    pub most_searched: Option<bool>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl NearbyOfficesParams {
    /// Builds the validated pipeline filter from the raw parameters.
    fn into_filter(self) -> Result<SearchFilter, SearchError> {
        let mut builder =
            SearchFilter::builder(self.latitude, self.longitude, self.radius_in_km)
                .open_now(
                    self.is_open.unwrap_or(false) || self.show_only_open_now.unwrap_or(false),
                )
                .sort(SortPreference::from_flags(
                    self.nearest.unwrap_or(false),
                    self.is_popular.unwrap_or(false),
                    self.most_searched.unwrap_or(false),
                ))
                .page(self.page.unwrap_or(1))
                .limit(self.limit.unwrap_or(DEFAULT_LIMIT));

        if let Some(code) = self.base_currency {
            builder = builder.base_currency(CurrencyRef::parse(&code));
        }
        if let Some(code) = self.target_currency {
            builder = builder.target_currency(CurrencyRef::parse(&code));
        }
        if let Some(amount) = self.target_currency_rate {
            builder = builder.target_amount(amount);
        }
        if let Some(raw) = self.available_currencies {
            let codes: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect();
            if !codes.is_empty() {
                builder = builder.available_currencies(codes);
            }
        }
        if let Some(value) = self.is_active {
            builder = builder.is_active(value);
        }
        if let Some(value) = self.is_verified {
            builder = builder.is_verified(value);
        }
        if let Some(value) = self.is_featured {
            builder = builder.is_featured(value);
        }

        builder.build()
    }
}

/// A schedule entry on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHourDto {
    /// Weekday name.
    pub weekday: Weekday,
    /// Opening time, HH:MM.
    pub from_time: TimeOfDay,
    /// Closing time, HH:MM.
    pub to_time: TimeOfDay,
    /// Break start, HH:MM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_from_time: Option<TimeOfDay>,
    /// Break end, HH:MM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_to_time: Option<TimeOfDay>,
}

impl From<&WorkingHour> for WorkingHourDto {
    fn from(entry: &WorkingHour) -> Self {
        Self {
            weekday: entry.weekday(),
            from_time: entry.from_time(),
            to_time: entry.to_time(),
            break_from_time: entry.break_window().map(|b| b.from()),
            break_to_time: entry.break_window().map(|b| b.to()),
        }
    }
}

/// One office in the response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeDto {
    /// Office identifier.
    pub id: OfficeId,
    /// Office name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Activity flag.
    pub is_active: bool,
    /// Verification flag.
    pub is_verified: bool,
    /// Featured flag.
    pub is_featured: bool,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Distance from the search center in kilometres.
    pub distance_in_km: f64,
    /// Converted amount, when a matching active rate exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_value: Option<Decimal>,
    /// True on the single most favorable office.
    pub best_office: bool,
    /// Whether the office is open right now.
    pub is_currently_open: bool,
    /// Today's schedule entry, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_working_hours: Option<WorkingHourDto>,
}

impl From<&RankedOfficeResult> for OfficeDto {
    fn from(result: &RankedOfficeResult) -> Self {
        let office = &result.office;
        Self {
            id: office.id(),
            name: office.name().to_string(),
            address: office.address().to_string(),
            city: office.city().to_string(),
            country: office.country().to_string(),
            longitude: office.location().longitude(),
            latitude: office.location().latitude(),
            is_active: office.is_active(),
            is_verified: office.is_verified(),
            is_featured: office.is_featured(),
            created_at: office.created_at(),
            distance_in_km: result.distance_in_km,
            equivalent_value: result.equivalent_value,
            best_office: result.best_office,
            is_currently_open: result.is_currently_open,
            today_working_hours: result.today_working_hours.as_ref().map(WorkingHourDto::from),
        }
    }
}

/// Response body for `GET /offices/nearby`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyOfficesResponse {
    /// The offices on this page.
    pub offices: Vec<OfficeDto>,
    /// Number of offices on this page.
    pub offices_in_page: usize,
    /// Size of the filtered set across all pages.
    pub total_offices_in_area: usize,
    /// The requested page number.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// True when a later page exists.
    pub has_more: bool,
}

impl From<NearbySearchPage> for NearbyOfficesResponse {
    fn from(page: NearbySearchPage) -> Self {
        Self {
            offices: page.offices.iter().map(OfficeDto::from).collect(),
            offices_in_page: page.offices_in_page,
            total_offices_in_area: page.total_offices_in_area,
            current_page: page.current_page,
            total_pages: page.total_pages,
            has_more: page.has_more,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Wrapper making [`SearchError`] an axum response.
#[derive(Debug)]
pub struct ApiError(pub SearchError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            SearchError::InvalidSearchParameters { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_search_parameters")
            }
            SearchError::CurrencyNotFound(_) => (StatusCode::NOT_FOUND, "currency_not_found"),
            SearchError::UnsupportedCrossCurrencyPair { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unsupported_cross_currency_pair",
            ),
            SearchError::ReferenceCurrencyUnconfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "reference_currency_unconfigured",
            ),
            SearchError::StoreUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
            }
            SearchError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
        };

        if self.0.is_server_side() {
            warn!(error = %self.0, "search request failed");
        }

        let body = ErrorResponse {
            error: kind,
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(error: SearchError) -> Self {
        Self(error)
    }
}

/// `GET /offices/nearby` - the nearby-office search endpoint.
///
/// # Errors
///
/// Returns an [`ApiError`] mapping the pipeline's typed failures onto
/// HTTP statuses.
pub async fn nearby_offices(
    State(state): State<AppState>,
    Query(params): Query<NearbyOfficesParams>,
) -> Result<Json<NearbyOfficesResponse>, ApiError> {
    let filter = params.into_filter()?;
    let page = state.engine.search(filter).await?;
    Ok(Json(NearbyOfficesResponse::from(page)))
}

/// `GET /health` - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
