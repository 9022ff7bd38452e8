//! Parts route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use partsbin_core::{DEFAULT_PAGE_LIMIT, Part, PartId, PartPage, PartsQuery};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Deserialize a numeric query parameter leniently.
///
/// Missing, empty, or unparseable values become `None`, so the handler
/// falls back to its defaults instead of rejecting the request.
fn unparseable_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.trim().parse().ok()))
}

/// Part listing query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    #[serde(deserialize_with = "unparseable_as_none")]
    pub offset: Option<usize>,
    #[serde(deserialize_with = "unparseable_as_none")]
    pub limit: Option<usize>,
    pub search: Option<String>,
    /// Min price filter (dollars)
    #[serde(rename = "minPrice", deserialize_with = "unparseable_as_none")]
    pub min_price: Option<Decimal>,
    /// Max price filter (dollars)
    #[serde(rename = "maxPrice", deserialize_with = "unparseable_as_none")]
    pub max_price: Option<Decimal>,
}

impl ListParams {
    /// Apply defaults and produce the catalog query.
    fn into_query(self) -> PartsQuery {
        PartsQuery {
            search: self.search.unwrap_or_default(),
            min_price: self.min_price.unwrap_or(Decimal::ZERO),
            max_price: self.max_price,
            offset: self.offset.unwrap_or(0),
            limit: self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        }
    }
}

/// Part listing endpoint.
///
/// Filters by search text and price bounds, then returns the requested
/// window plus the total match count.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<PartPage> {
    Json(state.catalog().query(&params.into_query()))
}

/// Single part lookup endpoint.
///
/// A non-numeric id segment behaves like an unknown id: both yield 404.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Part>> {
    id.parse::<PartId>()
        .ok()
        .and_then(|id| state.catalog().find(id).cloned())
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Part not found".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn params(query: &str) -> ListParams {
        let uri: Uri = format!("/api/parts?{query}").parse().unwrap();
        let Query(params) = Query::<ListParams>::try_from_uri(&uri).unwrap();
        params
    }

    #[test]
    fn test_missing_params_use_defaults() {
        let query = params("").into_query();
        assert_eq!(query, PartsQuery::default());
        assert_eq!(query.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_well_formed_params_pass_through() {
        let query = params("search=oil&offset=8&limit=8&minPrice=10&maxPrice=99.5").into_query();
        assert_eq!(query.search, "oil");
        assert_eq!(query.offset, 8);
        assert_eq!(query.limit, 8);
        assert_eq!(query.min_price, Decimal::new(10, 0));
        assert_eq!(query.max_price, Some(Decimal::new(995, 1)));
    }

    #[test]
    fn test_malformed_numbers_fall_back_to_defaults() {
        let query = params("offset=abc&limit=banana&minPrice=x&maxPrice=y").into_query();
        assert_eq!(query, PartsQuery::default());
    }

    #[test]
    fn test_negative_pagination_values_fall_back() {
        // usize has no negative values, so these parse as junk
        let query = params("offset=-5&limit=-1").into_query();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let query = params("offset=&limit=&search=&minPrice=&maxPrice=").into_query();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(query.search, "");
        assert_eq!(query.min_price, Decimal::ZERO);
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn test_infinity_is_not_a_price() {
        // The demo UI never sends it, but a hand-built URL might
        let query = params("maxPrice=Infinity").into_query();
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn test_limit_zero_is_honored() {
        let query = params("limit=0").into_query();
        assert_eq!(query.limit, 0);
    }

    #[test]
    fn test_whitespace_padded_numbers_parse() {
        let query = params("offset=%205&limit=8%20").into_query();
        assert_eq!(query.offset, 5);
        assert_eq!(query.limit, 8);
    }
}
