//! Name autocomplete endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::ValidatedQuery;
use crate::api::types::ErrorBody;
use crate::domain::search::SearchService;

#[derive(Clone)]
pub struct NamesApiState {
    pub search: SearchService,
}

#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct NamesQuery {
    /// Typed name fragment; normalized to title case before matching
    #[serde(default)]
    #[validate(length(max = 64, message = "Prefix must be at most 64 characters"))]
    pub prefix: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NamesResponse {
    pub names: Vec<String>,
}

pub fn routes(search: SearchService) -> Router<()> {
    Router::new()
        .route("/", get(list_names))
        .with_state(NamesApiState { search })
}

/// Stored pokemon names starting with a prefix
#[utoipa::path(
    get,
    path = "/api/v1/names",
    tag = "names",
    params(NamesQuery),
    responses(
        (status = 200, description = "Matching names in catalog order", body = NamesResponse),
        (status = 400, description = "Prefix too long", body = ErrorBody)
    )
)]
pub async fn list_names(
    State(state): State<NamesApiState>,
    query: ValidatedQuery<NamesQuery>,
) -> Json<NamesResponse> {
    let names = state.search.autocomplete(&query.prefix).await;
    Json(NamesResponse { names })
}
