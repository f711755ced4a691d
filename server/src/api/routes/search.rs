//! Search endpoint
//!
//! Accepts the search form as a urlencoded POST body or as a GET query
//! string and answers with the assembled results.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::SearchForm;
use crate::api::types::{ApiError, ErrorBody};
use crate::domain::search::{ResultsView, SearchService};

#[derive(Clone)]
pub struct SearchApiState {
    pub search: SearchService,
}

pub fn routes(search: SearchService) -> Router<()> {
    Router::new()
        .route("/results", get(results).post(results))
        .with_state(SearchApiState { search })
}

/// Run a search from form fields
///
/// Range attributes are enabled with `add_<key>` and bounded by
/// `min_<key>`/`max_<key>`; categorical attributes repeat `<key>`; `name`
/// is matched as a prefix against stored names.
#[utoipa::path(
    post,
    path = "/results",
    tag = "search",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Search form fields, e.g. add_hp=on&min_hp=50&max_hp=100&primary_type=Fire"
    ),
    responses(
        (status = 200, description = "Matching pokemon or a single explanatory entry", body = ResultsView),
        (status = 400, description = "Malformed range bounds", body = ErrorBody)
    )
)]
pub async fn results(
    State(state): State<SearchApiState>,
    SearchForm(form): SearchForm,
) -> Result<Json<ResultsView>, ApiError> {
    let view = state.search.search_form(&form).await?;
    Ok(Json(view))
}
