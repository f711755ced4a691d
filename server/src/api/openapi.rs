//! OpenAPI specification

use axum::http::header;
use axum::response::{IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{health, names, search};
use crate::api::types::ErrorBody;
use crate::domain::search::ResultsView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokedex API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Pokemon attribute search"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "search", description = "Attribute search"),
        (name = "names", description = "Name autocomplete")
    ),
    paths(health::health, search::results, names::list_names),
    components(schemas(
        health::HealthResponse,
        ErrorBody,
        ResultsView,
        names::NamesQuery,
        names::NamesResponse,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/health"));
        assert!(paths.contains_key("/results"));
        assert!(paths.contains_key("/api/v1/names"));
        assert!(doc["components"]["schemas"].get("ResultsView").is_some());
    }
}
