//! HTTP middleware (CORS, 404 handler)

use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::types::ApiError;
use crate::core::config::is_all_interfaces;

/// Origins the search page may be served from
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    pub fn new(host: &str, port: u16) -> Self {
        let hosts: Vec<&str> = if is_all_interfaces(host) || host == "127.0.0.1" || host == "localhost"
        {
            vec!["localhost", "127.0.0.1"]
        } else {
            vec![host]
        };

        let origins = hosts
            .iter()
            .flat_map(|h| [format!("http://{}:{}", h, port), format!("http://{}", h)])
            .collect();

        Self { origins }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    fn as_header_values(&self) -> Vec<HeaderValue> {
        self.origins.iter().filter_map(|o| o.parse().ok()).collect()
    }
}

/// Create CORS layer
pub fn cors(allowed: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed.as_header_values()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}

/// Fallback for unknown routes
pub async fn handle_404(req: Request) -> ApiError {
    tracing::debug!(
        method = %req.method(),
        uri = %req.uri(),
        referer = req
            .headers()
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-"),
        "[404]"
    );
    ApiError::not_found("ROUTE_NOT_FOUND", format!("No route for {}", req.uri().path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_loopback() {
        let allowed = AllowedOrigins::new("127.0.0.1", 5000);
        assert!(allowed.is_allowed("http://localhost:5000"));
        assert!(allowed.is_allowed("http://127.0.0.1:5000"));
        assert!(allowed.is_allowed("http://localhost"));
        assert!(!allowed.is_allowed("http://localhost:5001"));
        assert!(!allowed.is_allowed("http://example.com"));
    }

    #[test]
    fn test_allowed_origins_custom_host() {
        let allowed = AllowedOrigins::new("pokedex.local", 8080);
        assert!(allowed.is_allowed("http://pokedex.local:8080"));
        assert!(!allowed.is_allowed("http://localhost:8080"));
    }

    #[test]
    fn test_allowed_origins_all_interfaces() {
        let allowed = AllowedOrigins::new("0.0.0.0", 5000);
        assert!(allowed.is_allowed("http://localhost:5000"));
        assert_eq!(allowed.as_header_values().len(), 4);
    }
}
