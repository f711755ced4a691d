//! API server initialization

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::response::Redirect;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::openapi_json;
use super::routes::{health, names, search};
use crate::core::CoreApp;
use crate::core::constants::{DEFAULT_BODY_LIMIT, STATIC_ROUTE};
use crate::domain::SearchService;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.host, app.config.server.port);
        Self {
            app,
            allowed_origins,
        }
    }

    /// Serve until shutdown; returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let server = &app.config.server;
        let listener = TcpListener::bind((server.host.as_str(), server.port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", server.host, server.port))?;
        tracing::debug!(addr = %listener.local_addr()?, "Listening");

        let router = build_router(
            app.search.clone(),
            &app.config.assets.static_dir,
            &allowed_origins,
        );

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown.wait())
        .await?;

        Ok(app)
    }
}

/// Assemble every route and layer
pub fn build_router(
    search: SearchService,
    static_dir: &Path,
    allowed_origins: &AllowedOrigins,
) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/results") }))
        .route("/api/openapi.json", get(openapi_json))
        .nest("/api/v1/health", health::routes(search.clone()))
        .nest("/api/v1/names", names::routes(search.clone()))
        .merge(search::routes(search))
        .nest_service(STATIC_ROUTE, ServeDir::new(static_dir))
        .fallback(middleware::handle_404)
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}
