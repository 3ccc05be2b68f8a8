// micro-events API server
// Decision: Without DATABASE_URL the server runs on the in-memory store (dev mode)

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use microevents_api::config::Config;
use microevents_api::openapi::ApiDoc;
use microevents_api::{build_router, telemetry};
use microevents_core::{EventService, EventStore, InMemoryEventStore};
use microevents_storage::PgEventStore;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    let config = Config::parse();

    telemetry::init_tracing();
    tracing::info!("microevents-api starting...");

    let (store, storage) = create_store(&config).await?;
    let service = Arc::new(EventService::new(store));

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    let app = build_router(service, storage, &config.api_prefix)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let cors_origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    let app = if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
        app
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    };

    let app = app.layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Pick the store backend from configuration
async fn create_store(config: &Config) -> Result<(Arc<dyn EventStore>, &'static str)> {
    match config.database_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => {
            let store = PgEventStore::connect(url, &config.pool_config())
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            if config.skip_schema_bootstrap {
                tracing::info!("Schema bootstrap skipped");
            } else {
                store.ensure_schema().await?;
                tracing::info!("Events schema ready");
            }
            let store: Arc<dyn EventStore> = Arc::new(store);
            Ok((store, "postgres"))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, events are kept in memory and lost on restart");
            let store: Arc<dyn EventStore> = Arc::new(InMemoryEventStore::new());
            Ok((store, "memory"))
        }
    }
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
                    _ = sigint.recv() => tracing::info!("Received SIGINT"),
                }
            }
            _ => {
                tracing::warn!("Failed to install signal handlers, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Received interrupt signal");
    }

    tracing::info!("Shutting down");
}
