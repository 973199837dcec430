use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use coffeedash_core::GeoDataStore;
use coffeedash_pipeline::{PipelineSettings, SelectionPipeline};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coffeedash_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffeedash_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();
    let config = api_config.dashboard_config().context("Failed to load dashboard configuration")?;

    tracing::info!(
        port = api_config.port,
        data_dir = %config.data_dir.value.display(),
        youth_age_threshold = config.youth_age_threshold.value,
        session_ttl_secs = api_config.session_ttl_secs,
        "Starting coffee dashboard API server"
    );

    // Load failures are fatal: the dashboard never serves partial data
    let paths = config.data_paths();
    let store = GeoDataStore::load(&paths, &config.load_options())
        .with_context(|| format!("Failed to load dashboard data from {}", config.data_dir.value.display()))?;

    let pipeline = Arc::new(SelectionPipeline::new(Arc::new(store), PipelineSettings::from(&config)));
    let state = Arc::new(AppState::new(pipeline).with_session_ttl(api_config.session_ttl()));

    let origin = api_config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", api_config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", api_config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
