// Router assembly for the standalone server
use crate::infrastructure::config::CorsSettings;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    api_not_found, authenticate, get_account, get_config, get_measurements, health_check,
    list_accounts,
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// `*` allows any origin; otherwise each entry must be a valid origin header.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins = if settings.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let list: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// API routes, health check, and the dashboard's static files as fallback.
pub fn build_router(state: Arc<AppState>, static_dir: &str, cors: CorsLayer) -> Router {
    // Wrong method on a known path answers like an unknown path
    let api = Router::new()
        .route("/auth", post(authenticate).fallback(api_not_found))
        .route("/accounts", get(list_accounts).fallback(api_not_found))
        .route("/account", get(get_account).fallback(api_not_found))
        .route("/measurements", get(get_measurements).fallback(api_not_found))
        .route("/config", get(get_config).fallback(api_not_found))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .route("/healthz", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
