use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_cpu_info, get_ram_info, get_storage_info, get_system_info, handler_404, index,
};
use super::state::AppState;

/// JSON endpoints with a short description, in index order.
pub const API_ROUTES: &[(&str, &str)] = &[
    ("/api/system", "Full system info"),
    ("/api/ram", "RAM info only"),
    ("/api/cpu", "CPU info only"),
    ("/api/storage", "Storage info only"),
];

/// Any origin may read the metrics; dashboards are served from elsewhere.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(AllowOrigin::any())
}

/// Build the router with routes and middleware wired.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/system", get(get_system_info))
        .route("/api/ram", get(get_ram_info))
        .route("/api/cpu", get(get_cpu_info))
        .route("/api/storage", get(get_storage_info))
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .with_state(state)
}
