//! HTTP route definitions

use axum::{
    extract::State,
    http::{header, Method},
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::AppState;
use crate::http::error::handle_panic;
use crate::http::middleware::throttle_login;
use crate::http::{admin, auth, dashboard, stock};
use crate::util::time::uptime_secs;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.client_origin);

    // Login is throttled separately from the rest of the API
    let login_routes = Router::new()
        .route("/api/login", post(auth::login))
        .route_layer(middleware::from_fn_with_state(state.clone(), throttle_login));

    let api_routes = Router::new()
        .route("/api/signup", post(auth::signup))
        .route(
            "/api/stock/:shop_id",
            get(stock::get_stock).post(stock::update_stock),
        )
        .route(
            "/api/admin/shops",
            get(admin::list_shops).post(admin::create_shop),
        )
        .route("/api/admin/stats", get(admin::stats))
        .route("/api/dashboard/shop/:shop_id", get(dashboard::shop_dashboard))
        .route(
            "/api/dashboard/beneficiary/:user_id",
            get(dashboard::beneficiary_dashboard),
        );

    Router::new()
        .route("/health", get(health_handler))
        .merge(login_routes)
        .merge(api_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured client origins (comma-separated, `*` for any)
fn cors_layer(client_origin: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if client_origin.split(',').any(|s| s.trim() == "*") {
        return base.allow_origin(Any);
    }

    let allowed_origins: Vec<header::HeaderValue> = client_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<header::HeaderValue>().ok())
        .collect();

    base.allow_origin(allowed_origins).allow_credentials(true)
}

// ============================================================================
// Health endpoint
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
    shops: usize,
    users: usize,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: uptime_secs(),
        shops: state.store.all_shops().len(),
        users: state.store.user_count(),
    })
}
