use axum::extract::State;
use axum::http::Method;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use hsnp_core::catalog;
use hsnp_core::model::metric::MetricRecord;
use hsnp_core::presenter::MetricsView;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::pages;

#[derive(Clone)]
pub struct WebState {
    pub started_at: DateTime<Utc>,
}

impl WebState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

impl Default for WebState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub started_at: String,
}

pub fn router(state: WebState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);
    Router::new()
        .route("/", get(dashboard_page))
        .route("/tenants", get(tenants_page))
        .route("/templates", get(templates_page))
        .route("/api/demo-metrics", get(demo_metrics))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
                .on_response(tower_http::trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn demo_metrics() -> Json<&'static [MetricRecord]> {
    let records = catalog::demo_metrics();
    tracing::debug!(count = records.len(), "demo metrics served");
    Json(records)
}

// Initial render always uses the fallback; the page's loader swaps in
// fetched records client side.
async fn dashboard_page() -> Html<String> {
    Html(pages::render_dashboard(MetricsView::Default.records()))
}

async fn tenants_page() -> Html<String> {
    Html(pages::render_tenants(catalog::tenants()))
}

async fn templates_page() -> Html<String> {
    Html(pages::render_templates(catalog::templates()))
}

async fn healthz(State(state): State<WebState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state
            .started_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
