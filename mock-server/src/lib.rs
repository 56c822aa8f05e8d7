//! Mock HTTP backend for the admin panel frontend.
//!
//! # Design
//! Fabricates the handful of API responses the admin panel needs during
//! frontend development: a paginated demo table, the route-table menu, and a
//! status demo that exercises the 403/401 envelopes. Response shaping lives
//! in `envelope-core`; this crate owns only the transport (axum) and the
//! simulated network latency. Routes sit under `/api`, the prefix the
//! frontend dev-server proxy forwards here.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use envelope_core::{forbidden, page_ok, unauthorized, PageData, PageParam, ResponseEnvelope};

pub mod config;
pub mod data;

use config::ServerConfig;
use data::{menu_routes, seed_table, RouteRecord, TableItem};

/// Read-only fixture state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    table: Arc<Vec<TableItem>>,
    delay_ms: u64,
}

pub fn app(config: &ServerConfig) -> Router {
    let state = AppState {
        table: Arc::new(seed_table()),
        delay_ms: config.delay_ms,
    };
    Router::new()
        .route("/api/table/list", get(table_list))
        .route("/api/menu/all", get(menu_all))
        .route("/api/status", get(status_demo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(&config)).await
}

/// Suspend the calling task for `ms` milliseconds to fake network latency.
///
/// Cooperative and non-cancellable; resumes no earlier than `ms` after the
/// call.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableQuery {
    page: Option<PageParam>,
    page_size: Option<PageParam>,
}

async fn table_list(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Json<ResponseEnvelope<PageData<TableItem>>> {
    delay(state.delay_ms).await;
    let page = query.page.unwrap_or(PageParam::Num(1));
    let page_size = query.page_size.unwrap_or(PageParam::Num(10));
    Json(page_ok(&page, &page_size, &state.table))
}

async fn menu_all(State(state): State<AppState>) -> Json<ResponseEnvelope<Vec<RouteRecord>>> {
    delay(state.delay_ms).await;
    Json(ResponseEnvelope::ok(menu_routes()))
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: Option<u16>,
    msg: Option<String>,
}

/// Demo endpoint for the error-shaped envelopes: `?status=403` and
/// `?status=401` answer with the matching envelope, anything else succeeds.
async fn status_demo(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> (StatusCode, Json<ResponseEnvelope<()>>) {
    delay(state.delay_ms).await;
    let (status, envelope) = match query.status {
        Some(403) => forbidden(query.msg.as_deref()),
        Some(401) => unauthorized(),
        _ => (200, ResponseEnvelope::ok(())),
    };
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delay_resumes_no_earlier_than_requested() {
        let start = tokio::time::Instant::now();
        delay(30).await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn table_query_accepts_string_and_numeric_params() {
        let query: TableQuery = serde_json::from_str(r#"{"page":"2","pageSize":5}"#).unwrap();
        assert_eq!(query.page.unwrap().coerce(), Some(2));
        assert_eq!(query.page_size.unwrap().coerce(), Some(5));
    }

    #[test]
    fn table_query_params_are_optional() {
        let query: TableQuery = serde_json::from_str("{}").unwrap();
        assert!(query.page.is_none());
        assert!(query.page_size.is_none());
    }
}
