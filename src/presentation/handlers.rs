// HTTP request handlers for the standalone server
use crate::infrastructure::http_response::{into_axum, not_found_response};
use crate::presentation::app_state::AppState;
use crate::presentation::endpoints;
use crate::presentation::query_string::QueryString;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap},
    response::Response,
};
use std::sync::Arc;

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

// Never rejects; auth is checked before any parameter
fn query_string(raw: Option<String>) -> QueryString {
    QueryString::parse(raw.as_deref().unwrap_or_default())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn authenticate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    into_axum(endpoints::authenticate(&state, &body).await)
}

pub async fn list_accounts(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    into_axum(endpoints::list_accounts(&state, authorization(&headers)).await)
}

pub async fn get_account(
    RawQuery(raw): RawQuery,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let query = query_string(raw);
    into_axum(endpoints::get_account(&state, authorization(&headers), query.account_number()).await)
}

pub async fn get_measurements(
    RawQuery(raw): RawQuery,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let params = query_string(raw).measurement_params();
    into_axum(endpoints::get_measurements(&state, authorization(&headers), &params).await)
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Response {
    into_axum(endpoints::get_config(&state))
}

/// Unknown `/api/*` path or wrong method on a known one
pub async fn api_not_found() -> Response {
    into_axum(not_found_response())
}
