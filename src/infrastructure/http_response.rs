// HTTP response utilities for JSON API answers
use crate::application::gateway_error::GatewayError;
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};
use bytes::Bytes;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Serialize `body` into a JSON response with the headers every `/api/*`
/// answer carries. API answers must never be cached by intermediaries.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response<Bytes> {
    match serde_json::to_vec(body) {
        Ok(bytes) => build(status, Bytes::from(bytes)),
        Err(e) => {
            tracing::error!("JSON serialization error: {}", e);
            let fallback = serde_json::to_vec(&ErrorBody {
                error: "Response serialization failed",
            })
            .unwrap_or_default();
            build(StatusCode::INTERNAL_SERVER_ERROR, Bytes::from(fallback))
        }
    }
}

/// `{ "error": "<message>" }` with the status the error maps to.
pub fn error_response(err: &GatewayError) -> Response<Bytes> {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), "Request failed: {}", err);
    } else {
        tracing::debug!(status = status.as_u16(), "Request rejected: {}", err);
    }

    let message = err.to_string();
    json_response(status, &ErrorBody { error: &message })
}

pub fn not_found_response() -> Response<Bytes> {
    json_response(StatusCode::NOT_FOUND, &ErrorBody { error: "Not found" })
}

fn build(status: StatusCode, bytes: Bytes) -> Response<Bytes> {
    let mut response = Response::new(bytes);
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

/// Adapt a buffered response to an axum response.
pub fn into_axum(response: Response<Bytes>) -> Response<Body> {
    response.map(Body::from)
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        into_axum(error_response(&self))
    }
}
