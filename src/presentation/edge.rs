// Edge adapter - buffered `http` request in, buffered response out
//
// For function-style hosts that hand over one complete request and expect one
// complete response. Routing, query parsing and header lookup are done here;
// everything else is the same endpoint code the server runs.
use crate::infrastructure::http_response::not_found_response;
use crate::presentation::app_state::AppState;
use crate::presentation::endpoints;
use crate::presentation::query_string::QueryString;
use axum::http::{header, Method, Request, Response};
use bytes::Bytes;

pub async fn handle(state: &AppState, request: Request<Bytes>) -> Response<Bytes> {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let query = QueryString::parse(request.uri().query().unwrap_or_default());

    match (request.method(), request.uri().path()) {
        (&Method::POST, "/api/auth") => endpoints::authenticate(state, request.body()).await,
        (&Method::GET, "/api/accounts") => endpoints::list_accounts(state, authorization).await,
        (&Method::GET, "/api/account") => {
            endpoints::get_account(state, authorization, query.account_number()).await
        }
        (&Method::GET, "/api/measurements") => {
            endpoints::get_measurements(state, authorization, &query.measurement_params()).await
        }
        (&Method::GET, "/api/config") => endpoints::get_config(state),
        (method, path) => {
            tracing::debug!(%method, path, "No edge route");
            not_found_response()
        }
    }
}
