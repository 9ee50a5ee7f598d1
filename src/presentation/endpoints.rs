// Endpoint bodies shared by the axum server and the edge adapter
use crate::application::gateway_error::GatewayError;
use crate::application::gateway_service::{parse_credentials, MeasurementParams};
use crate::domain::account::AccountSummary;
use crate::domain::measurement::MeterReading;
use crate::domain::tariff::TariffConfig;
use crate::infrastructure::http_response::{error_response, json_response};
use crate::presentation::app_state::AppState;
use axum::http::{Response, StatusCode};
use bytes::Bytes;
use serde::Serialize;

#[derive(Serialize)]
struct AccountsBody {
    accounts: Vec<AccountSummary>,
}

#[derive(Serialize)]
struct ReadingsBody {
    readings: Vec<MeterReading>,
}

#[derive(Serialize)]
struct TariffBody {
    tariff: TariffConfig,
}

fn respond<T: Serialize>(result: Result<T, GatewayError>) -> Response<Bytes> {
    match result {
        Ok(body) => json_response(StatusCode::OK, &body),
        Err(err) => error_response(&err),
    }
}

/// POST /api/auth
pub async fn authenticate(state: &AppState, body: &[u8]) -> Response<Bytes> {
    let result = match parse_credentials(body) {
        Ok(credentials) => state.gateway_service.authenticate(&credentials).await,
        Err(err) => Err(err),
    };
    respond(result)
}

/// GET /api/accounts
pub async fn list_accounts(state: &AppState, authorization: Option<&str>) -> Response<Bytes> {
    let result = state.gateway_service.list_accounts(authorization).await;
    respond(result.map(|accounts| AccountsBody { accounts }))
}

/// GET /api/account
pub async fn get_account(
    state: &AppState,
    authorization: Option<&str>,
    account_number: Option<&str>,
) -> Response<Bytes> {
    respond(
        state
            .gateway_service
            .get_account(authorization, account_number)
            .await,
    )
}

/// GET /api/measurements
pub async fn get_measurements(
    state: &AppState,
    authorization: Option<&str>,
    params: &MeasurementParams,
) -> Response<Bytes> {
    let result = state
        .gateway_service
        .get_measurements(authorization, params)
        .await;
    respond(result.map(|readings| ReadingsBody { readings }))
}

/// GET /api/config
pub fn get_config(state: &AppState) -> Response<Bytes> {
    let result = state.tariff_service.get_tariff_config();
    respond(result.map(|tariff| TariffBody { tariff }))
}
