// Gateway operations - One use case per dashboard endpoint
use crate::application::gateway_error::{GatewayError, Operation, ValidationError};
use crate::application::graphql_documents::{
    measurements_query, AccountVariables, MeasurementVariables, TokenVariables,
    ACCOUNT_TOPOLOGY_QUERY, OBTAIN_TOKEN_MUTATION, VIEWER_ACCOUNTS_QUERY,
};
use crate::application::response_normalizer::normalize;
use crate::application::upstream_payloads::{
    accounts_or_empty, interval_readings, AccountData, MeasurementData, TokenData, ViewerData,
};
use crate::application::upstream_transport::{GraphQlRequest, UpstreamResponse, UpstreamTransport};
use crate::domain::account::{AccountSummary, AccountTopology};
use crate::domain::auth::{AuthToken, Credentials};
use crate::domain::measurement::{
    parse_leading_int, FrequencyType, MeasurementQuery, MeterReading, DEFAULT_FIRST,
};
use std::sync::Arc;

/// Query-string parameters of the measurements endpoint, as received.
#[derive(Debug, Clone, Default)]
pub struct MeasurementParams {
    pub account_number: Option<String>,
    pub property_id: Option<String>,
    pub date: Option<String>,
    pub frequency_type: Option<String>,
    pub first: Option<String>,
}

impl MeasurementParams {
    /// Empty strings count as absent, for both required and optional values.
    pub fn validate(&self) -> Result<MeasurementQuery, ValidationError> {
        let (Some(account_number), Some(property_id), Some(date)) = (
            non_empty(self.account_number.as_deref()),
            non_empty(self.property_id.as_deref()),
            non_empty(self.date.as_deref()),
        ) else {
            return Err(ValidationError::MissingMeasurementParameters);
        };

        let frequency_type = match non_empty(self.frequency_type.as_deref()) {
            Some(raw) => FrequencyType::parse(raw)
                .ok_or_else(|| ValidationError::InvalidFrequencyType(raw.to_string()))?,
            None => FrequencyType::default(),
        };

        let first = match non_empty(self.first.as_deref()) {
            Some(raw) => parse_leading_int(raw),
            None => Some(DEFAULT_FIRST),
        };

        Ok(MeasurementQuery {
            account_number: account_number.to_string(),
            property_id: property_id.to_string(),
            date: date.to_string(),
            frequency_type,
            first,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn require_authorization(authorization: Option<&str>) -> Result<&str, GatewayError> {
    non_empty(authorization).ok_or_else(|| ValidationError::MissingAuthorization.into())
}

/// Decode the login body. Anything but a JSON object is a validation failure.
pub fn parse_credentials(body: &[u8]) -> Result<Credentials, GatewayError> {
    serde_json::from_slice(body)
        .map_err(|e| ValidationError::InvalidBody(e.to_string()).into())
}

#[derive(Clone)]
pub struct GatewayService {
    transport: Arc<dyn UpstreamTransport>,
}

impl GatewayService {
    pub fn new(transport: Arc<dyn UpstreamTransport>) -> Self {
        Self { transport }
    }

    /// Exchange email/password for an upstream token.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, GatewayError> {
        let (email, password) = credentials
            .complete()
            .ok_or(ValidationError::MissingCredentials)?;

        let request = build_request(OBTAIN_TOKEN_MUTATION, &TokenVariables { email, password })?;
        let response = self.send(Operation::Authenticate, &request, None).await?;

        let status = response.status;
        normalize::<TokenData>(Operation::Authenticate, &response)?
            .and_then(TokenData::into_token)
            .map(AuthToken::new)
            .ok_or_else(|| GatewayError::malformed(status, "missing data.obtainKrakenToken.token"))
    }

    pub async fn list_accounts(
        &self,
        authorization: Option<&str>,
    ) -> Result<Vec<AccountSummary>, GatewayError> {
        let authorization = require_authorization(authorization)?;

        let request = GraphQlRequest::without_variables(VIEWER_ACCOUNTS_QUERY);
        let response = self
            .send(Operation::ListAccounts, &request, Some(authorization))
            .await?;

        let accounts =
            accounts_or_empty(normalize::<ViewerData>(Operation::ListAccounts, &response)?);
        tracing::debug!("Upstream returned {} accounts", accounts.len());
        Ok(accounts)
    }

    /// Topology of one account; `None` when upstream answers `account: null`.
    pub async fn get_account(
        &self,
        authorization: Option<&str>,
        account_number: Option<&str>,
    ) -> Result<Option<AccountTopology>, GatewayError> {
        let authorization = require_authorization(authorization)?;
        let account_number =
            non_empty(account_number).ok_or(ValidationError::MissingAccountNumber)?;

        let request = build_request(ACCOUNT_TOPOLOGY_QUERY, &AccountVariables { account_number })?;
        let response = self
            .send(Operation::GetAccount, &request, Some(authorization))
            .await?;

        Ok(normalize::<AccountData>(Operation::GetAccount, &response)?.and_then(|d| d.account))
    }

    pub async fn get_measurements(
        &self,
        authorization: Option<&str>,
        params: &MeasurementParams,
    ) -> Result<Vec<MeterReading>, GatewayError> {
        let authorization = require_authorization(authorization)?;
        let query = params.validate()?;

        if query.first.is_none() {
            tracing::debug!("Non-numeric `first` forwarded as null");
        }

        let request = build_request(
            measurements_query(&query.frequency_type),
            &MeasurementVariables::from(&query),
        )?;
        let response = self
            .send(Operation::GetMeasurements, &request, Some(authorization))
            .await?;

        let data: Option<MeasurementData> = normalize(Operation::GetMeasurements, &response)?;
        let readings = interval_readings(data);
        tracing::debug!(
            "Got {} interval readings for property {} on {}",
            readings.len(),
            query.property_id,
            query.date
        );
        Ok(readings)
    }

    async fn send(
        &self,
        operation: Operation,
        request: &GraphQlRequest,
        authorization: Option<&str>,
    ) -> Result<UpstreamResponse, GatewayError> {
        self.transport
            .post(request, authorization)
            .await
            .map_err(|e| {
                tracing::error!(operation = %operation, "Upstream call failed: {:#}", e);
                GatewayError::Internal(format!("{:#}", e))
            })
    }
}

fn build_request<V: serde::Serialize>(
    query: impl Into<String>,
    variables: &V,
) -> Result<GraphQlRequest, GatewayError> {
    GraphQlRequest::new(query, variables).map_err(|e| GatewayError::Internal(e.to_string()))
}
