// Kraken GraphQL client - reqwest implementation of the upstream transport
use crate::application::upstream_transport::{GraphQlRequest, UpstreamResponse, UpstreamTransport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

#[derive(Debug, Clone)]
pub struct KrakenClient {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl KrakenClient {
    pub fn new(endpoint: String, user_agent: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            user_agent,
        }
    }

    fn build_request(
        &self,
        request: &GraphQlRequest,
        authorization: Option<&str>,
    ) -> Result<reqwest::Request> {
        let body = serde_json::to_vec(request).context("Failed to encode GraphQL request")?;

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .body(body);

        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        builder.build().context("Failed to build upstream request")
    }
}

#[async_trait]
impl UpstreamTransport for KrakenClient {
    async fn post(
        &self,
        request: &GraphQlRequest,
        authorization: Option<&str>,
    ) -> Result<UpstreamResponse> {
        let http_request = self.build_request(request, authorization)?;

        let response = self
            .client
            .execute(http_request)
            .await
            .context("Failed to send request to Kraken API")?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .context("Failed to read Kraken API response")?;

        tracing::debug!(status, content_type = ?content_type, bytes = body.len(), "Kraken API answered");

        Ok(UpstreamResponse::new(status, content_type.as_deref(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> KrakenClient {
        KrakenClient::new(
            "https://kraken.example/v1/graphql/".to_string(),
            "OctopusDashboard/1.0".to_string(),
        )
    }

    #[test]
    fn test_request_headers_with_authorization() {
        let request = GraphQlRequest::without_variables("query { viewer { accounts { number } } }");
        let built = client().build_request(&request, Some("jwt-token")).unwrap();

        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "https://kraken.example/v1/graphql/");
        let headers = built.headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[USER_AGENT], "OctopusDashboard/1.0");
        assert_eq!(headers[AUTHORIZATION], "jwt-token");
    }

    #[test]
    fn test_request_without_authorization() {
        let request = GraphQlRequest::without_variables("mutation { x }");
        let built = client().build_request(&request, None).unwrap();

        assert!(built.headers().get(AUTHORIZATION).is_none());
        let body: serde_json::Value =
            serde_json::from_slice(built.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "mutation { x }", "variables": {} }));
    }
}
