// Transport port for the upstream GraphQL API
use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;

/// Body of a single GraphQL POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

impl GraphQlRequest {
    pub fn new<V: Serialize>(query: impl Into<String>, variables: &V) -> serde_json::Result<Self> {
        Ok(Self {
            query: query.into(),
            variables: serde_json::to_value(variables)?,
        })
    }

    /// Operation without variables; still sends `"variables": {}`.
    pub fn without_variables(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Raw upstream answer, before any interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// POST one operation. `authorization` is forwarded verbatim as the
    /// `Authorization` header when present.
    ///
    /// Errors only when no response was obtained at all (DNS, connect, I/O).
    async fn post(
        &self,
        request: &GraphQlRequest,
        authorization: Option<&str>,
    ) -> anyhow::Result<UpstreamResponse>;
}
