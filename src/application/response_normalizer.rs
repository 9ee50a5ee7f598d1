// Turns a raw upstream answer into either typed `data` or a GatewayError
use crate::application::gateway_error::{GatewayError, Operation};
use crate::application::upstream_transport::UpstreamResponse;
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: Option<String>,
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Apply the shared contract to one upstream answer:
///
/// 1. the declared content type must be JSON, else a protocol error carrying
///    the HTTP status;
/// 2. the body must parse as a GraphQL envelope;
/// 3. a non-empty `errors` array wins, and only its first message is kept;
/// 4. `data` is decoded into `D`. A missing or null `data` yields `None`.
pub fn normalize<D: DeserializeOwned>(
    operation: Operation,
    response: &UpstreamResponse,
) -> Result<Option<D>, GatewayError> {
    if !is_json_content_type(response.content_type.as_deref()) {
        tracing::warn!(
            operation = %operation,
            status = response.status,
            content_type = ?response.content_type,
            "Upstream returned non-JSON response: {}",
            body_preview(&response.body)
        );
        return Err(GatewayError::non_json(response.status));
    }

    let envelope: GraphQlEnvelope = serde_json::from_slice(&response.body).map_err(|e| {
        tracing::warn!(operation = %operation, status = response.status, "Unparseable upstream body: {}", e);
        GatewayError::malformed(response.status, e)
    })?;

    if let Some(first) = envelope.errors.as_ref().and_then(|errors| errors.first()) {
        let message = first
            .message
            .clone()
            .unwrap_or_else(|| "Upstream reported an error without a message".to_string());
        let discarded = envelope.errors.as_ref().map_or(0, |e| e.len() - 1);
        tracing::info!(operation = %operation, discarded, "Upstream rejected request: {}", message);
        return Err(GatewayError::UpstreamRejected { operation, message });
    }

    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(data) => serde_json::from_value(data).map(Some).map_err(|e| {
            tracing::warn!(operation = %operation, status = response.status, "Unexpected upstream data shape: {}", e);
            GatewayError::malformed(response.status, e)
        }),
    }
}

fn body_preview(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(500)]).into_owned()
}
