// Shapes of the `data` sub-trees each operation reads
use crate::domain::account::{AccountSummary, AccountTopology};
use crate::domain::measurement::MeterReading;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub obtain_kraken_token: Option<TokenPayload>,
}

#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub token: Option<String>,
}

impl TokenData {
    pub fn into_token(self) -> Option<String> {
        self.obtain_kraken_token.and_then(|payload| payload.token)
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub accounts: Option<Vec<AccountSummary>>,
}

/// Absent `data`, `viewer` or `accounts` all mean "no accounts".
pub fn accounts_or_empty(data: Option<ViewerData>) -> Vec<AccountSummary> {
    data.and_then(|d| d.viewer)
        .and_then(|v| v.accounts)
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub struct AccountData {
    pub account: Option<AccountTopology>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementData {
    pub account: Option<MeasurementAccount>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementAccount {
    pub property: Option<MeasurementProperty>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementProperty {
    pub measurements: Option<MeasurementConnection>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementConnection {
    pub edges: Option<Vec<MeasurementEdge>>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementEdge {
    pub node: Option<MeasurementNode>,
}

/// `measurements` is a union; only the interval variant carries readings.
#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum MeasurementNode {
    #[serde(rename = "IntervalMeasurementType")]
    Interval(MeterReading),
    #[serde(other)]
    Other,
}

/// Interval readings in upstream order. Any absent level of the path yields
/// an empty list; non-interval and null nodes are skipped.
pub fn interval_readings(data: Option<MeasurementData>) -> Vec<MeterReading> {
    let edges = data
        .and_then(|d| d.account)
        .and_then(|a| a.property)
        .and_then(|p| p.measurements)
        .and_then(|m| m.edges)
        .unwrap_or_default();

    edges
        .into_iter()
        .filter_map(|edge| match edge.node {
            Some(MeasurementNode::Interval(reading)) => Some(reading),
            Some(MeasurementNode::Other) | None => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::measurement::ReadingValue;
    use serde_json::json;

    #[test]
    fn test_accounts_default_to_empty() {
        assert!(accounts_or_empty(None).is_empty());

        let no_viewer: ViewerData = serde_json::from_value(json!({ "viewer": null })).unwrap();
        assert!(accounts_or_empty(Some(no_viewer)).is_empty());

        let no_accounts: ViewerData = serde_json::from_value(json!({ "viewer": {} })).unwrap();
        assert!(accounts_or_empty(Some(no_accounts)).is_empty());
    }

    #[test]
    fn test_interval_filter_keeps_order() {
        let data: MeasurementData = serde_json::from_value(json!({
            "account": { "property": { "measurements": { "edges": [
                { "node": { "__typename": "IntervalMeasurementType",
                            "startAt": "2024-01-01T00:00:00Z", "endAt": "2024-01-01T00:15:00Z",
                            "value": "0.1", "unit": "kWh" } },
                { "node": { "__typename": "CumulativeMeasurementType" } },
                { "node": null },
                { "node": { "__typename": "IntervalMeasurementType",
                            "startAt": "2024-01-01T00:15:00Z", "endAt": "2024-01-01T00:30:00Z",
                            "value": 0.2, "unit": "kWh" } }
            ] } } }
        }))
        .unwrap();

        let readings = interval_readings(Some(data));
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].start_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(readings[0].value, Some(ReadingValue::Decimal("0.1".into())));
        assert_eq!(readings[1].start_at.as_deref(), Some("2024-01-01T00:15:00Z"));
        assert_eq!(readings[1].value, Some(ReadingValue::Number(0.2)));
    }

    #[test]
    fn test_missing_edges_is_empty() {
        let data: MeasurementData =
            serde_json::from_value(json!({ "account": { "property": { "measurements": {} } } })).unwrap();
        assert!(interval_readings(Some(data)).is_empty());

        let data: MeasurementData = serde_json::from_value(json!({ "account": null })).unwrap();
        assert!(interval_readings(Some(data)).is_empty());
    }

    #[test]
    fn test_token_path() {
        let data: TokenData =
            serde_json::from_value(json!({ "obtainKrakenToken": { "token": "abc" } })).unwrap();
        assert_eq!(data.into_token(), Some("abc".to_string()));

        let data: TokenData = serde_json::from_value(json!({ "obtainKrakenToken": null })).unwrap();
        assert_eq!(data.into_token(), None);
    }
}
