// Account domain models, projected from the upstream account graph
use crate::domain::nullable::null_as_empty;
use serde::{Deserialize, Serialize};

// Scalars are nullable in the upstream schema and are passed on as-is.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub number: Option<String>,
    pub status: Option<String>,
}

impl AccountSummary {
    pub fn new(number: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            status: Some(status.into()),
        }
    }
}

/// Properties of an account and the electricity supply points on each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTopology {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Option<String>,
    // Always serialized, so a property without supply points shows `[]`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub electricity_malos: Vec<ElectricityMalo>,
}

/// Electricity market location (supply point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityMalo {
    pub id: Option<String>,
    #[serde(default)]
    pub meter: Option<Meter>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub agreements: Vec<Agreement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agreement {
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_supply_points_are_kept() {
        let topology: AccountTopology = serde_json::from_value(json!({
            "properties": [{ "id": "P-1" }]
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&topology).unwrap(),
            json!({ "properties": [{ "id": "P-1", "electricityMalos": [] }] })
        );
    }

    #[test]
    fn test_null_meter_stays_null() {
        let upstream = json!({
            "properties": [{
                "id": "P-1",
                "electricityMalos": [{ "id": "M-1", "meter": null, "agreements": [{ "id": "AG-1" }] }]
            }]
        });
        let topology: AccountTopology = serde_json::from_value(upstream.clone()).unwrap();

        assert_eq!(serde_json::to_value(&topology).unwrap(), upstream);
    }

    #[test]
    fn test_null_lists_become_empty() {
        let topology: AccountTopology = serde_json::from_value(json!({
            "properties": [
                { "id": "P-1", "electricityMalos": null },
                { "id": "P-2", "electricityMalos": [{ "id": "M-1", "meter": { "id": null }, "agreements": null }] }
            ]
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&topology).unwrap(),
            json!({ "properties": [
                { "id": "P-1", "electricityMalos": [] },
                { "id": "P-2", "electricityMalos": [{ "id": "M-1", "meter": { "id": null }, "agreements": [] }] }
            ] })
        );

        let topology: AccountTopology =
            serde_json::from_value(json!({ "properties": null })).unwrap();
        assert!(topology.properties.is_empty());
    }

    #[test]
    fn test_null_scalars_survive() {
        let upstream = json!({ "properties": [{ "id": null, "electricityMalos": [] }] });
        let topology: AccountTopology = serde_json::from_value(upstream.clone()).unwrap();
        assert_eq!(serde_json::to_value(&topology).unwrap(), upstream);

        let summary: AccountSummary =
            serde_json::from_value(json!({ "number": "A-1", "status": null })).unwrap();
        assert_eq!(serde_json::to_value(&summary).unwrap(), json!({ "number": "A-1", "status": null }));
    }
}
