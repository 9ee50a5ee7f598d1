// GraphQL documents sent upstream and the variables each one takes
use crate::domain::measurement::{FrequencyType, MeasurementQuery};
use serde::Serialize;

pub const OBTAIN_TOKEN_MUTATION: &str = r#"
mutation krakenTokenAuthentication($email: String!, $password: String!) {
    obtainKrakenToken(input: {email: $email, password: $password}) {
        token
    }
}
"#;

pub const VIEWER_ACCOUNTS_QUERY: &str = r#"
query {
    viewer {
        accounts {
            number
            status
        }
    }
}
"#;

pub const ACCOUNT_TOPOLOGY_QUERY: &str = r#"
query getAccount($accountNumber: String!) {
    account(accountNumber: $accountNumber) {
        properties {
            id
            electricityMalos {
                id
                meter { id }
                agreements { id }
            }
        }
    }
}
"#;

// `${frequencyType}` is substituted with an enum literal; the filter argument
// is an input-object field, not a variable.
const MEASUREMENTS_QUERY_TEMPLATE: &str = r#"
query getSmartMeterUsage($accountNumber: String!, $propertyId: ID!, $date: Date!, $first: Int!) {
    account(accountNumber: $accountNumber) {
        property(id: $propertyId) {
            measurements(
                utilityFilters: {electricityFilters: {readingFrequencyType: ${frequencyType}, readingQuality: COMBINED}}
                startOn: $date
                first: $first
            ) {
                edges {
                    node {
                        __typename
                        ... on IntervalMeasurementType {
                            startAt
                            endAt
                            value
                            unit
                        }
                    }
                }
            }
        }
    }
}
"#;

pub fn measurements_query(frequency_type: &FrequencyType) -> String {
    MEASUREMENTS_QUERY_TEMPLATE.replace("${frequencyType}", frequency_type.as_str())
}

#[derive(Debug, Serialize)]
pub struct TokenVariables<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVariables<'a> {
    pub account_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementVariables<'a> {
    pub account_number: &'a str,
    pub property_id: &'a str,
    pub date: &'a str,
    pub first: Option<i64>,
}

impl<'a> From<&'a MeasurementQuery> for MeasurementVariables<'a> {
    fn from(query: &'a MeasurementQuery) -> Self {
        Self {
            account_number: &query.account_number,
            property_id: &query.property_id,
            date: &query.date,
            first: query.first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_measurements_query_substitutes_frequency() {
        let query = measurements_query(&FrequencyType::parse("HOUR_INTERVAL").unwrap());
        assert!(query.contains("readingFrequencyType: HOUR_INTERVAL, readingQuality: COMBINED"));
        assert!(!query.contains("${frequencyType}"));
    }

    #[test]
    fn test_measurement_variables_keep_null_first() {
        let query = MeasurementQuery {
            account_number: "A-1".into(),
            property_id: "P-1".into(),
            date: "2024-01-01".into(),
            frequency_type: FrequencyType::default(),
            first: None,
        };
        let value = serde_json::to_value(MeasurementVariables::from(&query)).unwrap();
        assert_eq!(
            value,
            json!({ "accountNumber": "A-1", "propertyId": "P-1", "date": "2024-01-01", "first": null })
        );
    }
}
