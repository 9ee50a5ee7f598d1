// Query-string decoding shared by the server and edge adapters
use crate::application::gateway_service::MeasurementParams;
use std::collections::HashMap;

/// Form-urlencoded query string; the first occurrence of a key wins and
/// undecodable pairs are skipped. Never fails, so nothing here can pre-empt
/// the authorization check.
#[derive(Debug, Default)]
pub struct QueryString(HashMap<String, String>);

impl QueryString {
    pub fn parse(raw: &str) -> Self {
        let mut params = HashMap::new();
        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
                continue;
            };
            params.entry(key).or_insert(value);
        }
        Self(params)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn account_number(&self) -> Option<&str> {
        self.get("accountNumber")
    }

    pub fn measurement_params(&self) -> MeasurementParams {
        let owned = |name: &str| self.get(name).map(str::to_string);
        MeasurementParams {
            account_number: owned("accountNumber"),
            property_id: owned("propertyId"),
            date: owned("date"),
            frequency_type: owned("frequencyType"),
            first: owned("first"),
        }
    }
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let query = QueryString::parse("accountNumber=A-1&date=2024-01-01&accountNumber=A-2&q=a+b%2Fc&flag");
        assert_eq!(query.account_number(), Some("A-1"));
        assert_eq!(query.get("date"), Some("2024-01-01"));
        assert_eq!(query.get("q"), Some("a b/c"));
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn test_undecodable_pair_is_skipped() {
        let query = QueryString::parse("date=%FF%FE&date=2024-01-01");
        assert_eq!(query.get("date"), Some("2024-01-01"));
    }

    #[test]
    fn test_measurement_params() {
        let params = QueryString::parse(
            "accountNumber=A-1&propertyId=P-1&propertyId=P-2&date=2024-01-01&frequencyType=HOUR_INTERVAL&first=4",
        )
        .measurement_params();

        assert_eq!(params.account_number.as_deref(), Some("A-1"));
        assert_eq!(params.property_id.as_deref(), Some("P-1"));
        assert_eq!(params.date.as_deref(), Some("2024-01-01"));
        assert_eq!(params.frequency_type.as_deref(), Some("HOUR_INTERVAL"));
        assert_eq!(params.first.as_deref(), Some("4"));

        let empty = QueryString::parse("").measurement_params();
        assert!(empty.account_number.is_none() && empty.first.is_none());
    }
}
