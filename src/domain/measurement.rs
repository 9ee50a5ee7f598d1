// Smart-meter measurement domain models
use serde::{Deserialize, Serialize};

pub const DEFAULT_FREQUENCY_TYPE: &str = "RAW_INTERVAL";
pub const DEFAULT_FIRST: i64 = 96;

/// One interval reading. Timestamps and value are carried exactly as upstream
/// formats them, nulls included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReading {
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub value: Option<ReadingValue>,
    pub unit: Option<String>,
}

/// Upstream sends decimals either as JSON numbers or as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Number(f64),
    Decimal(String),
}

/// Reading aggregation level, e.g. `RAW_INTERVAL` or `HOUR_INTERVAL`.
///
/// The value ends up as an enum literal inside the GraphQL document, so it is
/// restricted to the GraphQL name grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyType(String);

impl FrequencyType {
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let head_ok = chars
            .next()
            .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
        let tail_ok = chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
        (head_ok && tail_ok).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FrequencyType {
    fn default() -> Self {
        Self(DEFAULT_FREQUENCY_TYPE.to_string())
    }
}

/// Validated parameters of a measurements lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementQuery {
    pub account_number: String,
    pub property_id: String,
    pub date: String,
    pub frequency_type: FrequencyType,
    /// `None` when the caller passed something that is not a number; upstream
    /// rejects the resulting null.
    pub first: Option<i64>,
}

/// Lenient integer parse: optional sign and leading digits, rest ignored.
/// `"12abc"` is 12, `"1.5"` is 1, `"abc"` is `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("96"), Some(96));
        assert_eq!(parse_leading_int("  48"), Some(48));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_frequency_type_grammar() {
        assert_eq!(FrequencyType::parse("HOUR_INTERVAL").unwrap().as_str(), "HOUR_INTERVAL");
        assert!(FrequencyType::parse("_X1").is_some());
        assert!(FrequencyType::parse("1DAY").is_none());
        assert!(FrequencyType::parse("RAW_INTERVAL} }").is_none());
        assert!(FrequencyType::parse("").is_none());
        assert_eq!(FrequencyType::default().as_str(), "RAW_INTERVAL");
    }

    #[test]
    fn test_reading_value_passes_through() {
        let numeric: MeterReading = serde_json::from_value(json!({
            "startAt": "2024-01-01T00:00:00+01:00",
            "endAt": "2024-01-01T00:15:00+01:00",
            "value": 0.125,
            "unit": "kWh"
        }))
        .unwrap();
        assert_eq!(numeric.value, Some(ReadingValue::Number(0.125)));

        let decimal = json!({
            "startAt": "2024-01-01T00:00:00Z",
            "endAt": "2024-01-01T00:15:00Z",
            "value": "0.12500",
            "unit": "kWh"
        });
        let reading: MeterReading = serde_json::from_value(decimal.clone()).unwrap();
        assert_eq!(serde_json::to_value(&reading).unwrap(), decimal);
    }

    #[test]
    fn test_null_fields_survive() {
        let upstream = json!({
            "startAt": "2024-01-01T00:00:00Z",
            "endAt": "2024-01-01T00:15:00Z",
            "value": null,
            "unit": null
        });
        let reading: MeterReading = serde_json::from_value(upstream.clone()).unwrap();

        assert_eq!(reading.value, None);
        assert_eq!(serde_json::to_value(&reading).unwrap(), upstream);
    }
}
