// Tariff pricing table
use serde::Serialize;

/// Unit prices per tariff band, taken from deployment configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TariffConfig {
    pub low: f64,
    pub standard: f64,
    pub high: f64,
}

impl TariffConfig {
    pub fn new(low: f64, standard: f64, high: f64) -> Self {
        Self { low, standard, high }
    }
}
