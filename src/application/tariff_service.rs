// Tariff service - Serves the pricing table from deployment configuration
use crate::application::gateway_error::{ConfigurationError, GatewayError};
use crate::domain::tariff::TariffConfig;
use crate::infrastructure::config::{
    TariffSettings, TARIFF_HIGH_KEY, TARIFF_LOW_KEY, TARIFF_STANDARD_KEY,
};

#[derive(Clone)]
pub struct TariffService {
    settings: TariffSettings,
}

impl TariffService {
    pub fn new(settings: TariffSettings) -> Self {
        Self { settings }
    }

    /// Every missing key is reported at once, in low/standard/high order.
    pub fn get_tariff_config(&self) -> Result<TariffConfig, GatewayError> {
        let entries = [
            (TARIFF_LOW_KEY, self.settings.low_price.as_deref()),
            (TARIFF_STANDARD_KEY, self.settings.standard_price.as_deref()),
            (TARIFF_HIGH_KEY, self.settings.high_price.as_deref()),
        ];

        let missing: Vec<&'static str> = entries
            .iter()
            .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
            .map(|(key, _)| *key)
            .collect();
        if !missing.is_empty() {
            tracing::error!("Tariff configuration incomplete: {}", missing.join(", "));
            return Err(ConfigurationError::Missing(missing).into());
        }

        let mut prices = [0.0_f64; 3];
        for (slot, (key, value)) in prices.iter_mut().zip(entries) {
            let raw = value.unwrap_or_default().trim();
            *slot = raw.parse().map_err(|_| ConfigurationError::Invalid {
                key,
                value: raw.to_string(),
            })?;
        }

        Ok(TariffConfig::new(prices[0], prices[1], prices[2]))
    }
}
