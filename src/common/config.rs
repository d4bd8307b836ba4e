use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{error::TakeOfferError, utils};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TradeManagerConfig {
    /// Seconds to wait for the maker's availability answer. Expiry counts as unavailable.
    pub availability_timeout_secs: u64,
    pub require_mediator: bool,
    pub base_currency_code: String,
    /// Codes accepted by the default currency registry on top of ISO 4217.
    pub extra_currency_codes: Vec<String>,
}

impl Default for TradeManagerConfig {
    fn default() -> Self {
        Self {
            availability_timeout_secs: 30,
            require_mediator: false,
            base_currency_code: "BTC".to_string(),
            extra_currency_codes: ["BTC", "BSQ", "XMR", "ETH", "LTC"]
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

impl TradeManagerConfig {
    pub fn availability_timeout(&self) -> Duration {
        Duration::from_secs(self.availability_timeout_secs)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TakeOfferError> {
        let json = utils::restore(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TakeOfferError> {
        if self.availability_timeout_secs == 0 {
            return Err(TakeOfferError::Simple(
                "Availability timeout must be at least 1 second".to_string(),
            ));
        }
        if self.base_currency_code.is_empty() {
            return Err(TakeOfferError::Simple(
                "No Base Currency Code defined".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), TakeOfferError> {
        let json = serde_json::to_string_pretty(self)?;
        utils::persist(json, path)
    }
}
