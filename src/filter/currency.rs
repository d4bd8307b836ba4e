use std::collections::HashSet;
use std::str::FromStr;

use iso_currency::Currency;

use crate::common::config::TradeManagerConfig;

#[cfg_attr(test, mockall::automock)]
pub trait CurrencyRegistry: Send + Sync {
    fn is_known(&self, currency_code: &str) -> bool;
}

/// Accepts every ISO 4217 code plus a configured set of crypto currency codes.
pub struct DefaultCurrencyRegistry {
    extra_codes: HashSet<String>,
}

impl DefaultCurrencyRegistry {
    pub fn new(extra_codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            extra_codes: extra_codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &TradeManagerConfig) -> Self {
        let mut registry = Self::new(config.extra_currency_codes.iter().cloned());
        registry
            .extra_codes
            .insert(config.base_currency_code.clone());
        registry
    }
}

impl CurrencyRegistry for DefaultCurrencyRegistry {
    fn is_known(&self, currency_code: &str) -> bool {
        self.extra_codes.contains(currency_code) || Currency::from_str(currency_code).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_and_configured_codes_are_known() {
        let registry = DefaultCurrencyRegistry::from_config(&TradeManagerConfig::default());
        assert!(registry.is_known("USD"));
        assert!(registry.is_known("CNY"));
        assert!(registry.is_known("XMR"));
        assert!(registry.is_known("BTC"));
    }

    #[test]
    fn unknown_code_is_rejected() {
        let registry = DefaultCurrencyRegistry::new(Vec::<String>::new());
        assert!(!registry.is_known("nonExistent"));
        assert!(!registry.is_known(""));
    }
}
