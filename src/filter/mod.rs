mod currency;
mod filter;

#[cfg(test)]
pub use currency::MockCurrencyRegistry;
pub use currency::{CurrencyRegistry, DefaultCurrencyRegistry};
#[cfg(test)]
pub use filter::MockFilterManager;
pub use filter::{Filter, FilterManager};
