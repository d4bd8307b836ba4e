pub mod arbitration;
pub mod availability;
pub mod common;
pub mod filter;
pub mod manager;
pub mod offer;
pub mod testing;
pub mod trade;
pub mod user;
pub mod validation;
pub mod wallet;

pub use common::config::TradeManagerConfig;
pub use common::error::{TakeOfferError, ValidationError, WalletError};
pub use manager::{Collaborators, TradeManager};
