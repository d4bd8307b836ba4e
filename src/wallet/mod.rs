mod reservation;
mod wallet;

pub use reservation::FeeReservationCoordinator;
#[cfg(test)]
pub use wallet::MockTradeWallet;
pub use wallet::{FeeTransaction, FeeTxRequest, TradeWallet};
