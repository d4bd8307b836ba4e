use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::{
    error::WalletError,
    types::{Coin, OfferIdString},
};

/// Funds the taker needs set aside before the trade protocol may start.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct FeeTxRequest {
    pub offer_id: OfferIdString,
    pub amount: Coin,
    pub tx_fee: Coin,
    pub taker_fee: Coin,
    pub is_currency_for_taker_fee_btc: bool,
    pub funds_needed_for_trade: Coin,
    pub use_savings_wallet: bool,
}

impl FeeTxRequest {
    pub fn total_reserved(&self) -> Coin {
        self.funds_needed_for_trade + self.tx_fee + self.taker_fee
    }
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct FeeTransaction {
    pub tx_id: String,
    pub reserved: Coin,
}

/// Wallet operations the take flow depends on. A successful
/// `create_taker_fee_tx` holds funds until `release_reservation` is called
/// or the trade protocol spends them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TradeWallet: Send + Sync {
    async fn create_taker_fee_tx(&self, request: FeeTxRequest) -> Result<FeeTransaction, WalletError>;
    async fn release_reservation(&self, fee_tx: &FeeTransaction) -> Result<(), WalletError>;
}
