use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};
use uuid::Uuid;

use crate::{
    arbitration::ArbitrationSelection,
    common::types::*,
    validation::ValidTakeOffer,
    wallet::FeeTransaction,
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, IntoStaticStr, Serialize, Deserialize)]
pub enum TradeRole {
    BuyerAsTaker,
    SellerAsTaker,
}

impl TradeRole {
    /// The taker always trades in the direction opposite to the maker.
    pub fn for_offer_direction(direction: Direction) -> Self {
        match direction.mirror() {
            Direction::Buy => TradeRole::BuyerAsTaker,
            Direction::Sell => TradeRole::SellerAsTaker,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, IntoStaticStr, Serialize, Deserialize)]
pub enum TradeState {
    TakerFeeReserved,
}

/// Record handed to the trade lifecycle once an offer has been taken.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Trade {
    pub trade_uuid: Uuid,
    pub offer_id: OfferIdString,
    pub role: TradeRole,
    pub state: TradeState,
    pub currency_code: String,
    pub payment_method: PaymentMethod,
    pub maker_node_address: NodeAddress,
    pub amount: Coin,
    pub price: Price,
    pub tx_fee: Coin,
    pub taker_fee: Coin,
    pub is_currency_for_taker_fee_btc: bool,
    pub funds_needed_for_trade: Coin,
    pub payment_account_id: String,
    pub use_savings_wallet: bool,
    pub arbitrator_node_address: NodeAddress,
    pub mediator_node_address: Option<NodeAddress>,
    pub taker_fee_tx_id: String,
    pub error_message: Option<String>,
}

impl Trade {
    pub(crate) fn new(
        take: &ValidTakeOffer,
        selection: ArbitrationSelection,
        fee_tx: &FeeTransaction,
    ) -> Self {
        Self {
            trade_uuid: Uuid::new_v4(),
            offer_id: take.offer.id.clone(),
            role: TradeRole::for_offer_direction(take.offer.direction),
            state: TradeState::TakerFeeReserved,
            currency_code: take.currency_code.clone(),
            payment_method: take.offer.payment_method.clone(),
            maker_node_address: take.offer.maker_node_address.clone(),
            amount: take.amount,
            price: take.trade_price,
            tx_fee: take.tx_fee,
            taker_fee: take.taker_fee,
            is_currency_for_taker_fee_btc: take.is_currency_for_taker_fee_btc,
            funds_needed_for_trade: take.funds_needed_for_trade,
            payment_account_id: take.payment_account.id.clone(),
            use_savings_wallet: take.use_savings_wallet,
            arbitrator_node_address: selection.arbitrator,
            mediator_node_address: selection.mediator,
            taker_fee_tx_id: fee_tx.tx_id.clone(),
            error_message: None,
        }
    }
}
