use crate::{
    common::types::{Coin, Price},
    offer::Offer,
};

use super::handler::{ErrorMessageHandler, HandlerSlot, TakeOfferHandlers, TradeResultHandler};

/// Intent to take an existing offer. Every field is checked by the validator
/// before anything else happens, so all of them may be left unset here.
#[derive(Clone)]
pub struct TakeOfferRequest {
    pub amount: Option<Coin>,
    pub tx_fee: Option<Coin>,
    pub taker_fee: Option<Coin>,
    pub is_currency_for_taker_fee_btc: bool,
    pub trade_price: Price,
    pub funds_needed_for_trade: Coin,
    pub offer: Option<Offer>,
    pub payment_account_id: Option<String>,
    pub use_savings_wallet: bool,
    handlers: HandlerSlot,
}

impl TakeOfferRequest {
    pub fn new(
        result_handler: Option<TradeResultHandler>,
        error_handler: Option<ErrorMessageHandler>,
    ) -> Self {
        Self {
            amount: None,
            tx_fee: None,
            taker_fee: None,
            is_currency_for_taker_fee_btc: true,
            trade_price: Price::default(),
            funds_needed_for_trade: Coin::ZERO,
            offer: None,
            payment_account_id: None,
            use_savings_wallet: false,
            handlers: HandlerSlot::new(result_handler, error_handler),
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.handlers.is_claimed()
    }

    pub(crate) fn claim_handlers(&self) -> Option<TakeOfferHandlers> {
        self.handlers.claim()
    }

    pub(crate) fn offer_id(&self) -> &str {
        self.offer.as_ref().map(|o| o.id.as_str()).unwrap_or("N/A")
    }
}
