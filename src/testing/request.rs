use crate::availability::AvailabilityRequest;
use crate::common::types::*;
use crate::offer::Offer;
use crate::trade::*;

use super::{SomeTestOfferParams, SomeTestParams};

pub struct SomeTestRequestParams {}

impl SomeTestRequestParams {
    pub fn amount() -> Coin {
        SomeTestOfferParams::amount()
    }

    pub fn offer() -> Offer {
        match SomeTestOfferParams::default_builder().build() {
            Ok(offer) => offer,
            Err(err) => panic!("Test offer failed to build - {}", err),
        }
    }

    /// Sets every input of `request` to a value the validator accepts.
    pub fn fill_valid(request: &mut TakeOfferRequest) {
        request.amount = Some(Self::amount());
        request.tx_fee = Some(Coin::SATOSHI);
        request.taker_fee = Some(Coin::SATOSHI);
        request.is_currency_for_taker_fee_btc = true;
        request.trade_price = Price::from(1);
        request.funds_needed_for_trade = Coin::ZERO;
        request.offer = Some(Self::offer());
        request.payment_account_id = Some(SomeTestParams::payment_account_id());
        request.use_savings_wallet = false;
    }

    pub fn request_with_handlers(result_handler: bool, error_handler: bool) -> TakeOfferRequest {
        let result_handler: Option<TradeResultHandler> = if result_handler {
            Some(Box::new(|_| {}))
        } else {
            None
        };
        let error_handler: Option<ErrorMessageHandler> = if error_handler {
            Some(Box::new(|_| {}))
        } else {
            None
        };
        let mut request = TakeOfferRequest::new(result_handler, error_handler);
        Self::fill_valid(&mut request);
        request
    }

    pub fn valid_request() -> TakeOfferRequest {
        Self::request_with_handlers(true, true)
    }

    pub fn request_with_completion() -> (TakeOfferRequest, TakeOfferCompletion) {
        let (result_handler, error_handler, completion) = completion_channel();
        let mut request = TakeOfferRequest::new(Some(result_handler), Some(error_handler));
        Self::fill_valid(&mut request);
        (request, completion)
    }

    pub fn availability_request(offer: &Offer) -> AvailabilityRequest {
        AvailabilityRequest {
            offer_id: offer.id.clone(),
            maker_node_address: offer.maker_node_address.clone(),
            taker_account_id: SomeTestParams::account_id(),
            trade_price: offer.price,
            protocol_version: offer.protocol_version,
        }
    }
}
