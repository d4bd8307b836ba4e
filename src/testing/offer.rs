use crate::common::types::*;
use crate::offer::*;

use super::SomeTestParams;

pub struct SomeTestOfferParams {}

impl SomeTestOfferParams {
    pub fn offer_id() -> OfferIdString {
        "offerId".to_string()
    }

    pub fn amount() -> Coin {
        Coin::from_sat(1_000_000)
    }

    pub fn price() -> Price {
        Price::from(1)
    }

    pub fn default_builder() -> OfferBuilder {
        let mut builder = OfferBuilder::new();
        builder
            .id(Self::offer_id())
            .direction(Direction::Sell)
            .currency_code("USD")
            .payment_method(PaymentMethod::AliPay)
            .maker_node_address(SomeTestParams::maker_address())
            .amount(Self::amount())
            .price(Self::price())
            .arbitrator(SomeTestParams::arbitrator_address())
            .mediator(SomeTestParams::mediator_address())
            .offer_fee_payment_tx_id("abc")
            .state(OfferState::Available);
        builder
    }
}
