use std::sync::Arc;

use tokio::sync::RwLock;

use crate::common::{error::TakeOfferError, types::*};

use super::{Offer, OfferState};

pub const TRADE_PROTOCOL_VERSION: u32 = 1;

pub struct OfferBuilder {
    id: Option<OfferIdString>,
    direction: Option<Direction>,
    base_currency_code: Option<String>,
    currency_code: Option<String>,
    payment_method: Option<PaymentMethod>,
    maker_node_address: Option<NodeAddress>,
    amount: Option<Coin>,
    min_amount: Option<Coin>,
    price: Option<Price>,
    arbitrator_node_addresses: Vec<NodeAddress>,
    mediator_node_addresses: Vec<NodeAddress>,
    protocol_version: Option<u32>,
    offer_fee_payment_tx_id: Option<String>,
    state: Option<OfferState>,
}

impl OfferBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            direction: None,
            base_currency_code: None,
            currency_code: None,
            payment_method: None,
            maker_node_address: None,
            amount: None,
            min_amount: None,
            price: None,
            arbitrator_node_addresses: Vec::new(),
            mediator_node_addresses: Vec::new(),
            protocol_version: None,
            offer_fee_payment_tx_id: None,
            state: None,
        }
    }

    pub fn id(&mut self, id: impl Into<OfferIdString>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = Some(direction);
        self
    }

    pub fn base_currency_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.base_currency_code = Some(code.into());
        self
    }

    pub fn currency_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.currency_code = Some(code.into());
        self
    }

    pub fn payment_method(&mut self, payment_method: PaymentMethod) -> &mut Self {
        self.payment_method = Some(payment_method);
        self
    }

    pub fn maker_node_address(&mut self, address: NodeAddress) -> &mut Self {
        self.maker_node_address = Some(address);
        self
    }

    pub fn amount(&mut self, amount: Coin) -> &mut Self {
        self.amount = Some(amount);
        self
    }

    pub fn min_amount(&mut self, min_amount: Coin) -> &mut Self {
        self.min_amount = Some(min_amount);
        self
    }

    pub fn price(&mut self, price: impl Into<Price>) -> &mut Self {
        self.price = Some(price.into());
        self
    }

    pub fn arbitrator(&mut self, address: NodeAddress) -> &mut Self {
        self.arbitrator_node_addresses.push(address);
        self
    }

    pub fn mediator(&mut self, address: NodeAddress) -> &mut Self {
        self.mediator_node_addresses.push(address);
        self
    }

    pub fn protocol_version(&mut self, version: u32) -> &mut Self {
        self.protocol_version = Some(version);
        self
    }

    pub fn offer_fee_payment_tx_id(&mut self, tx_id: impl Into<String>) -> &mut Self {
        self.offer_fee_payment_tx_id = Some(tx_id.into());
        self
    }

    pub fn state(&mut self, state: OfferState) -> &mut Self {
        self.state = Some(state);
        self
    }

    pub fn build(&self) -> Result<Offer, TakeOfferError> {
        let Some(id) = self.id.as_ref() else {
            return Err(TakeOfferError::Simple("No Offer ID defined".to_string()));
        };

        let Some(direction) = self.direction else {
            return Err(TakeOfferError::Simple("No Direction defined".to_string()));
        };

        let Some(payment_method) = self.payment_method.as_ref() else {
            return Err(TakeOfferError::Simple("No Payment Method defined".to_string()));
        };

        let Some(maker_node_address) = self.maker_node_address.as_ref() else {
            return Err(TakeOfferError::Simple(
                "No Maker Node Address defined".to_string(),
            ));
        };

        let Some(amount) = self.amount else {
            return Err(TakeOfferError::Simple("No Amount defined".to_string()));
        };

        let Some(price) = self.price else {
            return Err(TakeOfferError::Simple("No Price defined".to_string()));
        };

        let min_amount = self.min_amount.unwrap_or(amount);
        if min_amount > amount {
            return Err(TakeOfferError::Simple(format!(
                "Min Amount {} is higher than Amount {}",
                min_amount, amount
            )));
        }

        let base_currency_code = self
            .base_currency_code
            .clone()
            .unwrap_or_else(|| "BTC".to_string());

        Ok(Offer {
            id: id.to_owned(),
            direction,
            base_currency_code,
            currency_code: self.currency_code.clone(),
            payment_method: payment_method.to_owned(),
            maker_node_address: maker_node_address.to_owned(),
            amount,
            min_amount,
            price,
            arbitrator_node_addresses: self.arbitrator_node_addresses.clone(),
            mediator_node_addresses: self.mediator_node_addresses.clone(),
            protocol_version: self.protocol_version.unwrap_or(TRADE_PROTOCOL_VERSION),
            offer_fee_payment_tx_id: self.offer_fee_payment_tx_id.clone(),
            state: Arc::new(RwLock::new(self.state.unwrap_or(OfferState::Unknown))),
        })
    }
}

impl Default for OfferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
