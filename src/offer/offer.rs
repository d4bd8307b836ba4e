use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};
use tokio::sync::RwLock;

use crate::common::types::*;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, IntoStaticStr, Serialize, Deserialize)]
pub enum OfferState {
    Unknown,
    OfferFeePaid,
    Available,
    NotAvailable,
    Removed,
    MakerOffline,
}

/// Listing published by a maker. The offer book owns it; takers only read it and
/// update its availability state through the negotiator.
#[derive(Clone, Debug)]
pub struct Offer {
    pub id: OfferIdString,
    pub direction: Direction,
    pub base_currency_code: String,
    pub currency_code: Option<String>,
    pub payment_method: PaymentMethod,
    pub maker_node_address: NodeAddress,
    pub amount: Coin,
    pub min_amount: Coin,
    pub price: Price,
    pub arbitrator_node_addresses: Vec<NodeAddress>,
    pub mediator_node_addresses: Vec<NodeAddress>,
    pub protocol_version: u32,
    pub offer_fee_payment_tx_id: Option<String>,
    pub(super) state: Arc<RwLock<OfferState>>,
}

impl Offer {
    pub async fn state(&self) -> OfferState {
        *self.state.read().await
    }

    /// Clones of an offer share one state cell, so every holder sees the update.
    pub async fn set_state(&self, state: OfferState) {
        *self.state.write().await = state;
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::SomeTestOfferParams;

    use super::*;

    #[tokio::test]
    async fn cloned_offer_shares_availability_state() {
        let offer = SomeTestOfferParams::default_builder().build().unwrap();
        let clone = offer.clone();
        offer.set_state(OfferState::NotAvailable).await;
        assert_eq!(clone.state().await, OfferState::NotAvailable);
    }
}
