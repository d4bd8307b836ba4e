use std::sync::Arc;

use tracing::{debug, error, info};

use crate::{common::error::TakeOfferError, validation::ValidTakeOffer};

use super::{FeeTransaction, FeeTxRequest, TradeWallet};

pub struct FeeReservationCoordinator {
    wallet: Arc<dyn TradeWallet>,
}

impl FeeReservationCoordinator {
    pub fn new(wallet: Arc<dyn TradeWallet>) -> Self {
        Self { wallet }
    }

    pub async fn reserve(&self, take: &ValidTakeOffer) -> Result<FeeTransaction, TakeOfferError> {
        let request = FeeTxRequest {
            offer_id: take.offer.id.clone(),
            amount: take.amount,
            tx_fee: take.tx_fee,
            taker_fee: take.taker_fee,
            is_currency_for_taker_fee_btc: take.is_currency_for_taker_fee_btc,
            funds_needed_for_trade: take.funds_needed_for_trade,
            use_savings_wallet: take.use_savings_wallet,
        };
        debug!(
            "Reservation w/ OfferID {} requesting {} from wallet",
            request.offer_id,
            request.total_reserved()
        );

        match self.wallet.create_taker_fee_tx(request).await {
            Ok(fee_tx) => {
                info!(
                    "Reservation w/ OfferID {} reserved {} in fee tx {}",
                    take.offer.id, fee_tx.reserved, fee_tx.tx_id
                );
                Ok(fee_tx)
            }
            Err(err) => {
                info!(
                    "Reservation w/ OfferID {} failed - {}",
                    take.offer.id, err
                );
                Err(TakeOfferError::Reservation(err))
            }
        }
    }

    /// Gives reserved funds back to the wallet. Failure is only logged since
    /// the take is already being reported as failed.
    pub async fn release(&self, fee_tx: &FeeTransaction, offer_id: &str) {
        match self.wallet.release_reservation(fee_tx).await {
            Ok(()) => debug!(
                "Reservation w/ OfferID {} released fee tx {}",
                offer_id, fee_tx.tx_id
            ),
            Err(err) => error!(
                "Reservation w/ OfferID {} could not release fee tx {} - {}",
                offer_id, fee_tx.tx_id, err
            ),
        }
    }
}
