use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use crate::{
    common::{error::TakeOfferError, types::OfferIdString},
    offer::{Offer, OfferState},
};

use super::{AvailabilityProtocol, AvailabilityRequest};

/// Held while a take on one offer is in progress. Other takes on the same
/// offer wait until it is dropped.
pub struct OfferGuard {
    offer_id: OfferIdString,
    _guard: OwnedMutexGuard<()>,
}

impl OfferGuard {
    pub fn offer_id(&self) -> &str {
        &self.offer_id
    }
}

pub struct OfferAvailabilityNegotiator {
    protocol: Arc<dyn AvailabilityProtocol>,
    timeout: Duration,
    in_flight: std::sync::Mutex<HashMap<OfferIdString, Arc<Mutex<()>>>>,
}

impl OfferAvailabilityNegotiator {
    pub fn new(protocol: Arc<dyn AvailabilityProtocol>, timeout: Duration) -> Self {
        Self {
            protocol,
            timeout,
            in_flight: std::sync::Mutex::new(HashMap::new()),
        }
    }

    pub async fn lock_offer(&self, offer_id: &str) -> OfferGuard {
        let lock = {
            let mut in_flight = match self.in_flight.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            // Entries nobody holds or waits on can go
            in_flight.retain(|_, lock| Arc::strong_count(lock) > 1);
            in_flight
                .entry(offer_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        if lock.try_lock().is_err() {
            debug!(
                "Negotiator w/ OfferID {} waiting on another take in progress",
                offer_id
            );
        }

        OfferGuard {
            offer_id: offer_id.to_string(),
            _guard: lock.lock_owned().await,
        }
    }

    pub fn in_flight_count(&self) -> usize {
        match self.in_flight.lock() {
            Ok(in_flight) => in_flight
                .values()
                .filter(|lock| Arc::strong_count(lock) > 1)
                .count(),
            Err(_) => 0,
        }
    }

    /// Asks the maker whether `offer` can still be taken and records the answer
    /// on the offer. Any answer but available becomes `TakeOfferError::Unavailable`.
    pub async fn check_availability(
        &self,
        offer: &Offer,
        request: &AvailabilityRequest,
    ) -> Result<(), TakeOfferError> {
        debug!(
            "Negotiator w/ OfferID {} requesting availability from maker {}",
            offer.id, offer.maker_node_address
        );

        let response =
            tokio::time::timeout(self.timeout, self.protocol.request_availability(request)).await;

        match response {
            Ok(Ok(result)) if result.is_available() => {
                offer.set_state(OfferState::Available).await;
                debug!("Negotiator w/ OfferID {} offer is available", offer.id);
                Ok(())
            }
            Ok(Ok(result)) => {
                offer.set_state(OfferState::NotAvailable).await;
                info!(
                    "Negotiator w/ OfferID {} offer not available - {}",
                    offer.id, result
                );
                Err(TakeOfferError::Unavailable(result.description().to_string()))
            }
            Ok(Err(reason)) => {
                offer.set_state(OfferState::MakerOffline).await;
                warn!(
                    "Negotiator w/ OfferID {} availability request failed - {}",
                    offer.id, reason
                );
                Err(TakeOfferError::Unavailable(reason))
            }
            Err(_) => {
                offer.set_state(OfferState::MakerOffline).await;
                warn!(
                    "Negotiator w/ OfferID {} availability request timed out after {:?}",
                    offer.id, self.timeout
                );
                Err(TakeOfferError::Unavailable(format!(
                    "Offer availability check timed out after {:?}. The maker might be offline",
                    self.timeout
                )))
            }
        }
    }
}
