use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::availability::{AvailabilityProtocol, AvailabilityRequest, AvailabilityResult};
use crate::common::error::WalletError;
use crate::wallet::{FeeTransaction, FeeTxRequest, TradeWallet};

/// Maker that gives the same answer to every request, optionally after a delay.
pub struct ScriptedAvailability {
    delay: Option<Duration>,
    outcome: Result<AvailabilityResult, String>,
    requests: AtomicUsize,
}

impl ScriptedAvailability {
    pub fn always(outcome: Result<AvailabilityResult, String>) -> Self {
        Self {
            delay: None,
            outcome,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn delayed(delay: Duration, outcome: Result<AvailabilityResult, String>) -> Self {
        Self {
            delay: Some(delay),
            outcome,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvailabilityProtocol for ScriptedAvailability {
    async fn request_availability(
        &self,
        _request: &AvailabilityRequest,
    ) -> Result<AvailabilityResult, String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

/// Maker that lets only the first taker of each offer through.
pub struct FirstTakerWins {
    delay: Duration,
    taken: Mutex<HashSet<String>>,
}

impl FirstTakerWins {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            taken: Mutex::new(HashSet::new()),
        }
    }
}

#[async_trait]
impl AvailabilityProtocol for FirstTakerWins {
    async fn request_availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResult, String> {
        tokio::time::sleep(self.delay).await;
        let mut taken = self
            .taken
            .lock()
            .map_err(|_| "Maker state unavailable".to_string())?;
        if taken.insert(request.offer_id.clone()) {
            Ok(AvailabilityResult::Available)
        } else {
            Ok(AvailabilityResult::OfferTaken)
        }
    }
}

/// Wallet that reserves whatever is asked for, unless told to fail.
pub struct FakeTradeWallet {
    failure: Option<WalletError>,
    reservations: AtomicUsize,
    releases: AtomicUsize,
}

impl FakeTradeWallet {
    pub fn new() -> Self {
        Self {
            failure: None,
            reservations: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: WalletError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new()
        }
    }

    pub fn reservations(&self) -> usize {
        self.reservations.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl Default for FakeTradeWallet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeWallet for FakeTradeWallet {
    async fn create_taker_fee_tx(&self, request: FeeTxRequest) -> Result<FeeTransaction, WalletError> {
        if let Some(failure) = self.failure.clone() {
            return Err(failure);
        }
        self.reservations.fetch_add(1, Ordering::SeqCst);
        Ok(FeeTransaction {
            tx_id: Uuid::new_v4().to_string(),
            reserved: request.total_reserved(),
        })
    }

    async fn release_reservation(&self, _fee_tx: &FeeTransaction) -> Result<(), WalletError> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
