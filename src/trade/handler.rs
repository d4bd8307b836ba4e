use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::common::error::TakeOfferError;

use super::Trade;

pub type TradeResultHandler = Box<dyn FnOnce(Trade) + Send + 'static>;
pub type ErrorMessageHandler = Box<dyn FnOnce(TakeOfferError) + Send + 'static>;

pub(crate) struct TakeOfferHandlers {
    pub(crate) result: Option<TradeResultHandler>,
    pub(crate) error: Option<ErrorMessageHandler>,
}

impl TakeOfferHandlers {
    pub(crate) fn has_result_handler(&self) -> bool {
        self.result.is_some()
    }

    pub(crate) fn has_error_handler(&self) -> bool {
        self.error.is_some()
    }
}

/// Handler slot shared by every clone of a request. Claiming empties it, so a
/// request can lead to at most one outcome.
#[derive(Clone)]
pub(crate) struct HandlerSlot(Arc<Mutex<Option<TakeOfferHandlers>>>);

impl HandlerSlot {
    pub(crate) fn new(
        result: Option<TradeResultHandler>,
        error: Option<ErrorMessageHandler>,
    ) -> Self {
        Self(Arc::new(Mutex::new(Some(TakeOfferHandlers { result, error }))))
    }

    pub(crate) fn claim(&self) -> Option<TakeOfferHandlers> {
        match self.0.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    pub(crate) fn is_claimed(&self) -> bool {
        match self.0.lock() {
            Ok(slot) => slot.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

/// Receiving end of a handler pair made by [`completion_channel`].
pub struct TakeOfferCompletion {
    rx: oneshot::Receiver<Result<Trade, TakeOfferError>>,
}

impl TakeOfferCompletion {
    pub async fn outcome(self) -> Result<Trade, TakeOfferError> {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(TakeOfferError::Simple(
                "Take offer handlers dropped without an outcome".to_string(),
            )),
        }
    }
}

/// Handler pair that resolves a single oneshot, whichever of the two fires.
pub fn completion_channel() -> (TradeResultHandler, ErrorMessageHandler, TakeOfferCompletion) {
    let (tx, rx) = oneshot::channel::<Result<Trade, TakeOfferError>>();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let error_tx = tx.clone();

    let result_handler: TradeResultHandler = Box::new(move |trade| {
        if let Some(tx) = tx.lock().ok().and_then(|mut tx| tx.take()) {
            let _ = tx.send(Ok(trade));
        }
    });

    let error_handler: ErrorMessageHandler = Box::new(move |error| {
        if let Some(tx) = error_tx.lock().ok().and_then(|mut tx| tx.take()) {
            let _ = tx.send(Err(error));
        }
    });

    (result_handler, error_handler, TakeOfferCompletion { rx })
}
