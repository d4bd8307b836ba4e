use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::{
    arbitration::select_arbitration,
    availability::{AvailabilityProtocol, AvailabilityRequest, OfferAvailabilityNegotiator},
    common::{config::TradeManagerConfig, error::TakeOfferError, types::OfferIdString},
    filter::{CurrencyRegistry, FilterManager},
    trade::{TakeOfferHandlers, TakeOfferRequest, Trade},
    user::User,
    validation::{validate, ValidTakeOffer, ValidationContext},
    wallet::{FeeReservationCoordinator, TradeWallet},
};

/// Services a `TradeManager` consults while taking offers.
pub struct Collaborators {
    pub user: Arc<dyn User>,
    pub filter: Arc<dyn FilterManager>,
    pub currencies: Arc<dyn CurrencyRegistry>,
    pub availability: Arc<dyn AvailabilityProtocol>,
    pub wallet: Arc<dyn TradeWallet>,
}

/// Entry point for taking offers. Cheap to clone, clones share state.
#[derive(Clone)]
pub struct TradeManager {
    inner: Arc<TradeManagerInner>,
}

struct TradeManagerInner {
    config: TradeManagerConfig,
    user: Arc<dyn User>,
    filter: Arc<dyn FilterManager>,
    currencies: Arc<dyn CurrencyRegistry>,
    negotiator: OfferAvailabilityNegotiator,
    reservations: FeeReservationCoordinator,
    trades: RwLock<HashMap<OfferIdString, Trade>>,
}

impl TradeManager {
    // Constructors

    pub fn new(config: TradeManagerConfig, collaborators: Collaborators) -> Self {
        let negotiator = OfferAvailabilityNegotiator::new(
            collaborators.availability,
            config.availability_timeout(),
        );
        let reservations = FeeReservationCoordinator::new(collaborators.wallet);

        TradeManager {
            inner: Arc::new(TradeManagerInner {
                config,
                user: collaborators.user,
                filter: collaborators.filter,
                currencies: collaborators.currencies,
                negotiator,
                reservations,
                trades: RwLock::new(HashMap::new()),
            }),
        }
    }

    pub fn config(&self) -> &TradeManagerConfig {
        &self.inner.config
    }

    // Trade Registry

    pub async fn trades(&self) -> Vec<Trade> {
        self.inner.trades.read().await.values().cloned().collect()
    }

    pub async fn trade(&self, offer_id: &str) -> Option<Trade> {
        self.inner.trades.read().await.get(offer_id).cloned()
    }

    // Take Offer

    /// Validates `request` and, if it passes, continues the take in the
    /// background. Exactly one of the request's handlers is invoked with the
    /// outcome. `Err` is returned only when the outcome cannot be delivered,
    /// i.e. the request was already used or has no error handler.
    pub async fn take_offer(&self, request: TakeOfferRequest) -> Result<(), TakeOfferError> {
        let Some(handlers) = request.claim_handlers() else {
            warn!(
                "Taker w/ OfferID {} request was already submitted",
                request.offer_id()
            );
            return Err(TakeOfferError::RequestConsumed);
        };

        let inner = &self.inner;
        let context = ValidationContext {
            user: inner.user.as_ref(),
            filter: inner.filter.as_ref(),
            currencies: inner.currencies.as_ref(),
        };

        let take = match validate(&request, &handlers, &context) {
            Ok(take) => take,
            Err(err) => {
                debug!(
                    "Taker w/ OfferID {} request rejected - {}",
                    request.offer_id(),
                    err
                );
                return Self::deliver_failure(handlers, err.into());
            }
        };

        let TakeOfferHandlers {
            result: Some(result_handler),
            error: Some(error_handler),
        } = handlers
        else {
            return Err(TakeOfferError::Simple(
                "Validated request is missing a handler".to_string(),
            ));
        };

        debug!(
            "Taker w/ OfferID {} request validated, checking availability",
            take.offer.id
        );

        let inner = self.inner.clone();
        tokio::spawn(async move {
            let offer_id = take.offer.id.clone();
            // Handlers stay out here so a panicking collaborator still gets reported
            let take_task = tokio::spawn(async move { inner.run_take(take).await });
            let outcome = match take_task.await {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    error!(
                        "Taker w/ OfferID {} take task aborted - {}",
                        offer_id, join_error
                    );
                    Err(TakeOfferError::Simple(format!(
                        "Take offer processing aborted unexpectedly - {}",
                        join_error
                    )))
                }
            };

            match outcome {
                Ok(trade) => {
                    info!(
                        "Taker w/ OfferID {} took offer as {} in trade {}",
                        offer_id, trade.role, trade.trade_uuid
                    );
                    result_handler(trade);
                }
                Err(err) => {
                    info!("Taker w/ OfferID {} take failed - {}", offer_id, err);
                    error_handler(err);
                }
            }
        });
        Ok(())
    }

    fn deliver_failure(
        handlers: TakeOfferHandlers,
        error: TakeOfferError,
    ) -> Result<(), TakeOfferError> {
        match handlers.error {
            Some(error_handler) => {
                error_handler(error);
                Ok(())
            }
            None => Err(error),
        }
    }
}

impl TradeManagerInner {
    async fn run_take(&self, take: ValidTakeOffer) -> Result<Trade, TakeOfferError> {
        // Serializes takes on the same offer up to registration
        let _guard = self.negotiator.lock_offer(&take.offer.id).await;

        let availability_request = AvailabilityRequest {
            offer_id: take.offer.id.clone(),
            maker_node_address: take.offer.maker_node_address.clone(),
            taker_account_id: self.user.account_id(),
            trade_price: take.trade_price,
            protocol_version: take.offer.protocol_version,
        };
        self.negotiator
            .check_availability(&take.offer, &availability_request)
            .await?;

        let selection =
            select_arbitration(&take.offer, self.user.as_ref(), self.config.require_mediator)?;

        let fee_tx = self.reservations.reserve(&take).await?;
        let trade = Trade::new(&take, selection, &fee_tx);

        let mut trades = self.trades.write().await;
        if trades.contains_key(&trade.offer_id) {
            drop(trades);
            warn!(
                "Taker w/ OfferID {} already has a trade, releasing reservation",
                take.offer.id
            );
            self.reservations.release(&fee_tx, &take.offer.id).await;
            return Err(TakeOfferError::DuplicateTrade(take.offer.id.clone()));
        }
        trades.insert(trade.offer_id.clone(), trade.clone());
        Ok(trade)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::{
        availability::{AvailabilityResult, MockAvailabilityProtocol},
        common::{
            error::{ValidationError, WalletError},
            types::Coin,
        },
        filter::Filter,
        offer::OfferState,
        testing::{FakeTradeWallet, ScriptedAvailability, SomeTestParams, SomeTestRequestParams},
        trade::{completion_channel, TradeState},
        wallet::MockTradeWallet,
    };

    fn manager_with(
        config: TradeManagerConfig,
        availability: Arc<dyn AvailabilityProtocol>,
        wallet: Arc<dyn TradeWallet>,
    ) -> TradeManager {
        TradeManager::new(
            config,
            Collaborators {
                user: Arc::new(SomeTestParams::user()),
                filter: Arc::new(Filter::new()),
                currencies: Arc::new(SomeTestParams::currency_registry()),
                availability,
                wallet,
            },
        )
    }

    fn untouched_wallet() -> MockTradeWallet {
        let mut wallet = MockTradeWallet::new();
        wallet.expect_create_taker_fee_tx().never();
        wallet.expect_release_reservation().never();
        wallet
    }

    #[tokio::test]
    async fn invalid_request_reaches_neither_network_nor_wallet() {
        let mut availability = MockAvailabilityProtocol::new();
        availability.expect_request_availability().never();
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(availability),
            Arc::new(untouched_wallet()),
        );

        let (mut request, completion) = SomeTestRequestParams::request_with_completion();
        request.amount = Some(Coin::ZERO);
        manager.take_offer(request).await.unwrap();

        let error = completion.outcome().await.unwrap_err();
        assert!(matches!(
            error,
            TakeOfferError::Validation(ValidationError::AmountNotPositive)
        ));
        assert!(error.is_recoverable_input());
        assert!(manager.trades().await.is_empty());
    }

    #[tokio::test]
    async fn missing_error_handler_is_returned_to_caller() {
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(ScriptedAvailability::always(Ok(AvailabilityResult::Available))),
            Arc::new(untouched_wallet()),
        );

        let request = SomeTestRequestParams::request_with_handlers(true, false);
        let result = manager.take_offer(request).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "ErrorMessageHandler must not be null"
        );
    }

    #[tokio::test]
    async fn missing_result_handler_goes_to_error_handler() {
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(ScriptedAvailability::always(Ok(AvailabilityResult::Available))),
            Arc::new(untouched_wallet()),
        );

        let (_, error_handler, completion) = completion_channel();
        let mut request = TakeOfferRequest::new(None, Some(error_handler));
        SomeTestRequestParams::fill_valid(&mut request);
        manager.take_offer(request).await.unwrap();

        let error = completion.outcome().await.unwrap_err();
        assert_eq!(error.to_string(), "TradeResultHandler must not be null");
    }

    #[tokio::test]
    async fn unavailable_offer_reports_reason_and_reserves_nothing() {
        let mut availability = MockAvailabilityProtocol::new();
        availability
            .expect_request_availability()
            .times(1)
            .returning(|_| Ok(AvailabilityResult::OfferTaken));
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(availability),
            Arc::new(untouched_wallet()),
        );

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        let offer = request.offer.clone().unwrap();
        manager.take_offer(request).await.unwrap();

        let error = completion.outcome().await.unwrap_err();
        assert_eq!(
            error.to_string(),
            AvailabilityResult::OfferTaken.description()
        );
        assert_eq!(offer.state().await, OfferState::NotAvailable);
        assert!(manager.trade(&offer.id).await.is_none());
    }

    #[tokio::test]
    async fn available_offer_produces_one_trade() {
        let wallet = Arc::new(FakeTradeWallet::new());
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(ScriptedAvailability::always(Ok(AvailabilityResult::Available))),
            wallet.clone(),
        );

        let successes = Arc::new(AtomicUsize::new(0));
        let (result_handler, error_handler, completion) = completion_channel();
        let counted = successes.clone();
        let result_handler: crate::trade::TradeResultHandler = Box::new(move |trade| {
            counted.fetch_add(1, Ordering::SeqCst);
            result_handler(trade);
        });
        let mut request = TakeOfferRequest::new(Some(result_handler), Some(error_handler));
        SomeTestRequestParams::fill_valid(&mut request);
        manager.take_offer(request).await.unwrap();

        let trade = completion.outcome().await.unwrap();
        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(trade.error_message, None);
        assert_eq!(trade.state, TradeState::TakerFeeReserved);
        assert_eq!(trade.amount, SomeTestRequestParams::amount());
        assert_eq!(trade.arbitrator_node_address, SomeTestParams::arbitrator_address());
        assert_eq!(
            trade.mediator_node_address,
            Some(SomeTestParams::mediator_address())
        );
        assert_eq!(trade.payment_account_id, SomeTestParams::payment_account().id);
        assert_eq!(wallet.reservations(), 1);
        assert_eq!(manager.trade(&trade.offer_id).await, Some(trade));
    }

    #[tokio::test]
    async fn consumed_request_is_refused() {
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(ScriptedAvailability::always(Ok(AvailabilityResult::Available))),
            Arc::new(FakeTradeWallet::new()),
        );

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        let resubmitted = request.clone();
        manager.take_offer(request).await.unwrap();
        assert!(completion.outcome().await.is_ok());

        assert!(resubmitted.is_consumed());
        let result = manager.take_offer(resubmitted).await;
        assert!(matches!(result, Err(TakeOfferError::RequestConsumed)));
        assert_eq!(manager.trades().await.len(), 1);
    }

    #[tokio::test]
    async fn wallet_failure_is_reported_verbatim() {
        let mut wallet = MockTradeWallet::new();
        wallet
            .expect_create_taker_fee_tx()
            .times(1)
            .returning(|_| Err(WalletError::Other("Wallet is not ready".to_string())));
        wallet.expect_release_reservation().never();
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(ScriptedAvailability::always(Ok(AvailabilityResult::Available))),
            Arc::new(wallet),
        );

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        manager.take_offer(request).await.unwrap();

        let error = completion.outcome().await.unwrap_err();
        assert_eq!(error.to_string(), "Wallet is not ready");
        assert!(manager.trades().await.is_empty());
    }

    #[tokio::test]
    async fn second_trade_for_offer_releases_reservation() {
        let wallet = Arc::new(FakeTradeWallet::new());
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(ScriptedAvailability::always(Ok(AvailabilityResult::Available))),
            wallet.clone(),
        );

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        manager.take_offer(request).await.unwrap();
        completion.outcome().await.unwrap();

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        manager.take_offer(request).await.unwrap();
        let error = completion.outcome().await.unwrap_err();

        assert!(matches!(error, TakeOfferError::DuplicateTrade(_)));
        assert_eq!(wallet.reservations(), 2);
        assert_eq!(wallet.releases(), 1);
        assert_eq!(manager.trades().await.len(), 1);
    }

    #[tokio::test]
    async fn required_mediator_missing_fails_before_reservation() {
        let user = crate::user::InMemoryUser::new("userAccountId");
        user.add_payment_account(SomeTestParams::payment_account());
        user.accept_arbitrator(SomeTestParams::arbitrator_address());

        let manager = TradeManager::new(
            TradeManagerConfig {
                require_mediator: true,
                ..Default::default()
            },
            Collaborators {
                user: Arc::new(user),
                filter: Arc::new(Filter::new()),
                currencies: Arc::new(SomeTestParams::currency_registry()),
                availability: Arc::new(ScriptedAvailability::always(Ok(
                    AvailabilityResult::Available,
                ))),
                wallet: Arc::new(untouched_wallet()),
            },
        );

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        manager.take_offer(request).await.unwrap();
        let error = completion.outcome().await.unwrap_err();
        assert!(matches!(error, TakeOfferError::NoAcceptedMediator));
    }

    struct PanickingAvailability;

    #[async_trait::async_trait]
    impl AvailabilityProtocol for PanickingAvailability {
        async fn request_availability(
            &self,
            _request: &AvailabilityRequest,
        ) -> Result<AvailabilityResult, String> {
            panic!("transport bug")
        }
    }

    #[tokio::test]
    async fn panicking_collaborator_still_fires_error_handler_once() {
        let manager = manager_with(
            TradeManagerConfig::default(),
            Arc::new(PanickingAvailability),
            Arc::new(untouched_wallet()),
        );

        let successes = Arc::new(AtomicUsize::new(0));
        let failures = Arc::new(AtomicUsize::new(0));
        let (result_handler, error_handler, completion) = completion_channel();
        let counted = successes.clone();
        let result_handler: crate::trade::TradeResultHandler = Box::new(move |trade| {
            counted.fetch_add(1, Ordering::SeqCst);
            result_handler(trade);
        });
        let counted = failures.clone();
        let error_handler: crate::trade::ErrorMessageHandler = Box::new(move |error| {
            counted.fetch_add(1, Ordering::SeqCst);
            error_handler(error);
        });
        let mut request = TakeOfferRequest::new(Some(result_handler), Some(error_handler));
        SomeTestRequestParams::fill_valid(&mut request);
        let offer_id = request.offer.as_ref().map(|o| o.id.clone()).unwrap();
        manager.take_offer(request).await.unwrap();

        let error = completion.outcome().await.unwrap_err();
        assert!(matches!(error, TakeOfferError::Simple(_)));
        assert_eq!(successes.load(Ordering::SeqCst), 0);
        assert_eq!(failures.load(Ordering::SeqCst), 1);
        assert!(manager.trades().await.is_empty());

        // The offer is not left locked by the aborted take
        let _guard = manager.inner.negotiator.lock_offer(&offer_id).await;
    }

    #[tokio::test(start_paused = true)]
    async fn silent_maker_times_out_as_unavailable() {
        let manager = manager_with(
            TradeManagerConfig {
                availability_timeout_secs: 2,
                ..Default::default()
            },
            Arc::new(ScriptedAvailability::delayed(
                Duration::from_secs(60),
                Ok(AvailabilityResult::Available),
            )),
            Arc::new(untouched_wallet()),
        );

        let (request, completion) = SomeTestRequestParams::request_with_completion();
        let offer = request.offer.clone().unwrap();
        manager.take_offer(request).await.unwrap();

        let error = completion.outcome().await.unwrap_err();
        assert!(matches!(error, TakeOfferError::Unavailable(_)));
        assert_eq!(offer.state().await, OfferState::MakerOffline);
    }
}
