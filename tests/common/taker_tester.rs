use offer_taker::{
    testing::SomeTestRequestParams,
    trade::{TakeOfferRequest, Trade},
    TakeOfferError, TradeManager,
};
use tokio::sync::oneshot;

/// Takes the test offer on its own task and reports the single outcome.
pub struct TakerTester {
    cmpl_rx: oneshot::Receiver<Result<Trade, TakeOfferError>>,
}

impl TakerTester {
    pub fn start(manager: TradeManager) -> Self {
        Self::start_with(manager, SomeTestRequestParams::valid_request())
    }

    /// Takes with the inputs of `request`. Its handlers are replaced by the tester's.
    pub fn start_with(manager: TradeManager, request: TakeOfferRequest) -> Self {
        let (cmpl_tx, cmpl_rx) = oneshot::channel::<Result<Trade, TakeOfferError>>();
        let actor = TakerTesterActor {
            cmpl_tx,
            manager,
            request,
        };
        tokio::spawn(async move { actor.run().await });
        Self { cmpl_rx }
    }

    pub async fn wait_for_completion(self) -> Result<Trade, TakeOfferError> {
        match self.cmpl_rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(TakeOfferError::Simple(
                "Taker tester ended without an outcome".to_string(),
            )),
        }
    }
}

struct TakerTesterActor {
    cmpl_tx: oneshot::Sender<Result<Trade, TakeOfferError>>,
    manager: TradeManager,
    request: TakeOfferRequest,
}

impl TakerTesterActor {
    async fn run(self) {
        let (result_handler, error_handler, completion) = offer_taker::trade::completion_channel();
        let mut request = TakeOfferRequest::new(Some(result_handler), Some(error_handler));
        copy_inputs(&self.request, &mut request);

        let outcome = match self.manager.take_offer(request).await {
            Ok(()) => completion.outcome().await,
            Err(err) => Err(err),
        };

        // Send Completion
        let _ = self.cmpl_tx.send(outcome);
    }
}

fn copy_inputs(from: &TakeOfferRequest, to: &mut TakeOfferRequest) {
    to.amount = from.amount;
    to.tx_fee = from.tx_fee;
    to.taker_fee = from.taker_fee;
    to.is_currency_for_taker_fee_btc = from.is_currency_for_taker_fee_btc;
    to.trade_price = from.trade_price;
    to.funds_needed_for_trade = from.funds_needed_for_trade;
    to.offer = from.offer.clone();
    to.payment_account_id = from.payment_account_id.clone();
    to.use_savings_wallet = from.use_savings_wallet;
}
