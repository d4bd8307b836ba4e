use crate::{
    common::{
        error::ValidationError,
        types::{Coin, Price},
    },
    filter::{CurrencyRegistry, FilterManager},
    offer::Offer,
    trade::{TakeOfferHandlers, TakeOfferRequest},
    user::{PaymentAccount, User},
};

/// Read-only collaborators the checks consult.
pub struct ValidationContext<'a> {
    pub user: &'a dyn User,
    pub filter: &'a dyn FilterManager,
    pub currencies: &'a dyn CurrencyRegistry,
}

/// A request that passed every check, with its optional inputs resolved.
#[derive(Clone, Debug)]
pub struct ValidTakeOffer {
    pub offer: Offer,
    pub currency_code: String,
    pub payment_account: PaymentAccount,
    pub amount: Coin,
    pub tx_fee: Coin,
    pub taker_fee: Coin,
    pub is_currency_for_taker_fee_btc: bool,
    pub trade_price: Price,
    pub funds_needed_for_trade: Coin,
    pub use_savings_wallet: bool,
}

/// Runs the checks in order and stops at the first failure. Each check hands
/// back the value it resolved, so every input is looked up once.
pub(crate) fn validate(
    request: &TakeOfferRequest,
    handlers: &TakeOfferHandlers,
    context: &ValidationContext,
) -> Result<ValidTakeOffer, ValidationError> {
    let payment_account = payment_account(request, context)?;
    let offer = offer(request)?;
    let currency_code = known_currency(offer, context)?;
    currency_not_banned(currency_code, context)?;
    payment_method_not_banned(offer, context)?;
    offer_not_banned(offer, context)?;
    maker_not_banned(offer, context)?;
    let amount = amount(request, offer)?;
    let tx_fee = positive_fee(request.tx_fee, ValidationError::TxFeeNotPositive)?;
    let taker_fee = positive_fee(request.taker_fee, ValidationError::TakerFeeNotPositive)?;
    let trade_price = trade_price(request)?;
    if !handlers.has_result_handler() {
        return Err(ValidationError::ResultHandlerMissing);
    }
    if !handlers.has_error_handler() {
        return Err(ValidationError::ErrorHandlerMissing);
    }

    Ok(ValidTakeOffer {
        offer: offer.clone(),
        currency_code: currency_code.to_string(),
        payment_account,
        amount,
        tx_fee,
        taker_fee,
        is_currency_for_taker_fee_btc: request.is_currency_for_taker_fee_btc,
        trade_price,
        funds_needed_for_trade: request.funds_needed_for_trade,
        use_savings_wallet: request.use_savings_wallet,
    })
}

fn payment_account(
    request: &TakeOfferRequest,
    context: &ValidationContext,
) -> Result<PaymentAccount, ValidationError> {
    request
        .payment_account_id
        .as_deref()
        .and_then(|id| context.user.payment_account(id))
        .ok_or_else(|| ValidationError::NoPaymentAccount(request.payment_account_id.clone()))
}

fn offer(request: &TakeOfferRequest) -> Result<&Offer, ValidationError> {
    request.offer.as_ref().ok_or(ValidationError::OfferMissing)
}

fn known_currency<'a>(
    offer: &'a Offer,
    context: &ValidationContext,
) -> Result<&'a str, ValidationError> {
    let code = offer
        .currency_code
        .as_deref()
        .ok_or(ValidationError::NoSuchCurrency(None))?;
    if context.currencies.is_known(code) {
        Ok(code)
    } else {
        Err(ValidationError::NoSuchCurrency(Some(code.to_string())))
    }
}

fn currency_not_banned(code: &str, context: &ValidationContext) -> Result<(), ValidationError> {
    if context.filter.is_currency_banned(code) {
        Err(ValidationError::CurrencyBanned)
    } else {
        Ok(())
    }
}

fn payment_method_not_banned(
    offer: &Offer,
    context: &ValidationContext,
) -> Result<(), ValidationError> {
    if context.filter.is_payment_method_banned(&offer.payment_method) {
        Err(ValidationError::PaymentMethodBanned)
    } else {
        Ok(())
    }
}

fn offer_not_banned(offer: &Offer, context: &ValidationContext) -> Result<(), ValidationError> {
    if context.filter.is_offer_id_banned(&offer.id) {
        Err(ValidationError::OfferBlocked)
    } else {
        Ok(())
    }
}

fn maker_not_banned(offer: &Offer, context: &ValidationContext) -> Result<(), ValidationError> {
    if context.filter.is_node_address_banned(&offer.maker_node_address) {
        Err(ValidationError::NodeBlocked)
    } else {
        Ok(())
    }
}

fn amount(request: &TakeOfferRequest, offer: &Offer) -> Result<Coin, ValidationError> {
    match request.amount {
        Some(amount) if !amount.is_positive() => Err(ValidationError::AmountNotPositive),
        Some(amount) if amount > offer.amount => Err(ValidationError::AmountAboveOffer),
        Some(amount) => Ok(amount),
        None => Err(ValidationError::AmountNotPositive),
    }
}

fn positive_fee(fee: Option<Coin>, error: ValidationError) -> Result<Coin, ValidationError> {
    match fee {
        Some(fee) if fee.is_positive() => Ok(fee),
        _ => Err(error),
    }
}

fn trade_price(request: &TakeOfferRequest) -> Result<Price, ValidationError> {
    if request.trade_price.is_positive() {
        Ok(request.trade_price)
    } else {
        Err(ValidationError::TradePriceNotPositive)
    }
}
