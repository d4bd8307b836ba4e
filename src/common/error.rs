use std::{error::Error, fmt};

use super::types::Coin;

// Take-offer input checks, in evaluation order

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    NoPaymentAccount(Option<String>),
    OfferMissing,
    NoSuchCurrency(Option<String>),
    CurrencyBanned,
    PaymentMethodBanned,
    OfferBlocked,
    NodeBlocked,
    AmountNotPositive,
    AmountAboveOffer,
    TxFeeNotPositive,
    TakerFeeNotPositive,
    TradePriceNotPositive,
    ResultHandlerMissing,
    ErrorHandlerMissing,
}

impl Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::NoPaymentAccount(id) => write!(
                f,
                "Payment account for given id does not exist: {}",
                id.as_deref().unwrap_or("null")
            ),
            ValidationError::OfferMissing => write!(f, "Offer must not be null"),
            ValidationError::NoSuchCurrency(code) => {
                write!(f, "No such currency: {}", code.as_deref().unwrap_or("null"))
            }
            ValidationError::CurrencyBanned => write!(
                f,
                "The currency used in that offer was blocked by the network filter."
            ),
            ValidationError::PaymentMethodBanned => write!(
                f,
                "The payment method used in that offer was blocked by the network filter."
            ),
            ValidationError::OfferBlocked => write!(
                f,
                "That offer was blocked by the network filter. Taking it is not possible."
            ),
            ValidationError::NodeBlocked => write!(
                f,
                "Offers of that trader have been blocked by the network filter."
            ),
            ValidationError::AmountNotPositive => write!(f, "Amount must be a positive number"),
            ValidationError::AmountAboveOffer => {
                write!(f, "Taken amount must not be higher than offer amount")
            }
            ValidationError::TxFeeNotPositive => {
                write!(f, "Transaction fee must be a positive number")
            }
            ValidationError::TakerFeeNotPositive => write!(f, "Taker fee must be a positive number"),
            ValidationError::TradePriceNotPositive => {
                write!(f, "Trade price must be a positive number")
            }
            ValidationError::ResultHandlerMissing => {
                write!(f, "TradeResultHandler must not be null")
            }
            ValidationError::ErrorHandlerMissing => {
                write!(f, "ErrorMessageHandler must not be null")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WalletError {
    InsufficientFunds { needed: Coin, available: Coin },
    WalletLocked,
    BroadcastRejected(String),
    Other(String),
}

impl Error for WalletError {}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WalletError::InsufficientFunds { needed, available } => write!(
                f,
                "Insufficient funds. Needed {} but only {} available",
                needed, available
            ),
            WalletError::WalletLocked => write!(f, "Wallet is locked"),
            WalletError::BroadcastRejected(reason) => {
                write!(f, "Transaction broadcast rejected: {}", reason)
            }
            WalletError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug)]
pub enum TakeOfferError {
    Validation(ValidationError),
    Unavailable(String),
    NoAcceptedArbitrator,
    NoAcceptedMediator,
    Reservation(WalletError),
    DuplicateTrade(String),
    RequestConsumed,
    Simple(String),
    SerdesJson(serde_json::Error),
    Io(std::io::Error),
}

impl TakeOfferError {
    /// Caller-caused input errors. These are never reported as system faults.
    pub fn is_recoverable_input(&self) -> bool {
        matches!(self, TakeOfferError::Validation(_))
    }
}

impl Error for TakeOfferError {}

impl fmt::Display for TakeOfferError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TakeOfferError::Validation(err) => write!(f, "{}", err),
            TakeOfferError::Unavailable(reason) => write!(f, "{}", reason),
            TakeOfferError::NoAcceptedArbitrator => write!(
                f,
                "No accepted arbitrator among the arbitrators eligible for that offer"
            ),
            TakeOfferError::NoAcceptedMediator => write!(
                f,
                "No accepted mediator among the mediators eligible for that offer"
            ),
            TakeOfferError::Reservation(err) => write!(f, "{}", err),
            TakeOfferError::DuplicateTrade(offer_id) => {
                write!(f, "A trade for offer {} already exists", offer_id)
            }
            TakeOfferError::RequestConsumed => {
                write!(f, "Take offer request was already submitted")
            }
            TakeOfferError::Simple(msg) => write!(f, "{}", msg),
            TakeOfferError::SerdesJson(err) => write!(f, "SerdesJsonError - {}", err),
            TakeOfferError::Io(err) => write!(f, "IoError - {}", err),
        }
    }
}

impl From<ValidationError> for TakeOfferError {
    fn from(e: ValidationError) -> TakeOfferError {
        TakeOfferError::Validation(e)
    }
}

impl From<WalletError> for TakeOfferError {
    fn from(e: WalletError) -> TakeOfferError {
        TakeOfferError::Reservation(e)
    }
}

impl From<serde_json::Error> for TakeOfferError {
    fn from(e: serde_json::Error) -> TakeOfferError {
        TakeOfferError::SerdesJson(e)
    }
}

impl From<std::io::Error> for TakeOfferError {
    fn from(e: std::io::Error) -> TakeOfferError {
        TakeOfferError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payment_account_id_renders_null() {
        let error = ValidationError::NoPaymentAccount(None);
        assert_eq!(
            error.to_string(),
            "Payment account for given id does not exist: null"
        );
    }

    #[test]
    fn wallet_message_passes_through_verbatim() {
        let error: TakeOfferError = WalletError::Other("utxo set exhausted".to_string()).into();
        assert_eq!(error.to_string(), "utxo set exhausted");
        assert!(!error.is_recoverable_input());
    }

    #[test]
    fn validation_errors_are_recoverable_input() {
        let error: TakeOfferError = ValidationError::OfferMissing.into();
        assert!(error.is_recoverable_input());
        assert_eq!(error.to_string(), "Offer must not be null");
    }
}
