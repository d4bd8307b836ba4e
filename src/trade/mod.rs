mod handler;
mod request;
mod trade;

pub(crate) use handler::TakeOfferHandlers;
pub use handler::{
    completion_channel, ErrorMessageHandler, TakeOfferCompletion, TradeResultHandler,
};
pub use request::TakeOfferRequest;
pub use trade::{Trade, TradeRole, TradeState};
