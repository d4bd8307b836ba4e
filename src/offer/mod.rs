mod builder;
mod offer;

pub use builder::{OfferBuilder, TRADE_PROTOCOL_VERSION};
pub use offer::{Offer, OfferState};
