mod negotiator;
mod protocol;

pub use negotiator::{OfferAvailabilityNegotiator, OfferGuard};
#[cfg(test)]
pub use protocol::MockAvailabilityProtocol;
pub use protocol::{AvailabilityProtocol, AvailabilityRequest, AvailabilityResult};
