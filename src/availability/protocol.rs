use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

use crate::common::types::{NodeAddress, OfferIdString, Price};

/// Maker's answer to an availability request.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, IntoStaticStr, Serialize, Deserialize)]
pub enum AvailabilityResult {
    Available,
    OfferTaken,
    PriceOutOfTolerance,
    MarketPriceNotAvailable,
    NoArbitrators,
    NoMediators,
    UserIgnored,
    MissingMandatoryCapability,
    ProtocolVersionMismatch,
    Unknown,
}

impl AvailabilityResult {
    pub fn is_available(self) -> bool {
        self == AvailabilityResult::Available
    }

    pub fn description(self) -> &'static str {
        match self {
            AvailabilityResult::Available => "Offer is available",
            AvailabilityResult::OfferTaken => "Offer is no longer available. It was already taken",
            AvailabilityResult::PriceOutOfTolerance => {
                "Trade price is out of the maker's price tolerance"
            }
            AvailabilityResult::MarketPriceNotAvailable => {
                "Maker has no market price available for that offer"
            }
            AvailabilityResult::NoArbitrators => "Maker does not accept any of your arbitrators",
            AvailabilityResult::NoMediators => "Maker does not accept any of your mediators",
            AvailabilityResult::UserIgnored => "Maker is ignoring your requests",
            AvailabilityResult::MissingMandatoryCapability => {
                "Your node lacks a capability the maker requires"
            }
            AvailabilityResult::ProtocolVersionMismatch => {
                "Maker runs an incompatible trade protocol version"
            }
            AvailabilityResult::Unknown => "Maker reported an unknown availability failure",
        }
    }
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub offer_id: OfferIdString,
    pub maker_node_address: NodeAddress,
    pub taker_account_id: String,
    pub trade_price: Price,
    pub protocol_version: u32,
}

/// Network side of the availability check. `Err` carries a transport failure
/// reason, such as an unreachable maker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityProtocol: Send + Sync {
    async fn request_availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResult, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_available_is_available() {
        assert!(AvailabilityResult::Available.is_available());
        assert!(!AvailabilityResult::OfferTaken.is_available());
        assert!(!AvailabilityResult::ProtocolVersionMismatch.is_available());
    }
}
