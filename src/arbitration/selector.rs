use tracing::debug;

use crate::{
    common::{error::TakeOfferError, types::NodeAddress},
    offer::Offer,
    user::User,
};

#[derive(PartialEq, Clone, Debug)]
pub struct ArbitrationSelection {
    pub arbitrator: NodeAddress,
    pub mediator: Option<NodeAddress>,
}

/// First address of `eligible` that is also `accepted`. The offer's ordering
/// decides between several matches.
pub fn first_accepted(eligible: &[NodeAddress], accepted: &[NodeAddress]) -> Option<NodeAddress> {
    eligible
        .iter()
        .find(|address| accepted.contains(address))
        .cloned()
}

pub fn select_arbitration(
    offer: &Offer,
    user: &dyn User,
    require_mediator: bool,
) -> Result<ArbitrationSelection, TakeOfferError> {
    let arbitrator = first_accepted(
        &offer.arbitrator_node_addresses,
        &user.accepted_arbitrator_addresses(),
    )
    .ok_or(TakeOfferError::NoAcceptedArbitrator)?;

    let mediator = first_accepted(
        &offer.mediator_node_addresses,
        &user.accepted_mediator_addresses(),
    );

    if mediator.is_none() && require_mediator {
        return Err(TakeOfferError::NoAcceptedMediator);
    }

    debug!(
        "Offer {} selected arbitrator {} and mediator {}",
        offer.id,
        arbitrator,
        mediator
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );

    Ok(ArbitrationSelection {
        arbitrator,
        mediator,
    })
}
