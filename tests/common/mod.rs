#![allow(dead_code)]

pub mod logger;
pub mod taker_tester;

use std::sync::Arc;

use offer_taker::{
    availability::AvailabilityProtocol,
    filter::Filter,
    testing::SomeTestParams,
    user::InMemoryUser,
    wallet::TradeWallet,
    Collaborators, TradeManager, TradeManagerConfig,
};

pub fn manager(
    user: InMemoryUser,
    filter: Filter,
    availability: Arc<dyn AvailabilityProtocol>,
    wallet: Arc<dyn TradeWallet>,
) -> TradeManager {
    manager_with_config(TradeManagerConfig::default(), user, filter, availability, wallet)
}

pub fn manager_with_config(
    config: TradeManagerConfig,
    user: InMemoryUser,
    filter: Filter,
    availability: Arc<dyn AvailabilityProtocol>,
    wallet: Arc<dyn TradeWallet>,
) -> TradeManager {
    let currencies = Arc::new(SomeTestParams::currency_registry());
    TradeManager::new(
        config,
        Collaborators {
            user: Arc::new(user),
            filter: Arc::new(filter),
            currencies,
            availability,
            wallet,
        },
    )
}
