use crate::common::config::TradeManagerConfig;
use crate::common::types::*;
use crate::filter::DefaultCurrencyRegistry;
use crate::user::{InMemoryUser, PaymentAccount};

pub struct SomeTestParams {}

impl SomeTestParams {
    pub fn account_id() -> String {
        "userAccountId".to_string()
    }

    pub fn payment_account_id() -> String {
        "paymentAccountId".to_string()
    }

    pub fn payment_account() -> PaymentAccount {
        PaymentAccount {
            id: Self::payment_account_id(),
            account_name: "Some AliPay Account".to_string(),
            payment_method: PaymentMethod::AliPay,
            currency_codes: vec!["CNY".to_string(), "USD".to_string()],
        }
    }

    pub fn arbitrator_address() -> NodeAddress {
        NodeAddress::new("arbitratorA", 0)
    }

    pub fn mediator_address() -> NodeAddress {
        NodeAddress::new("mediatorA", 1)
    }

    pub fn maker_address() -> NodeAddress {
        NodeAddress::new("0", 0)
    }

    /// User owning the test payment account who accepts the test arbitrator and mediator.
    pub fn user() -> InMemoryUser {
        let user = InMemoryUser::new(Self::account_id());
        user.add_payment_account(Self::payment_account());
        user.accept_arbitrator(Self::arbitrator_address());
        user.accept_mediator(Self::mediator_address());
        user
    }

    pub fn config() -> TradeManagerConfig {
        TradeManagerConfig::default()
    }

    pub fn currency_registry() -> DefaultCurrencyRegistry {
        DefaultCurrencyRegistry::from_config(&Self::config())
    }
}
