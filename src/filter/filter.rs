use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::common::types::{NodeAddress, PaymentMethod};

/// Network-wide ban lists distributed by the filter authority.
#[cfg_attr(test, mockall::automock)]
pub trait FilterManager: Send + Sync {
    fn is_currency_banned(&self, currency_code: &str) -> bool;
    fn is_payment_method_banned(&self, payment_method: &PaymentMethod) -> bool;
    fn is_offer_id_banned(&self, offer_id: &str) -> bool;
    fn is_node_address_banned(&self, node_address: &NodeAddress) -> bool;
}

/// Snapshot of a published filter. Deserializable so a received filter payload
/// can be applied as is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub banned_currencies: HashSet<String>,
    pub banned_payment_methods: HashSet<PaymentMethod>,
    pub banned_offer_ids: HashSet<String>,
    pub banned_node_addresses: HashSet<NodeAddress>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ban_currency(&mut self, currency_code: impl Into<String>) -> &mut Self {
        self.banned_currencies.insert(currency_code.into());
        self
    }

    pub fn ban_payment_method(&mut self, payment_method: PaymentMethod) -> &mut Self {
        self.banned_payment_methods.insert(payment_method);
        self
    }

    pub fn ban_offer_id(&mut self, offer_id: impl Into<String>) -> &mut Self {
        self.banned_offer_ids.insert(offer_id.into());
        self
    }

    pub fn ban_node_address(&mut self, node_address: NodeAddress) -> &mut Self {
        self.banned_node_addresses.insert(node_address);
        self
    }
}

impl FilterManager for Filter {
    fn is_currency_banned(&self, currency_code: &str) -> bool {
        self.banned_currencies.contains(currency_code)
    }

    fn is_payment_method_banned(&self, payment_method: &PaymentMethod) -> bool {
        self.banned_payment_methods.contains(payment_method)
    }

    fn is_offer_id_banned(&self, offer_id: &str) -> bool {
        self.banned_offer_ids.contains(offer_id)
    }

    fn is_node_address_banned(&self, node_address: &NodeAddress) -> bool {
        self.banned_node_addresses.contains(node_address)
    }
}
