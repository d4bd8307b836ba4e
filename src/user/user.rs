use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::types::{NodeAddress, PaymentMethod};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct PaymentAccount {
    pub id: String,
    pub account_name: String,
    pub payment_method: PaymentMethod,
    pub currency_codes: Vec<String>,
}

impl PaymentAccount {
    pub fn new(payment_method: PaymentMethod, account_name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            account_name: account_name.into(),
            payment_method,
            currency_codes: Vec::new(),
        }
    }
}

/// Read access to the local user's accounts and dispute agent preferences.
#[cfg_attr(test, mockall::automock)]
pub trait User: Send + Sync {
    fn account_id(&self) -> String;
    fn payment_account(&self, id: &str) -> Option<PaymentAccount>;
    fn accepted_arbitrator_addresses(&self) -> Vec<NodeAddress>;
    fn accepted_mediator_addresses(&self) -> Vec<NodeAddress>;
}

#[derive(Default)]
struct UserStore {
    payment_accounts: HashMap<String, PaymentAccount>,
    accepted_arbitrators: Vec<NodeAddress>,
    accepted_mediators: Vec<NodeAddress>,
}

/// `User` kept entirely in memory. Acceptance order is preserved.
pub struct InMemoryUser {
    account_id: String,
    store: RwLock<UserStore>,
}

impl InMemoryUser {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            store: RwLock::new(UserStore::default()),
        }
    }

    pub fn add_payment_account(&self, account: PaymentAccount) {
        debug!(
            "User {} adding payment account {} of method {}",
            self.account_id, account.id, account.payment_method
        );
        self.write_store()
            .payment_accounts
            .insert(account.id.clone(), account);
    }

    pub fn remove_payment_account(&self, id: &str) -> Option<PaymentAccount> {
        self.write_store().payment_accounts.remove(id)
    }

    pub fn accept_arbitrator(&self, address: NodeAddress) {
        let mut store = self.write_store();
        if !store.accepted_arbitrators.contains(&address) {
            store.accepted_arbitrators.push(address);
        }
    }

    pub fn deselect_arbitrator(&self, address: &NodeAddress) -> bool {
        let mut store = self.write_store();
        let count = store.accepted_arbitrators.len();
        store.accepted_arbitrators.retain(|a| a != address);
        count != store.accepted_arbitrators.len()
    }

    pub fn accept_mediator(&self, address: NodeAddress) {
        let mut store = self.write_store();
        if !store.accepted_mediators.contains(&address) {
            store.accepted_mediators.push(address);
        }
    }

    pub fn deselect_mediator(&self, address: &NodeAddress) -> bool {
        let mut store = self.write_store();
        let count = store.accepted_mediators.len();
        store.accepted_mediators.retain(|a| a != address);
        count != store.accepted_mediators.len()
    }

    fn write_store(&self) -> std::sync::RwLockWriteGuard<'_, UserStore> {
        match self.store.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("User {} store lock poisoned, recovering", self.account_id);
                poisoned.into_inner()
            }
        }
    }

    fn read_store(&self) -> std::sync::RwLockReadGuard<'_, UserStore> {
        match self.store.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl User for InMemoryUser {
    fn account_id(&self) -> String {
        self.account_id.clone()
    }

    fn payment_account(&self, id: &str) -> Option<PaymentAccount> {
        self.read_store().payment_accounts.get(id).cloned()
    }

    fn accepted_arbitrator_addresses(&self) -> Vec<NodeAddress> {
        self.read_store().accepted_arbitrators.clone()
    }

    fn accepted_mediator_addresses(&self) -> Vec<NodeAddress> {
        self.read_store().accepted_mediators.clone()
    }
}
