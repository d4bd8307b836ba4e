mod user;

#[cfg(test)]
pub use user::MockUser;
pub use user::{InMemoryUser, PaymentAccount, User};
