mod validator;

pub(crate) use validator::validate;
pub use validator::{ValidTakeOffer, ValidationContext};
