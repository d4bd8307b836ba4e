mod selector;

pub use selector::{first_accepted, select_arbitration, ArbitrationSelection};
