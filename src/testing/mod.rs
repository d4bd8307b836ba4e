mod fakes;
mod offer;
mod params;
mod request;

pub use fakes::{FakeTradeWallet, FirstTakerWins, ScriptedAvailability};
pub use offer::SomeTestOfferParams;
pub use params::SomeTestParams;
pub use request::SomeTestRequestParams;
