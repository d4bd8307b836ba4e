pub mod config;
pub mod error;
pub mod types;
pub(crate) mod utils;
