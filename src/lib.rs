pub mod app;
pub mod client;
pub mod config;
pub mod defines;
pub mod error;
pub mod impls;
pub mod journal;
pub mod signer;
pub mod types;
pub mod util;
pub mod validate;

pub use client::ExchangeClient;
pub use config::Credentials;
pub use error::{ConfigError, Error, SubmissionError, ValidationError};
pub use journal::Journal;
pub use types::{OrderAck, OrderKind, OrderRequest, OrderType, RawOrder, Side, StatusCode, TradingContext};
pub use validate::validate;
