use crate::types::StatusCode;
use thiserror::Error;

/// Field-level rejection of an order. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid symbol '{0}': must be 5-12 letters or digits like 'BTCUSDT'")]
    InvalidSymbol(String),

    #[error("invalid side '{0}': must be BUY or SELL")]
    InvalidSide(String),

    #[error("invalid order type '{0}': must be MARKET or LIMIT")]
    InvalidOrderType(String),

    #[error("invalid quantity '{0}': quantity must be a positive number")]
    InvalidQuantity(String),

    #[error("price required for LIMIT orders")]
    MissingPrice,

    #[error("invalid price '{0}': price must be a positive number")]
    InvalidPrice(String),

    #[error("{field} '{value}' has more digits than can be sent exactly (at most 28)")]
    ExcessPrecision { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidSymbol(_) => "symbol",
            ValidationError::InvalidSide(_) => "side",
            ValidationError::InvalidOrderType(_) => "type",
            ValidationError::InvalidQuantity(_) => "quantity",
            ValidationError::MissingPrice | ValidationError::InvalidPrice(_) => "price",
            ValidationError::ExcessPrecision { field, .. } => *field,
        }
    }
}

/// Failure of the single request sent to the exchange.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Timeout, refused connection, DNS failure and such.
    #[error("network error: {source}")]
    Network {
        #[from]
        source: isahc::Error,
    },

    /// Exchange's own code and message, verbatim.
    #[error("exchange rejected the order: {message} (code {code}, http {status})")]
    ExchangeRejected {
        status: u16,
        code: i64,
        message: String,
    },

    /// Neither an order ack nor a Binance error payload.
    #[error("unexpected response (http {status}): {body}")]
    MalformedResponse {
        status: u16,
        body: String,
    },
}

/// Fatal at startup, before any order is considered.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required env variable {0} is not set (put it in .env or export it)")]
    MissingCredential(&'static str),

    #[error("invalid base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url '{0}' must be http or https")]
    UnsupportedScheme(String),

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    #[error("recv window must be within 1..={max} ms, got {got}")]
    RecvWindowOutOfRange { got: u64, max: u64 },

    #[error("cannot open order journal {path}: {source}")]
    Journal {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build http client: {0}")]
    HttpClient(#[source] isahc::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::ValidationFailed,
            Error::Config(_) => StatusCode::ConfigurationError,
            Error::Submission(_) => StatusCode::SubmissionFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_name_their_field() {
        assert_eq!(ValidationError::InvalidQuantity("-1".into()).field(), "quantity");
        assert_eq!(ValidationError::MissingPrice.field(), "price");
        assert_eq!(ValidationError::InvalidSide("HOLD".into()).field(), "side");
    }

    #[test]
    fn messages_match_what_the_user_sees() {
        assert_eq!(ValidationError::MissingPrice.to_string(), "price required for LIMIT orders");
        assert!(ValidationError::InvalidQuantity("0".into())
            .to_string()
            .contains("quantity must be a positive number"));
    }

    #[test]
    fn rejection_keeps_exchange_code_and_message() {
        let err = SubmissionError::ExchangeRejected {
            status: 400,
            code: -2019,
            message: "Margin is insufficient.".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("Margin is insufficient."));
        assert!(text.contains("-2019"));
    }

    #[test]
    fn each_error_class_maps_to_its_exit_code() {
        let validation: Error = ValidationError::MissingPrice.into();
        let config: Error = ConfigError::ZeroTimeout.into();
        let submission: Error = SubmissionError::MalformedResponse { status: 502, body: String::new() }.into();
        assert_eq!(validation.status_code(), StatusCode::ValidationFailed);
        assert_eq!(config.status_code(), StatusCode::ConfigurationError);
        assert_eq!(submission.status_code(), StatusCode::SubmissionFailed);
    }
}
