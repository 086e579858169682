use crate::types::*;
use crate::defines::*;
use crate::error::ValidationError;

use rust_decimal::Decimal;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

/// Provide default values for `TradingContext`
impl Default for TradingContext {
    fn default() -> TradingContext {
        TradingContext {
            // default for safety is the testnet
            base_url: url::Url::parse(TESTNET_BASE_URL).expect("testnet url is a valid constant"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            journal_path: default_journal_path(),
        }
    }
}

/// Journal file named after today's local date, in the working directory.
pub fn default_journal_path() -> PathBuf {
    PathBuf::from(format!("{}_{}.log", JOURNAL_FILE_PREFIX, chrono::Local::now().format("%Y%m%d")))
}

impl From<StatusCode> for ExitCode {
    fn from(code: StatusCode) -> ExitCode {
        ExitCode::from(code as u8)
    }
}

impl From<&CommandlineArgs> for RawOrder {
    fn from(args: &CommandlineArgs) -> RawOrder {
        RawOrder {
            symbol: args.symbol.clone(),
            side: args.side.clone(),
            order_type: args.order_type.clone(),
            quantity: args.quantity.clone(),
            price: args.price.clone(),
        }
    }
}

impl RawOrder {
    pub fn new(symbol: &str, side: &str, order_type: &str, quantity: &str, price: Option<&str>) -> RawOrder {
        RawOrder {
            symbol: symbol.to_string(),
            side: side.to_string(),
            order_type: order_type.to_string(),
            quantity: quantity.to_string(),
            price: price.map(str::to_string),
        }
    }
}

/// Case-insensitive, surrounding whitespace ignored.
impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Side, ValidationError> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(ValidationError::InvalidSide(other.to_string())),
        }
    }
}

/// Case-insensitive, surrounding whitespace ignored.
impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<OrderType, ValidationError> {
        match s.trim().to_uppercase().as_str() {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            other => Err(ValidationError::InvalidOrderType(other.to_string())),
        }
    }
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrderKind {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderKind::Market => OrderType::Market,
            OrderKind::Limit { .. } => OrderType::Limit,
        }
    }
}

impl OrderRequest {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn order_type(&self) -> OrderType {
        self.kind.order_type()
    }

    /// Price of a limit order, `None` for market orders.
    pub fn price(&self) -> Option<Decimal> {
        match self.kind {
            OrderKind::Market => None,
            OrderKind::Limit { price } => Some(price),
        }
    }

    /// Unsigned order parameters in the order Binance documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type().as_str().to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        if let OrderKind::Limit { price } = self.kind {
            params.push(("price", price.to_string()));
            params.push(("timeInForce", LIMIT_TIME_IN_FORCE.to_string()));
        }
        params
    }
}

/// e.g. `BUY 0.003 BTCUSDT MARKET`, `SELL 0.1 ETHUSDT LIMIT @ 2500`
impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.side, self.quantity, self.symbol, self.order_type())?;
        if let Some(price) = self.price() {
            write!(f, " @ {}", price)?;
        }
        Ok(())
    }
}
