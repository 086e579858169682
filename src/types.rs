use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Parser)]
#[clap(name="quickorder")]
#[clap(about="quickorder places a single market or limit order on Binance Futures testnet", long_about=None)]
#[clap(after_help="EXAMPLES:\n    quickorder BTCUSDT BUY MARKET 0.001\n    quickorder ETHUSDT SELL LIMIT 0.1 --price 2500")]
#[clap(allow_negative_numbers=true)]
pub struct CommandlineArgs {
    /// Trading pair symbol e.g. BTCUSDT, ETHUSDT
    pub symbol: String,

    /// BUY or SELL
    pub side: String,

    /// MARKET or LIMIT
    pub order_type: String,

    /// Amount to trade e.g. 0.001 for BTC
    pub quantity: String,

    /// Price for LIMIT orders (required for LIMIT, ignored for MARKET)
    #[clap(long)]
    pub price: Option<String>,

    /// Place the order without asking for confirmation
    #[clap(short='y', long)]
    pub yes: bool,

    /// REST base url, defaults to BINANCE_FUTURES_BASE_URL or the testnet
    #[clap(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[clap(long, default_value_t=crate::defines::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// recvWindow in milliseconds sent along with the signed request
    #[clap(long, default_value_t=crate::defines::DEFAULT_RECV_WINDOW_MS)]
    pub recv_window: u64,

    /// Order journal file, defaults to quickorder_YYYYMMDD.log
    #[clap(long, parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    /// Show debug diagnostics
    #[clap(short='v', long)]
    pub verbose: bool,
}

/// Status code the process exits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success=0,
    ValidationFailed,
    ConfigurationError,
    SubmissionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all="UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all="UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

/// What kind of order to place. Only a limit order carries a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit { price: Decimal },
}

/// Order fields exactly as typed on the command line, not validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOrder {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: String,
    pub price: Option<String>,
}

/// A validated order. It can only be obtained through `validate::validate`
/// and can't be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub(crate) symbol: String,
    pub(crate) side: Side,
    pub(crate) quantity: Decimal,
    pub(crate) kind: OrderKind,
}

/// New order response from Binance Futures.
// https://developers.binance.com/docs/derivatives/usds-margined-futures/trade/rest-api
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(rename_all="camelCase")]
pub struct OrderAck {
    pub order_id: i64,
    #[serde(default)]
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename="type")]
    pub order_type: OrderType,
    pub orig_qty: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub avg_price: Option<Decimal>,
    #[serde(default)]
    pub executed_qty: Decimal,
    /// Passed through as reported e.g. NEW, FILLED
    pub status: String,
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub update_time: Option<i64>,
}

/// Error payload Binance sends along with a 4xx/5xx.
#[derive(Debug, serde::Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}

/// `TradingContext` contains settings used while placing the order.
/// Credentials are not part of it, they're handed to the client per call.
#[derive(Debug, Clone)]
pub struct TradingContext {
    /// REST base url, the testnet unless overridden
    pub base_url: Url,

    /// Bound for the whole HTTP exchange
    pub timeout: Duration,

    /// recvWindow sent with the signed request
    pub recv_window_ms: u64,

    /// Append-only order journal
    pub journal_path: PathBuf,
}
