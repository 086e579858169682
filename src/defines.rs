/// USDT-M Futures testnet REST base url
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// New order endpoint
pub const ORDER_ENDPOINT: &str = "/fapi/v1/order";

/// Header carrying the (non-secret) API key
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";
pub const BASE_URL_ENV: &str = "BINANCE_FUTURES_BASE_URL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;

/// Exchange refuses anything above this
pub const MAX_RECV_WINDOW_MS: u64 = 60000;

/// Trading pair syntax, applied after trimming and upper-casing
pub const SYMBOL_PATTERN: &str = r"^[A-Z0-9]{5,12}$";

/// Plain decimal as typed: digits, optionally a dot followed by digits.
/// No sign, exponent, separators or bare dot.
pub const DECIMAL_PATTERN: &str = r"^[0-9]+(\.[0-9]+)?$";

/// Quantities below this are usually rejected for major pairs; we only warn.
pub const SMALL_QUANTITY_HINT: &str = "0.001";

/// Time-in-force sent along with every LIMIT order
pub const LIMIT_TIME_IN_FORCE: &str = "GTC";

pub const JOURNAL_FILE_PREFIX: &str = "quickorder";
