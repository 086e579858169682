use crate::defines::*;
use crate::error::ConfigError;
use crate::impls::default_journal_path;
use crate::types::{CommandlineArgs, TradingContext};

use log::{debug, warn};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// API key and secret handed to the client for each call.
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Credentials {
        Credentials {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read `BINANCE_API_KEY` and `BINANCE_API_SECRET`. Empty counts as missing.
    pub fn from_env() -> Result<Credentials, ConfigError> {
        Credentials::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials, ConfigError> {
        let read = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingCredential(name))
        };
        let api_key = read(API_KEY_ENV)?;
        let api_secret = read(API_SECRET_ENV)?;
        Ok(Credentials::new(api_key, api_secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Load `.env` from the working directory. Variables already set win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("no .env file found"),
        Err(e) => warn!("ignoring unreadable .env file: {}", e),
    }
}

impl TradingContext {
    /// Settings from command line flags, falling back to `BINANCE_FUTURES_BASE_URL`
    /// and then the defaults.
    pub fn from_args(args: &CommandlineArgs) -> Result<TradingContext, ConfigError> {
        let base_url = args.base_url.clone().or_else(|| std::env::var(BASE_URL_ENV).ok());
        TradingContext::build(base_url.as_deref(), args.timeout_secs, args.recv_window, args.log_file.clone())
    }

    pub fn build(
        base_url: Option<&str>,
        timeout_secs: u64,
        recv_window_ms: u64,
        journal_path: Option<PathBuf>,
    ) -> Result<TradingContext, ConfigError> {
        let base_url = match base_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            })?,
            None => TradingContext::default().base_url,
        };
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.to_string()));
        }
        base_url.join(ORDER_ENDPOINT).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if recv_window_ms == 0 || recv_window_ms > MAX_RECV_WINDOW_MS {
            return Err(ConfigError::RecvWindowOutOfRange {
                got: recv_window_ms,
                max: MAX_RECV_WINDOW_MS,
            });
        }
        if base_url.as_str().trim_end_matches('/') != TESTNET_BASE_URL {
            warn!("base url {} is not the Binance Futures testnet", base_url);
        }

        Ok(TradingContext {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            recv_window_ms,
            journal_path: journal_path.unwrap_or_else(default_journal_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn credentials_need_both_values() {
        let creds = Credentials::from_lookup(lookup_from(&[
            (API_KEY_ENV, "key"),
            (API_SECRET_ENV, "secret"),
        ]))
        .unwrap();
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.api_secret(), "secret");

        let missing = Credentials::from_lookup(lookup_from(&[(API_KEY_ENV, "key")])).unwrap_err();
        assert!(matches!(missing, ConfigError::MissingCredential(API_SECRET_ENV)));
    }

    #[test]
    fn empty_credentials_count_as_missing() {
        let err = Credentials::from_lookup(lookup_from(&[
            (API_KEY_ENV, "  "),
            (API_SECRET_ENV, "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(API_KEY_ENV)));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let creds = Credentials::new("visible-key", "top-secret");
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("visible-key"));
        assert!(!shown.contains("top-secret"));
    }

    #[test]
    fn defaults_point_at_testnet() {
        let ctx = TradingContext::build(None, DEFAULT_TIMEOUT_SECS, DEFAULT_RECV_WINDOW_MS, None).unwrap();
        assert_eq!(ctx.base_url.as_str(), "https://testnet.binancefuture.com/");
        assert_eq!(ctx.timeout, Duration::from_secs(10));
        assert_eq!(ctx.recv_window_ms, 5000);
        let name = ctx.journal_path.to_string_lossy().to_string();
        assert!(name.starts_with("quickorder_") && name.ends_with(".log"));
    }

    #[test]
    fn bad_settings_are_config_errors() {
        assert!(matches!(
            TradingContext::build(Some("not a url"), 10, 5000, None),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            TradingContext::build(Some("mailto:ops@example.com"), 10, 5000, None),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            TradingContext::build(Some("ftp://example.com"), 10, 5000, None),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            TradingContext::build(None, 0, 5000, None),
            Err(ConfigError::ZeroTimeout)
        ));
        assert!(matches!(
            TradingContext::build(None, 10, 60001, None),
            Err(ConfigError::RecvWindowOutOfRange { got: 60001, .. })
        ));
        assert!(matches!(
            TradingContext::build(None, 10, 0, None),
            Err(ConfigError::RecvWindowOutOfRange { got: 0, .. })
        ));
    }

    #[test]
    fn explicit_base_url_and_journal_are_kept() {
        let ctx = TradingContext::build(
            Some("http://127.0.0.1:8080"),
            3,
            1000,
            Some(PathBuf::from("orders.log")),
        )
        .unwrap();
        assert_eq!(ctx.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(ctx.journal_path, PathBuf::from("orders.log"));
    }
}
