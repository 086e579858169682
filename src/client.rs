use crate::config::Credentials;
use crate::defines::*;
use crate::error::{ConfigError, SubmissionError};
use crate::journal::Journal;
use crate::signer::signed_query;
use crate::types::{BinanceErrorResponse, OrderAck, OrderRequest, TradingContext};

use isahc::{prelude::*, HttpClient, Request};
use log::{debug, error, info};
use url::Url;

pub struct ExchangeClient {
    http: HttpClient,
    order_url: Url,
    recv_window_ms: u64,
    journal: Journal,
}

impl ExchangeClient {
    /// A failure here is journaled before it is returned, since `journal` is consumed.
    pub fn new(context: &TradingContext, mut journal: Journal) -> Result<ExchangeClient, ConfigError> {
        let built = ExchangeClient::connect(context);
        match built {
            Ok((http, order_url)) => Ok(ExchangeClient {
                http,
                order_url,
                recv_window_ms: context.recv_window_ms,
                journal,
            }),
            Err(e) => {
                journal.record_config_failure(&e);
                Err(e)
            }
        }
    }

    fn connect(context: &TradingContext) -> Result<(HttpClient, Url), ConfigError> {
        let order_url = context
            .base_url
            .join(ORDER_ENDPOINT)
            .map_err(|source| ConfigError::InvalidBaseUrl {
                url: context.base_url.to_string(),
                source,
            })?;
        let http = HttpClient::builder()
            .timeout(context.timeout)
            .connect_timeout(context.timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok((http, order_url))
    }

    /// Sign and send `request`, journal the attempt, and return the exchange's answer.
    pub fn submit(&mut self, request: &OrderRequest, credentials: &Credentials) -> Result<OrderAck, SubmissionError> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        let (unsigned, signed) = signed_query(&request.to_params(), self.recv_window_ms, timestamp_ms, credentials);

        info!("placing {} order: {}", request.order_type(), request);
        debug!("POST {} {}", self.order_url, unsigned);

        let outcome = self.send(&signed, credentials);
        self.journal.record_submission(&unsigned, &outcome);

        match &outcome {
            Ok(ack) => info!("order {} accepted with status {}", ack.order_id, ack.status),
            Err(e) => error!("order placement failed: {}", e),
        }
        outcome
    }

    fn send(&self, query: &str, credentials: &Credentials) -> Result<OrderAck, SubmissionError> {
        let request = Request::post(self.order_url.as_str())
            .header(API_KEY_HEADER, credentials.api_key())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(query.to_string())
            .map_err(isahc::Error::from)?;

        let mut response = self.http.send(request)?;
        let status = response.status();
        let body = response.text().map_err(isahc::Error::from)?;
        debug!("http {} {}", status.as_u16(), body);

        parse_response(status.as_u16(), status.is_success(), body)
    }
}

/// Binance sometimes reports a failure inside a 200, so the error payload is
/// checked whatever the status.
fn parse_response(status: u16, success: bool, body: String) -> Result<OrderAck, SubmissionError> {
    if success {
        if let Ok(ack) = serde_json::from_str::<OrderAck>(&body) {
            return Ok(ack);
        }
    }
    match serde_json::from_str::<BinanceErrorResponse>(&body) {
        Ok(err) => Err(SubmissionError::ExchangeRejected {
            status,
            code: err.code,
            message: err.msg,
        }),
        Err(_) => Err(SubmissionError::MalformedResponse { status, body }),
    }
}
