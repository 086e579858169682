use crate::error::{ConfigError, SubmissionError, ValidationError};
use crate::types::{OrderAck, RawOrder};

use log::error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub struct Journal {
    sink: Box<dyn Write + Send>,
}

impl Journal {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Journal, ConfigError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::Journal {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Journal::from_writer(file))
    }

    pub fn from_writer(sink: impl Write + Send + 'static) -> Journal {
        Journal { sink: Box::new(sink) }
    }

    /// `query` is the unsigned query string.
    pub fn record_submission(&mut self, query: &str, outcome: &Result<OrderAck, SubmissionError>) {
        let outcome = match outcome {
            Ok(ack) => format!("ACCEPTED orderId={} status={}", ack.order_id, ack.status),
            Err(e) => describe_submission_error(e),
        };
        self.write_line("SUBMIT", query, &outcome);
    }

    pub fn record_validation_failure(&mut self, raw: &RawOrder, err: &ValidationError) {
        let request = format!(
            "symbol={} side={} type={} quantity={} price={}",
            raw.symbol,
            raw.side,
            raw.order_type,
            raw.quantity,
            raw.price.as_deref().unwrap_or("-")
        );
        self.write_line("VALIDATE", &request, &format!("INVALID {}: {}", err.field(), err));
    }

    pub fn record_config_failure(&mut self, err: &ConfigError) {
        self.write_line("CONFIG", "-", &format!("FAILED {}", err));
    }

    fn write_line(&mut self, stage: &str, request: &str, outcome: &str) {
        let line = format!(
            "{} | {} | {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            stage,
            request,
            outcome
        );
        let written = self.sink.write_all(line.as_bytes()).and_then(|_| self.sink.flush());
        if let Err(e) = written {
            error!("failed to write order journal: {}", e);
        }
    }
}

fn describe_submission_error(err: &SubmissionError) -> String {
    match err {
        SubmissionError::Network { source } => format!("NETWORK {}", source),
        SubmissionError::ExchangeRejected { status, code, message } => {
            format!("REJECTED http={} code={} msg={}", status, code, message)
        }
        SubmissionError::MalformedResponse { status, body } => {
            format!("MALFORMED http={} body={}", status, body.replace('\n', " "))
        }
    }
}
