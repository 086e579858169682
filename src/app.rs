use crate::client::ExchangeClient;
use crate::config::Credentials;
use crate::error::{ConfigError, Result};
use crate::impls::default_journal_path;
use crate::journal::Journal;
use crate::types::*;
use crate::util::*;
use crate::validate::{is_small_quantity, validate};

use log::{info, warn};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Place the one order described by `args`.
///
/// The journal is opened before anything else so that every later failure
/// leaves an entry; only a journal that cannot be opened goes unrecorded.
/// The confirmation is read from `input`, everything meant for the user is
/// written to `output`.
pub fn run<R: BufRead, W: Write>(
    args: &CommandlineArgs,
    load_credentials: impl FnOnce() -> std::result::Result<Credentials, ConfigError>,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let journal_path = args.log_file.clone().unwrap_or_else(default_journal_path);
    let mut journal = Journal::open(&journal_path)?;
    info!("recording orders to {}", journal_path.display());

    let trading_context = match TradingContext::from_args(args) {
        Ok(context) => context,
        Err(e) => {
            journal.record_config_failure(&e);
            return Err(e.into());
        }
    };

    let credentials = match load_credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            journal.record_config_failure(&e);
            return Err(e.into());
        }
    };

    let raw = RawOrder::from(args);
    let request = match validate(&raw) {
        Ok(request) => request,
        Err(e) => {
            journal.record_validation_failure(&raw, &e);
            return Err(e.into());
        }
    };

    if request.order_type() == OrderType::Market && raw.price.is_some() {
        warn!("--price is ignored for MARKET orders");
        show(&mut output, "Note: --price is ignored for MARKET orders.");
    }
    if is_small_quantity(request.quantity()) {
        warn!("quantity {} might be too small for some symbols", request.quantity());
    }

    show(&mut output, &format!("\n{}", render_order_summary(&request)));
    if !args.yes {
        let confirmed = confirm(&mut input, &mut output).unwrap_or_else(|e| {
            warn!("cannot read confirmation: {}", e);
            false
        });
        if !confirmed {
            show(&mut output, "\nOrder cancelled by user.");
            return Ok(());
        }
    }

    let mut client = ExchangeClient::new(&trading_context, journal)?;

    let mut start = Instant::now();
    measure_start(&mut start);
    let ack = client.submit(&request, &credentials)?;
    measure_end(&start, true);

    show(&mut output, &format!("\n{}", render_order_result(&ack, request.kind())));
    Ok(())
}
