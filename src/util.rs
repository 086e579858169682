use crate::error::Error;
use crate::types::{OrderAck, OrderKind, OrderRequest};

use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// Diagnostics go to stderr. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_target(false)
        .init();
}

pub fn measure_start(start: &mut Instant) {
    *start = Instant::now();
}

pub fn measure_end(start: &Instant, print: bool) -> Duration {
    let elapsed = start.elapsed();
    if print {
        info!("elapsed: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    }
    elapsed
}

pub fn render_banner() -> String {
    let rule = "=".repeat(60);
    format!("{rule}\n{:^60}\n{:^60}\n{rule}", "BINANCE FUTURES QUICK ORDER", "(TESTNET MODE)")
}

pub fn render_order_summary(request: &OrderRequest) -> String {
    let rule = "-".repeat(40);
    let mut out = format!(
        "ORDER SUMMARY:\n{rule}\n   Symbol:       {}\n   Side:         {}\n   Order Type:   {}\n   Quantity:     {}\n",
        request.symbol(),
        request.side(),
        request.order_type(),
        request.quantity()
    );
    if let Some(price) = request.price() {
        out.push_str(&format!("   Price:        {}\n", price));
    }
    out.push_str(&rule);
    out
}

pub fn render_order_result(ack: &OrderAck, kind: OrderKind) -> String {
    let rule = "=".repeat(50);
    let avg_price = ack
        .avg_price
        .filter(|p| !p.is_zero())
        .map_or_else(|| "N/A".to_string(), |p| p.to_string());
    let hint = match kind {
        OrderKind::Limit { .. } => "Your limit order is now active.\nIt will execute when the market reaches your price.",
        OrderKind::Market => "Market order sent for immediate execution.",
    };
    format!(
        "ORDER PLACED SUCCESSFULLY\n{rule}\n   Order ID:     {}\n   Status:       {}\n   Executed Qty: {}\n   Avg Price:    {}\n{rule}\n{hint}",
        ack.order_id, ack.status, ack.executed_qty, avg_price
    )
}

/// Ask on `output`, read one line from `input`. Only `yes`/`y` confirm.
pub fn confirm<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    write!(output, "Confirm this order? (yes/no): ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

/// Write a line for the user. A closed terminal is not worth failing the order over.
pub fn show<W: Write>(output: &mut W, text: &str) {
    if let Err(e) = writeln!(output, "{}", text) {
        warn!("cannot write to output: {}", e);
    }
}

pub fn print_error_if_necessary(e: &Error) {
    eprintln!("\nError: {}", e);
    if let Error::Validation(_) = e {
        eprintln!("Tip: use --help to see examples");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderType, RawOrder, Side};
    use crate::validate::validate;
    use rust_decimal_macros::dec;

    #[test]
    fn confirmation_needs_explicit_yes() {
        let mut sink = Vec::new();
        assert!(confirm("yes\n".as_bytes(), &mut sink).unwrap());
        assert!(confirm(" Y \n".as_bytes(), &mut sink).unwrap());
        assert!(!confirm("no\n".as_bytes(), &mut sink).unwrap());
        assert!(!confirm("\n".as_bytes(), &mut sink).unwrap());
        assert!(!confirm("".as_bytes(), &mut sink).unwrap());
        assert!(String::from_utf8(sink).unwrap().contains("Confirm this order?"));
    }

    #[test]
    fn summary_shows_price_only_for_limit() {
        let limit = validate(&RawOrder::new("ETHUSDT", "SELL", "LIMIT", "0.1", Some("2500"))).unwrap();
        let market = validate(&RawOrder::new("BTCUSDT", "BUY", "MARKET", "0.001", None)).unwrap();
        assert!(render_order_summary(&limit).contains("Price:        2500"));
        assert!(!render_order_summary(&market).contains("Price:"));
        assert!(render_order_summary(&market).contains("Order Type:   MARKET"));
    }

    #[test]
    fn result_hides_zero_average_price() {
        let ack = OrderAck {
            order_id: 7,
            client_order_id: String::new(),
            symbol: "ETHUSDT".to_string(),
            side: Side::Sell,
            order_type: OrderType::Limit,
            orig_qty: dec!(0.1),
            price: dec!(2500),
            avg_price: Some(dec!(0.00)),
            executed_qty: dec!(0),
            status: "NEW".to_string(),
            time_in_force: Some("GTC".to_string()),
            update_time: None,
        };
        let text = render_order_result(&ack, OrderKind::Limit { price: dec!(2500) });
        assert!(text.contains("Order ID:     7"));
        assert!(text.contains("Avg Price:    N/A"));
        assert!(text.contains("limit order is now active"));
    }

    #[test]
    fn show_appends_a_line() {
        let mut sink = Vec::new();
        show(&mut sink, "first");
        show(&mut sink, "second");
        assert_eq!(String::from_utf8(sink).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn banner_mentions_testnet() {
        assert!(render_banner().contains("TESTNET"));
    }
}
