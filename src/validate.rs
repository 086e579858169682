use crate::defines::*;
use crate::error::ValidationError;
use crate::types::*;

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

fn symbol_regex() -> &'static Regex {
    static SYMBOL: OnceLock<Regex> = OnceLock::new();
    SYMBOL.get_or_init(|| Regex::new(SYMBOL_PATTERN).expect("symbol pattern is a valid regex"))
}

fn decimal_regex() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| Regex::new(DECIMAL_PATTERN).expect("decimal pattern is a valid regex"))
}

/// Validate `raw`, producing an immutable [`OrderRequest`].
///
/// Checks run symbol, side, type, quantity, price; first failure wins.
/// A `price` given for a MARKET order is not looked at. Lot size and tick
/// size are left to the exchange.
pub fn validate(raw: &RawOrder) -> Result<OrderRequest, ValidationError> {
    let symbol = validate_symbol(&raw.symbol)?;
    let side = Side::from_str(&raw.side)?;
    let order_type = OrderType::from_str(&raw.order_type)?;
    let quantity = validate_quantity(&raw.quantity)?;

    let kind = match order_type {
        OrderType::Market => OrderKind::Market,
        OrderType::Limit => {
            let price = match raw.price.as_deref().map(str::trim) {
                None | Some("") => return Err(ValidationError::MissingPrice),
                Some(p) => validate_price(p)?,
            };
            OrderKind::Limit { price }
        }
    };

    Ok(OrderRequest { symbol, side, quantity, kind })
}

pub fn validate_symbol(symbol: &str) -> Result<String, ValidationError> {
    let symbol = symbol.trim().to_uppercase();
    if !symbol_regex().is_match(&symbol) {
        return Err(ValidationError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}

pub fn validate_quantity(quantity: &str) -> Result<Decimal, ValidationError> {
    parse_positive(quantity, "quantity", ValidationError::InvalidQuantity)
}

pub fn validate_price(price: &str) -> Result<Decimal, ValidationError> {
    parse_positive(price, "price", ValidationError::InvalidPrice)
}

/// Only plain digits are accepted, and never rounded: what is sent is what was typed.
fn parse_positive(
    value: &str,
    field: &'static str,
    invalid: fn(String) -> ValidationError,
) -> Result<Decimal, ValidationError> {
    let value = value.trim();
    if !decimal_regex().is_match(value) {
        return Err(invalid(value.to_string()));
    }
    let parsed = Decimal::from_str_exact(value).map_err(|_| ValidationError::ExcessPrecision {
        field,
        value: value.to_string(),
    })?;
    if parsed.is_zero() {
        return Err(invalid(value.to_string()));
    }
    Ok(parsed)
}

/// Whether the quantity is below what most pairs accept. Only worth a warning;
/// the exchange has the final say.
pub fn is_small_quantity(quantity: Decimal) -> bool {
    Decimal::from_str(SMALL_QUANTITY_HINT).map_or(false, |hint| quantity < hint)
}
