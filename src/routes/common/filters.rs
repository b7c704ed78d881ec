//! Askama filters shared by the html views.

use bigdecimal::{BigDecimal, FromPrimitive, Zero};
use std::borrow::Borrow;

/// Renders a number rounded to two decimal places.
pub fn two_decimals(value: impl Borrow<f64>) -> askama::Result<String> {
    Ok(format_two_decimals(*value.borrow()))
}

pub fn format_two_decimals(value: f64) -> String {
    match BigDecimal::from_f64(value) {
        // BigDecimal prints zero without its scale
        Some(decimal) if decimal.round(2).is_zero() => "0.00".to_string(),
        Some(decimal) => decimal.round(2).with_scale(2).to_string(),
        // NaN and infinities
        None => value.to_string(),
    }
}
