//! Price formatting

use crate::refresh::PriceReading;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder shown until the first successful fetch
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Maximum fraction digits shown for a price
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a number the way en-US locale formatting does
///
/// Thousands are grouped with `,`, at most three fraction digits are kept
/// (rounding half away from zero) and trailing zeros are dropped.
pub fn format_price(price: Decimal) -> String {
    let rounded = price
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Text for the live price card: `$65,000` or `$Loading...`
pub fn price_label(reading: &PriceReading) -> String {
    match reading.price() {
        Some(price) => format!("${}", format_price(price)),
        None => format!("${}", LOADING_PLACEHOLDER),
    }
}
