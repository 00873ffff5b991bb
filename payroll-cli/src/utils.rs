use rust_decimal::Decimal;
use thiserror::Error;

use payroll_core::calculations::common::round_half_up;

/// Error returned when a command-line amount is rejected.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),
}

/// Trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a non-negative money amount such as `"12,500.50"`.
///
/// A leading `$` is accepted and ignored. Runs as a clap value parser,
/// before logging is set up, so failures are reported only through the
/// returned error.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    let normalized = normalized.strip_prefix('$').unwrap_or(&normalized);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Decimal = normalized
        .parse()
        .map_err(|source| ParseAmountError::Invalid {
            input: s.to_string(),
            source,
        })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ParseAmountError::Negative(amount));
    }
    Ok(amount)
}

/// Formats an amount as currency rounded to cents, e.g. `$1,234.56` or
/// `-$390.12`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((&text, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${grouped}.{cents}", if negative { "-" } else { "" })
}

/// Formats a rate as a percentage with up to four decimals, e.g. `10.88%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).round_dp(4).normalize())
}
