//! Display formatting for money and billing dates.
//!
//! Everything here is presentation only: the analytics layer returns plain
//! numbers and dates, and no cross-currency conversion ever happens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Well-known display symbol, when one exists.
    pub fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{a3}"),
            "JPY" => Some("\u{a5}"),
            _ => None,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Formats an amount with its currency symbol, grouped thousands, and two
/// decimal places. Unknown currencies fall back to a code prefix.
pub fn format_amount(value: f64, currency: &CurrencyCode) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let magnitude = format!("{}.{:02}", group_thousands(cents / 100), cents % 100);
    let rendered = match currency.symbol() {
        Some(symbol) => format!("{symbol}{magnitude}"),
        None => format!("{} {}", currency.as_str(), magnitude),
    };
    if negative {
        format!("-{rendered}")
    } else {
        rendered
    }
}

/// Medium date style used throughout the views, e.g. "Jan 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
