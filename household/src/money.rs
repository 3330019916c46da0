//! Money - an amount tagged with a currency code
//!
//! Conversion always goes through USD using fixed rates. Unrecognized
//! currency labels are kept as-is and convert at parity with USD.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Currency Codes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
    Usd,
    Gbp,
    Eur,
    Can,
    /// Any other label; treated as USD for conversion
    Other(String),
}

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Can => "CAN",
            CurrencyCode::Other(label) => label,
        }
    }

    /// Multiplier taking one unit of this currency to USD
    fn to_usd_rate(&self) -> f64 {
        match self {
            CurrencyCode::Gbp => 2.0,
            CurrencyCode::Eur => 2.0 / 3.0,
            CurrencyCode::Can => 4.0 / 5.0,
            CurrencyCode::Usd | CurrencyCode::Other(_) => 1.0,
        }
    }

    /// Multiplier taking one USD to this currency
    fn from_usd_rate(&self) -> f64 {
        match self {
            CurrencyCode::Gbp => 0.5,
            CurrencyCode::Eur => 1.5,
            CurrencyCode::Can => 1.25,
            CurrencyCode::Usd | CurrencyCode::Other(_) => 1.0,
        }
    }
}

impl From<&str> for CurrencyCode {
    fn from(label: &str) -> Self {
        match label {
            "USD" => CurrencyCode::Usd,
            "GBP" => CurrencyCode::Gbp,
            "EUR" => CurrencyCode::Eur,
            "CAN" => CurrencyCode::Can,
            other => CurrencyCode::Other(other.to_string()),
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(label: String) -> Self {
        match label.as_str() {
            "USD" | "GBP" | "EUR" | "CAN" => CurrencyCode::from(label.as_str()),
            _ => CurrencyCode::Other(label),
        }
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        match code {
            CurrencyCode::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Money
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: CurrencyCode,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Convert into `target`, rounding to the nearest whole unit (ties away
    /// from zero) once after normalizing to USD and once after the final rate.
    pub fn convert(&self, target: impl Into<CurrencyCode>) -> Money {
        let target = target.into();
        let usd = (self.amount as f64 * self.currency.to_usd_rate()).round();
        let converted = (usd * target.from_usd_rate()).round();

        Money {
            amount: converted as i64,
            currency: target,
        }
    }

    /// Sum in `other`'s currency; the receiver is converted first.
    pub fn add(&self, other: &Money) -> Money {
        let converted = self.convert(other.currency.clone());
        Money {
            amount: converted.amount + other.amount,
            currency: other.currency.clone(),
        }
    }

    /// Difference in `other`'s currency; the receiver is converted first.
    pub fn subtract(&self, other: &Money) -> Money {
        let converted = self.convert(other.currency.clone());
        Money {
            amount: converted.amount - other.amount,
            currency: other.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
