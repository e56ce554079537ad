//! Currency codes and their display rules
//!
//! Trips carry a single currency; amounts are never converted between
//! currencies. The well-known codes get a display symbol and a decimal
//! rule; anything else passes through verbatim and is displayed by its
//! code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A trip's currency
///
/// Serialized as its code string ("USD", "EUR", ...), so unknown codes
/// round-trip through storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Inr,
    /// Any other code, kept verbatim
    Other(String),
}

impl Currency {
    /// Resolve a currency code, falling back to passthrough for unknown codes
    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "GBP" => Self::Gbp,
            "JPY" => Self::Jpy,
            "CAD" => Self::Cad,
            "AUD" => Self::Aud,
            "INR" => Self::Inr,
            other => Self::Other(other.to_string()),
        }
    }

    /// The ISO-style code for this currency
    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Inr => "INR",
            Self::Other(code) => code,
        }
    }

    /// The display symbol, or the raw code when no symbol is known
    pub fn symbol(&self) -> &str {
        match self {
            Self::Usd => "$",
            Self::Eur => "\u{20ac}",
            Self::Gbp => "\u{a3}",
            Self::Jpy => "\u{a5}",
            Self::Cad => "CA$",
            Self::Aud => "A$",
            Self::Inr => "\u{20b9}",
            Self::Other(code) => code,
        }
    }

    /// Decimal places used when rendering amounts in this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
