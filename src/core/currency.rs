use crate::core::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the gateway, with their ISO 4217 numeric codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian Ruble, the acquirer's home currency
    #[default]
    RUB,
    /// US Dollar
    USD,
    /// Euro
    EUR,
}

impl Currency {
    /// ISO 4217 numeric code sent in the `currency` form field
    pub fn numeric_code(&self) -> u16 {
        match self {
            Currency::RUB => 643,
            Currency::USD => 840,
            Currency::EUR => 978,
        }
    }

    pub fn all() -> [Currency; 3] {
        [Currency::RUB, Currency::USD, Currency::EUR]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::RUB => write!(f, "RUB"),
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
        }
    }
}

// Codes are matched exactly; "rub" is not a currency the gateway knows.
impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUB" => Ok(Currency::RUB),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(AppError::validation(format!("Unsupported currency: {}", s))),
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
