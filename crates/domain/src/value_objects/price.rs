use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A nightly price in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the price rounded to 2 decimal places.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            value: self.value.round_dp(2),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}
