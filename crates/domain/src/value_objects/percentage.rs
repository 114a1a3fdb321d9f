use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An occupancy percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    /// Builds a percentage from a fraction in `[0, 1]`.
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction * Decimal::ONE_HUNDRED)
    }

    /// The percentage as a fraction in `[0, 1]`.
    pub fn to_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Returns the percentage rounded to 2 decimal places.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
