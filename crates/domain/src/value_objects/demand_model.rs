use crate::value_objects::percentage::Percentage;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nights per month assumed by the revenue projection.
pub const NIGHTS_PER_MONTH: u32 = 30;

/// A linear demand curve for a single listing.
///
/// Occupancy as a function of the nightly price `p` is
/// `occupancy(p) = a - b * p` in percentage points, clamped to `[0, 100]`:
/// `intercept` (`a`) is the occupancy percentage at price zero and
/// `sensitivity` (`b`) is the percentage points of occupancy lost per
/// currency unit of price.
///
/// Projected monthly revenue is `p * occupancy_fraction(p) * 30`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DemandModel {
    pub intercept: Decimal,
    pub sensitivity: Decimal,
}

impl DemandModel {
    pub fn new(intercept: Decimal, sensitivity: Decimal) -> Self {
        Self {
            intercept,
            sensitivity,
        }
    }

    /// A demand curve that does not slope downward (`b <= 0`) has no
    /// interior revenue maximum. The optimizer still handles it, but it
    /// usually indicates bad parameter estimates upstream.
    pub fn is_degenerate(&self) -> bool {
        self.sensitivity <= Decimal::ZERO
    }

    /// Occupancy fraction in `[0, 1]` at the given price.
    pub fn occupancy_fraction_at(&self, price: Price) -> Decimal {
        let pct = self.intercept - self.sensitivity * price.value;
        (pct / Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE)
    }

    /// Occupancy percentage in `[0, 100]` at the given price.
    pub fn occupancy_at(&self, price: Price) -> Percentage {
        Percentage::from_fraction(self.occupancy_fraction_at(price))
    }

    /// Projected monthly revenue at the given price.
    pub fn revenue_at(&self, price: Price) -> Decimal {
        price.value * self.occupancy_fraction_at(price) * Decimal::from(NIGHTS_PER_MONTH)
    }
}
