use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The box constraint on the nightly price: `min <= p <= max`.
///
/// Construction does not validate; the optimizer rejects bounds that are
/// non-positive or inverted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: Price,
    pub max: Price,
}

impl PriceBounds {
    pub fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// Well-formed bounds have `0 < min < max`.
    pub fn is_valid(&self) -> bool {
        self.min.value > Decimal::ZERO && self.min.value < self.max.value
    }

    pub fn contains(&self, price: Price) -> bool {
        price.value >= self.min.value && price.value <= self.max.value
    }

    /// Clamps a price into the bounds.
    #[must_use]
    pub fn clamp(&self, price: Price) -> Price {
        Price::new(price.value.clamp(self.min.value, self.max.value))
    }
}
