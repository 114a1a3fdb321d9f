//! Evenly spaced revenue/occupancy samples across a price range.
//!
//! Charting callers plot these curves next to the optimum; each point is
//! just a re-evaluation of the demand model, no new algorithm.

use crate::error::OptimizeError;
use rental_pricing_domain::value_objects::demand_model::DemandModel;
use rental_pricing_domain::value_objects::percentage::Percentage;
use rental_pricing_domain::value_objects::price::Price;
use rental_pricing_domain::value_objects::price_bounds::PriceBounds;
use rust_decimal::Decimal;

/// One sampled point on the price curve.
#[derive(Debug, Clone, Copy)]
pub struct SweepPoint {
    pub price: Price,
    pub occupancy: Percentage,
    pub revenue: Decimal,
}

/// Samples the demand model at `samples` evenly spaced prices across the
/// bounds, endpoints included. Fewer than 2 samples are bumped to 2 so
/// both endpoints always appear.
///
/// # Errors
///
/// [`OptimizeError::InvalidBounds`] when the bounds are non-positive or
/// inverted.
pub fn sweep_curve(
    bounds: &PriceBounds,
    model: &DemandModel,
    samples: usize,
) -> Result<Vec<SweepPoint>, OptimizeError> {
    if !bounds.is_valid() {
        return Err(OptimizeError::InvalidBounds {
            min: bounds.min.value,
            max: bounds.max.value,
        });
    }

    let samples = samples.max(2);
    let step = (bounds.max.value - bounds.min.value) / Decimal::from(samples as u64 - 1);

    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        // Pin the last sample to max exactly so step rounding cannot drift.
        let price = if i == samples - 1 {
            bounds.max
        } else {
            Price::new(bounds.min.value + step * Decimal::from(i as u64))
        };
        points.push(SweepPoint {
            price,
            occupancy: model.occupancy_at(price),
            revenue: model.revenue_at(price),
        });
    }

    Ok(points)
}
