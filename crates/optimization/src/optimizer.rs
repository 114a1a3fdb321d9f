//! The price optimizer.

use crate::error::OptimizeError;
use rental_pricing_domain::enums::ModelWarning;
use rental_pricing_domain::value_objects::demand_model::DemandModel;
use rental_pricing_domain::value_objects::optimization_result::OptimizationResult;
use rental_pricing_domain::value_objects::price::Price;
use rental_pricing_domain::value_objects::price_bounds::PriceBounds;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

/// Finds the revenue-maximizing nightly price within the bounds.
///
/// Revenue `30 * p * occupancy_fraction(p)` is a concave quadratic in
/// `p` wherever occupancy is strictly between its floor and cap, with
/// critical point `a / (2b)`. Below the cap edge `(a - 100) / b`
/// occupancy is pinned at 100% and revenue is linear and increasing, so
/// the unconstrained maximizer is `max(a / (2b), (a - 100) / b)`;
/// clamping it into the bounds yields the constrained optimum directly.
///
/// The reported price is rounded to cents toward the interior of the
/// bounds, so it carries at most 2 decimal places whenever the bounds
/// admit such a price, and never leaves them.
///
/// A degenerate model (`b <= 0`) has no interior maximum; the better of
/// the two bounds is returned along with a
/// [`ModelWarning::DegenerateDemand`] soft signal.
///
/// # Errors
///
/// [`OptimizeError::InvalidBounds`] when the bounds are non-positive or
/// inverted. There are no other failure modes.
pub fn optimize(
    bounds: &PriceBounds,
    model: &DemandModel,
) -> Result<OptimizationResult, OptimizeError> {
    if !bounds.is_valid() {
        return Err(OptimizeError::InvalidBounds {
            min: bounds.min.value,
            max: bounds.max.value,
        });
    }

    let candidate = if model.is_degenerate() {
        warn!(
            intercept = %model.intercept,
            sensitivity = %model.sensitivity,
            "degenerate demand model, evaluating bounds instead of critical point"
        );
        // Revenue is non-decreasing in price when b <= 0, so ties go to max.
        if model.revenue_at(bounds.min) > model.revenue_at(bounds.max) {
            bounds.min
        } else {
            bounds.max
        }
    } else {
        // The critical point lies inside the quadratic branch only when
        // a <= 200; for steeper intercepts the cap edge is the maximizer.
        let critical = model.intercept / (Decimal::TWO * model.sensitivity);
        let cap_edge = (model.intercept - Decimal::ONE_HUNDRED) / model.sensitivity;
        let unconstrained = Price::new(critical.max(cap_edge));
        debug!(unconstrained = %unconstrained, "clamping unconstrained optimum into bounds");
        bounds.clamp(unconstrained)
    };

    let optimal_price = round_within(bounds, candidate);

    Ok(OptimizationResult {
        optimal_price,
        optimal_occupancy: model.occupancy_at(optimal_price).rounded(),
        optimal_revenue: model.revenue_at(optimal_price).round_dp(2),
        bounds: *bounds,
        model: *model,
        warning: model
            .is_degenerate()
            .then_some(ModelWarning::DegenerateDemand),
    })
}

/// Rounds a price to cents without leaving the bounds.
///
/// Nearest-cent rounding can cross a bound that itself has more than 2
/// decimals, so in that case the price is rounded toward the interior
/// instead. Bounds narrower than a cent admit no such price; the
/// in-bounds guarantee wins and the nearest bound is returned as is.
fn round_within(bounds: &PriceBounds, price: Price) -> Price {
    let rounded = price.rounded();
    if bounds.contains(rounded) {
        return rounded;
    }

    let strategy = if rounded.value < bounds.min.value {
        RoundingStrategy::ToPositiveInfinity
    } else {
        RoundingStrategy::ToNegativeInfinity
    };
    let nudged = Price::new(price.value.round_dp_with_strategy(2, strategy));
    if bounds.contains(nudged) {
        nudged
    } else {
        bounds.clamp(rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::sweep_curve;
    use rust_decimal_macros::dec;

    fn bounds(min: Decimal, max: Decimal) -> PriceBounds {
        PriceBounds::new(Price::new(min), Price::new(max))
    }

    #[test]
    fn test_interior_optimum() {
        // a=100, b=1: critical point at 50, inside [10, 200].
        // occupancy(50) = 50%, revenue = 50 * 0.5 * 30 = 750.
        let result = optimize(&bounds(dec!(10), dec!(200)), &DemandModel::new(dec!(100), dec!(1)))
            .unwrap();

        assert_eq!(result.optimal_price.value, dec!(50.00));
        assert_eq!(result.optimal_occupancy.0, dec!(50.00));
        assert_eq!(result.optimal_revenue, dec!(750.00));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_clamped_to_lower_bound() {
        // Critical point 50 sits below min=60, so the optimum is min.
        // occupancy(60) = 40%, revenue = 60 * 0.4 * 30 = 720.
        let result = optimize(&bounds(dec!(60), dec!(200)), &DemandModel::new(dec!(100), dec!(1)))
            .unwrap();

        assert_eq!(result.optimal_price.value, dec!(60.00));
        assert_eq!(result.optimal_occupancy.0, dec!(40.00));
        assert_eq!(result.optimal_revenue, dec!(720.00));
    }

    #[test]
    fn test_clamped_to_upper_bound() {
        // a=50, b=0.5: critical point 50 sits above max=40.
        // occupancy(40) = 30%, revenue = 40 * 0.3 * 30 = 360.
        let result = optimize(&bounds(dec!(10), dec!(40)), &DemandModel::new(dec!(50), dec!(0.5)))
            .unwrap();

        assert_eq!(result.optimal_price.value, dec!(40.00));
        assert_eq!(result.optimal_occupancy.0, dec!(30.00));
        assert_eq!(result.optimal_revenue, dec!(360.00));
    }

    #[test]
    fn test_degenerate_zero_sensitivity() {
        // b=0: occupancy is constant, revenue grows with price, pick max.
        let result = optimize(&bounds(dec!(10), dec!(200)), &DemandModel::new(dec!(80), dec!(0)))
            .unwrap();

        assert_eq!(result.optimal_price.value, dec!(200.00));
        assert_eq!(result.optimal_occupancy.0, dec!(80.00));
        assert_eq!(result.optimal_revenue, dec!(4800.00));
        assert_eq!(result.warning, Some(ModelWarning::DegenerateDemand));
    }

    #[test]
    fn test_degenerate_negative_sensitivity() {
        // b<0: demand rises with price, so max still wins.
        let result = optimize(&bounds(dec!(10), dec!(50)), &DemandModel::new(dec!(20), dec!(-1)))
            .unwrap();

        assert_eq!(result.optimal_price.value, dec!(50.00));
        assert_eq!(result.warning, Some(ModelWarning::DegenerateDemand));
    }

    #[test]
    fn test_invalid_bounds() {
        let model = DemandModel::new(dec!(100), dec!(1));

        for (min, max) in [
            (dec!(0), dec!(100)),
            (dec!(-10), dec!(100)),
            (dec!(200), dec!(100)),
            (dec!(100), dec!(100)),
        ] {
            let err = optimize(&bounds(min, max), &model).unwrap_err();
            assert_eq!(err, OptimizeError::InvalidBounds { min, max });
        }
    }

    #[test]
    fn test_result_always_within_bounds() {
        let b = bounds(dec!(30), dec!(120));

        for (a, sens) in [
            (dec!(100), dec!(1)),
            (dec!(100), dec!(5)),    // critical point 10, below min
            (dec!(100), dec!(0.1)),  // critical point 500, above max
            (dec!(250), dec!(1)),    // intercept above 100
            (dec!(5), dec!(2)),      // occupancy zero over the whole range
        ] {
            let result = optimize(&b, &DemandModel::new(a, sens)).unwrap();
            assert!(b.contains(result.optimal_price), "a={a}, b={sens}");
            assert!(result.optimal_occupancy.0 >= dec!(0));
            assert!(result.optimal_occupancy.0 <= dec!(100));
            assert!(result.optimal_revenue >= dec!(0));
        }
    }

    #[test]
    fn test_idempotent() {
        let b = bounds(dec!(10), dec!(200));
        let model = DemandModel::new(dec!(95), dec!(0.7));

        let first = optimize(&b, &model).unwrap();
        let second = optimize(&b, &model).unwrap();

        assert_eq!(first.optimal_price, second.optimal_price);
        assert_eq!(first.optimal_occupancy, second.optimal_occupancy);
        assert_eq!(first.optimal_revenue, second.optimal_revenue);
    }

    #[test]
    fn test_capped_region_optimum() {
        // a=250, b=1: occupancy sits at its 100% cap up to the cap edge
        // (250-100)/1 = 150, where revenue 30*p peaks; the critical
        // point 125 lies inside the capped region and is not optimal.
        let result = optimize(&bounds(dec!(30), dec!(200)), &DemandModel::new(dec!(250), dec!(1)))
            .unwrap();

        assert_eq!(result.optimal_price.value, dec!(150.00));
        assert_eq!(result.optimal_occupancy.0, dec!(100.00));
        assert_eq!(result.optimal_revenue, dec!(4500.00));
    }

    #[test]
    fn test_optimum_dominates_sweep() {
        // The reported optimum must not be beaten by any swept sample
        // over the same bounds, capped region included.
        let b = bounds(dec!(30), dec!(200));
        let model = DemandModel::new(dec!(250), dec!(1));

        let result = optimize(&b, &model).unwrap();
        for point in sweep_curve(&b, &model, 200).unwrap() {
            assert!(
                result.optimal_revenue >= point.revenue,
                "sweep beats optimum at price {}",
                point.price
            );
        }
    }

    #[test]
    fn test_rounding_toward_interior() {
        // min has more than 2 decimals; nearest-cent rounding of the
        // clamped price would land below min, so it rounds up instead.
        let b = bounds(dec!(60.005), dec!(200));
        let result = optimize(&b, &DemandModel::new(dec!(100), dec!(1))).unwrap();

        assert_eq!(result.optimal_price.value, dec!(60.01));
        assert!(b.contains(result.optimal_price));
    }

    #[test]
    fn test_sub_cent_bounds_stay_in_bounds() {
        // No whole-cent price exists inside these bounds; the in-bounds
        // guarantee wins over the 2-decimal one.
        let b = bounds(dec!(60.004), dec!(60.006));
        let result = optimize(&b, &DemandModel::new(dec!(100), dec!(1))).unwrap();

        assert!(b.contains(result.optimal_price));
    }

    #[test]
    fn test_echoes_inputs() {
        let b = bounds(dec!(10), dec!(200));
        let model = DemandModel::new(dec!(100), dec!(1));

        let result = optimize(&b, &model).unwrap();
        assert_eq!(result.bounds.min.value, dec!(10));
        assert_eq!(result.bounds.max.value, dec!(200));
        assert_eq!(result.model.intercept, dec!(100));
        assert_eq!(result.model.sensitivity, dec!(1));
    }
}
