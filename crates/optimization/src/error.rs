use rust_decimal::Decimal;

/// Hard failures of the price optimizer.
///
/// Malformed bounds are the only failure mode: the closed-form
/// computation itself cannot diverge or fail to converge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizeError {
    /// Price bounds are non-positive or inverted.
    #[error("invalid price bounds: expected 0 < min < max, got min={min}, max={max}")]
    InvalidBounds { min: Decimal, max: Decimal },
}
