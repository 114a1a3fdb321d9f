use crate::enums::ModelWarning;
use crate::value_objects::demand_model::DemandModel;
use crate::value_objects::percentage::Percentage;
use crate::value_objects::price::Price;
use crate::value_objects::price_bounds::PriceBounds;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recommended price point, created fresh on each optimizer call.
///
/// All three output fields are rounded to 2 decimal places. The inputs
/// are echoed back for traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Revenue-maximizing nightly price within the bounds.
    pub optimal_price: Price,
    /// Expected occupancy at that price, in `[0, 100]`.
    pub optimal_occupancy: Percentage,
    /// Projected monthly revenue at that price.
    pub optimal_revenue: Decimal,
    /// The bounds the optimization ran under.
    pub bounds: PriceBounds,
    /// The demand model the optimization ran under.
    pub model: DemandModel,
    /// Soft signal, set when the model was degenerate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<ModelWarning>,
}
