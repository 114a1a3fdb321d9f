//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use rental_pricing_optimization::prelude::*;
//! ```

pub use crate::error::OptimizeError;
pub use crate::optimizer::optimize;
pub use crate::sweep::{SweepPoint, sweep_curve};

pub use rental_pricing_domain::enums::ModelWarning;
pub use rental_pricing_domain::value_objects::demand_model::{DemandModel, NIGHTS_PER_MONTH};
pub use rental_pricing_domain::value_objects::optimization_result::OptimizationResult;
pub use rental_pricing_domain::value_objects::percentage::Percentage;
pub use rental_pricing_domain::value_objects::price::Price;
pub use rental_pricing_domain::value_objects::price_bounds::PriceBounds;
