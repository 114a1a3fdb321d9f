pub mod demand_model;
pub mod optimization_result;
pub mod percentage;
pub mod price;
pub mod price_bounds;

pub use demand_model::DemandModel;
pub use optimization_result::OptimizationResult;
pub use percentage::Percentage;
pub use price::Price;
pub use price_bounds::PriceBounds;
