//! Domain types for nightly rental pricing.
//!
//! This crate provides the value objects shared across the workspace:
//! - Prices and price bounds
//! - The linear demand model and its occupancy/revenue evaluators
//! - Optimization results and soft-signal warnings

/// Soft-signal enums.
pub mod enums;
/// Value objects.
pub mod value_objects;

pub use enums::ModelWarning;
pub use value_objects::OptimizationResult;
