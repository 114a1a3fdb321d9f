//! Closed-form price optimization for a linear demand model.
//!
//! Revenue as a function of the nightly price is a concave quadratic on
//! the branch where occupancy is positive, so the constrained maximum is
//! the unconstrained critical point `a / (2b)` clamped into the price
//! bounds. No iterative solver is involved; the computation is exact,
//! deterministic and O(1).

/// Prelude module for convenient imports.
pub mod prelude;

/// Error taxonomy.
pub mod error;
/// The price optimizer.
pub mod optimizer;
/// Price sweeps for charting callers.
pub mod sweep;

pub use error::OptimizeError;
pub use optimizer::optimize;
pub use sweep::{SweepPoint, sweep_curve};
