use serde::{Deserialize, Serialize};
use std::fmt;

/// Soft signals attached to an optimization result.
///
/// Unlike hard errors these never fail the call; the optimizer still
/// returns a bounded best-effort result alongside the warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelWarning {
    /// Non-positive price sensitivity (`b <= 0`): the demand curve does
    /// not slope downward, so revenue has no interior maximum and the
    /// optimum sits on a bound.
    DegenerateDemand,
}

impl fmt::Display for ModelWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDemand => {
                write!(f, "degenerate demand model (non-positive sensitivity)")
            }
        }
    }
}
