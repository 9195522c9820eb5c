pub mod factors;
pub mod selection;
pub mod threat;

pub use factors::{FactorSet, GradedFactor};
pub use selection::BaseMetricSelection;
pub use threat::ThreatMultiplier;

use serde::{Deserialize, Serialize};

/// Everything the calculator scores.
///
/// The live session owns one of these; profiles own copies. All fields are
/// plain values, so `clone()` is a deep copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionInputs {
    pub selection: BaseMetricSelection,
    pub threat: ThreatMultiplier,
    pub factors: FactorSet,
}
