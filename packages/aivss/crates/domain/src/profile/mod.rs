pub mod comparison;
pub mod store;

pub use comparison::{ComparisonSlots, SlotChange, SLOT_COUNT};
pub use store::{Profile, ProfileError, ProfileId, ProfileStore};
