use super::store::ProfileId;

pub const SLOT_COUNT: usize = 2;

/// Two optional profile references for side-by-side comparison.
///
/// Invariant: a profile id occupies at most one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonSlots {
    slots: [Option<ProfileId>; SLOT_COUNT],
    last_filled: Option<usize>,
}

/// What a toggle did to the slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    Added { slot: usize },
    Removed { slot: usize },
    Replaced { slot: usize, previous: ProfileId },
}

impl ComparisonSlots {
    pub fn slots(&self) -> [Option<ProfileId>; SLOT_COUNT] {
        self.slots
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.position(id).is_some()
    }

    /// Occupied slots in slot order
    pub fn ids(&self) -> impl Iterator<Item = ProfileId> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select or deselect `id`.
    ///
    /// A selected id is removed. Otherwise it takes the first empty slot, or
    /// replaces the most recently filled slot when both are occupied.
    pub fn toggle(&mut self, id: ProfileId) -> SlotChange {
        if let Some(slot) = self.position(id) {
            self.vacate(slot);
            return SlotChange::Removed { slot };
        }

        if let Some(slot) = self.slots.iter().position(Option::is_none) {
            self.slots[slot] = Some(id);
            self.last_filled = Some(slot);
            return SlotChange::Added { slot };
        }

        let slot = self.last_filled.unwrap_or(SLOT_COUNT - 1);
        let previous = self.slots[slot].replace(id);
        self.last_filled = Some(slot);
        match previous {
            Some(previous) => SlotChange::Replaced { slot, previous },
            None => SlotChange::Added { slot },
        }
    }

    /// Clear the slot holding `id`, if any
    pub fn remove(&mut self, id: ProfileId) -> bool {
        match self.position(id) {
            Some(slot) => {
                self.vacate(slot);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn position(&self, id: ProfileId) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(id))
    }

    fn vacate(&mut self, slot: usize) {
        self.slots[slot] = None;
        if self.last_filled == Some(slot) {
            // fall back to whichever slot is still occupied
            self.last_filled = self.slots.iter().position(Option::is_some);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ProfileId {
        ProfileId::new(n)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut slots = ComparisonSlots::default();
        assert_eq!(slots.toggle(id(1)), SlotChange::Added { slot: 0 });
        assert_eq!(slots.toggle(id(2)), SlotChange::Added { slot: 1 });
        assert_eq!(slots.toggle(id(1)), SlotChange::Removed { slot: 0 });
        assert_eq!(slots.slots(), [None, Some(id(2))]);
    }

    #[test]
    fn test_third_selection_replaces_most_recent() {
        let mut slots = ComparisonSlots::default();
        slots.toggle(id(1));
        slots.toggle(id(2));

        assert_eq!(
            slots.toggle(id(3)),
            SlotChange::Replaced {
                slot: 1,
                previous: id(2)
            }
        );
        assert_eq!(slots.slots(), [Some(id(1)), Some(id(3))]);
    }

    #[test]
    fn test_refill_after_removal_tracks_recency() {
        let mut slots = ComparisonSlots::default();
        slots.toggle(id(1));
        slots.toggle(id(2));
        slots.toggle(id(1)); // slot 0 free again
        slots.toggle(id(4)); // fills slot 0, now most recent

        assert_eq!(
            slots.toggle(id(5)),
            SlotChange::Replaced {
                slot: 0,
                previous: id(4)
            }
        );
        assert_eq!(slots.slots(), [Some(id(5)), Some(id(2))]);
    }

    #[test]
    fn test_clear() {
        let mut slots = ComparisonSlots::default();
        slots.toggle(id(1));
        slots.clear();
        assert!(slots.is_empty());
    }
}
