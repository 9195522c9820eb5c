use super::comparison::{ComparisonSlots, SlotChange};
use crate::inputs::SessionInputs;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Creation-ordered profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(u64);

impl ProfileId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// Named snapshot of the calculator inputs. Immutable once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub inputs: SessionInputs,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    EmptyName,
}

/// In-memory collection of saved profiles plus the comparison selection.
///
/// Nothing here is persisted; the store lives as long as the session.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    next_id: u64,
    comparison: ComparisonSlots,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `inputs` under `name`. Names are trimmed; blank names are rejected.
    pub fn save(&mut self, name: &str, inputs: &SessionInputs) -> Result<Profile, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        self.next_id += 1;
        let profile = Profile {
            id: ProfileId(self.next_id),
            name: name.to_string(),
            created_at: Utc::now(),
            inputs: *inputs,
        };

        tracing::info!(id = %profile.id, name = %profile.name, "Saved profile");
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    /// Profiles in insertion order
    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Copy of the stored inputs; `None` for unknown ids
    pub fn load(&self, id: ProfileId) -> Option<SessionInputs> {
        self.get(id).map(|p| p.inputs)
    }

    /// Remove a profile, clearing any comparison slot that referenced it
    pub fn delete(&mut self, id: ProfileId) -> Option<Profile> {
        let idx = self.profiles.iter().position(|p| p.id == id)?;
        let removed = self.profiles.remove(idx);
        if self.comparison.remove(id) {
            tracing::debug!(%id, "Cleared comparison slot of deleted profile");
        }
        tracing::info!(%id, name = %removed.name, "Deleted profile");
        Some(removed)
    }

    /// Toggle `id` in the comparison slots. Unknown ids are ignored.
    pub fn select_for_compare(&mut self, id: ProfileId) -> Option<SlotChange> {
        self.get(id)?;
        let change = self.comparison.toggle(id);
        tracing::debug!(%id, ?change, "Comparison selection changed");
        Some(change)
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }

    pub fn comparison(&self) -> &ComparisonSlots {
        &self.comparison
    }

    /// Profiles currently selected for comparison, in slot order
    pub fn compared(&self) -> impl Iterator<Item = &Profile> + '_ {
        self.comparison.ids().filter_map(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FactorId, Grade, MetricId};
    use crate::inputs::ThreatMultiplier;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_assigns_increasing_ids() {
        let mut store = ProfileStore::new();
        let a = store.save("baseline", &SessionInputs::default()).unwrap();
        let b = store.save("  hardened  ", &SessionInputs::default()).unwrap();

        assert!(a.id < b.id);
        assert_eq!(b.name, "hardened");
        assert_eq!(
            store.list().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
    }

    #[test]
    fn test_blank_name_rejected_without_state_change() {
        let mut store = ProfileStore::new();
        assert_eq!(
            store.save("   ", &SessionInputs::default()),
            Err(ProfileError::EmptyName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_saved_profile_is_independent_of_live_state() {
        let mut store = ProfileStore::new();
        let mut live = SessionInputs::default();
        let saved = live;
        let profile = store.save("snapshot", &live).unwrap();

        live.selection.set(MetricId::AttackVector, 'P').unwrap();
        live.factors.set(FactorId::Autonomy, Grade::Full);
        live.threat = ThreatMultiplier::Unreported;

        assert_ne!(live, saved);
        assert_eq!(store.load(profile.id), Some(saved));
        assert_ne!(store.load(profile.id), Some(live));
    }

    #[test]
    fn test_load_unknown_is_none() {
        let store = ProfileStore::new();
        assert_eq!(store.load(ProfileId::new(42)), None);
    }

    #[test]
    fn test_delete_clears_comparison_slot() {
        let mut store = ProfileStore::new();
        let a = store.save("a", &SessionInputs::default()).unwrap();
        let b = store.save("b", &SessionInputs::default()).unwrap();
        store.select_for_compare(a.id);
        store.select_for_compare(b.id);

        assert!(store.delete(a.id).is_some());
        assert!(!store.comparison().contains(a.id));
        assert_eq!(store.compared().map(|p| p.id).collect::<Vec<_>>(), vec![b.id]);
        assert!(store.delete(a.id).is_none());
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut store = ProfileStore::new();
        assert_eq!(store.select_for_compare(ProfileId::new(7)), None);
        assert!(store.comparison().is_empty());
    }

    #[test]
    fn test_profile_id_parsing() {
        assert_eq!("#3".parse::<ProfileId>().unwrap(), ProfileId::new(3));
        assert!("abc".parse::<ProfileId>().is_err());
    }
}
