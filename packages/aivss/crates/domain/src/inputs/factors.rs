use crate::catalog::{FactorId, Grade, FACTOR_COUNT, FACTOR_TEMPLATES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current grade of every agentic risk factor.
///
/// Indexed by [`FactorId`]; the set is always fully populated. Serializes as a
/// `{ "autonomy": 0.5, ... }` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<FactorId, Grade>",
    into = "BTreeMap<FactorId, Grade>"
)]
pub struct FactorSet {
    grades: [Grade; FACTOR_COUNT],
}

/// Display view of one factor: template metadata plus its current grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradedFactor {
    pub id: FactorId,
    pub name: &'static str,
    pub description: &'static str,
    pub value: Grade,
}

impl Default for FactorSet {
    fn default() -> Self {
        Self {
            grades: std::array::from_fn(|i| FACTOR_TEMPLATES[i].default),
        }
    }
}

impl FactorSet {
    /// Every factor at the same grade
    pub fn uniform(grade: Grade) -> Self {
        Self {
            grades: [grade; FACTOR_COUNT],
        }
    }

    pub fn get(&self, id: FactorId) -> Grade {
        self.grades[id.index()]
    }

    pub fn set(&mut self, id: FactorId, grade: Grade) {
        self.grades[id.index()] = grade;
    }

    pub fn grades(&self) -> impl Iterator<Item = (FactorId, Grade)> + '_ {
        FactorId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Factors with their display metadata, in display order
    pub fn graded(&self) -> impl Iterator<Item = GradedFactor> + '_ {
        FACTOR_TEMPLATES.iter().map(move |t| GradedFactor {
            id: t.id,
            name: t.name,
            description: t.description,
            value: self.get(t.id),
        })
    }
}

impl TryFrom<BTreeMap<FactorId, Grade>> for FactorSet {
    type Error = String;

    fn try_from(map: BTreeMap<FactorId, Grade>) -> Result<Self, Self::Error> {
        let mut set = Self::uniform(Grade::None);
        for id in FactorId::ALL {
            let grade = map
                .get(&id)
                .ok_or_else(|| format!("Factor {} has no grade", id))?;
            set.set(id, *grade);
        }
        Ok(set)
    }
}

impl From<FactorSet> for BTreeMap<FactorId, Grade> {
    fn from(set: FactorSet) -> Self {
        set.grades().collect()
    }
}
