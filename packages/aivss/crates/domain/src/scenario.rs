use crate::catalog::{FactorId, Grade};
use crate::error::DomainError;
use crate::inputs::{BaseMetricSelection, FactorSet};
use aivss_scenarios::{ScenarioBase, ScenarioCatalog, ScenarioPreset};

/// Maps scenario presets onto calculator inputs.
pub struct ScenarioLoader;

/// Base score part of a preset once resolved against the metric catalog
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedBase {
    Selection(BaseMetricSelection),
    /// Presets that only carry a score leave the live selection alone
    LegacyScore(f64),
}

impl ScenarioLoader {
    /// Factor grades for `scenario_id`, built over `template`.
    ///
    /// Every factor of the template receives the preset's value, or
    /// [`Grade::None`] when the preset does not list it. Returns `None` for an
    /// unknown scenario so the caller keeps its current state.
    pub fn apply(
        catalog: &ScenarioCatalog,
        scenario_id: &str,
        template: &FactorSet,
    ) -> Option<FactorSet> {
        let Some(preset) = catalog.get(scenario_id) else {
            tracing::debug!(scenario_id, "Unknown scenario, inputs unchanged");
            return None;
        };
        Some(Self::factors_for(preset, template))
    }

    pub fn factors_for(preset: &ScenarioPreset, template: &FactorSet) -> FactorSet {
        let mut factors = *template;
        for id in FactorId::ALL {
            let grade = match preset.factor_value(id.as_str()) {
                Some(value) => Grade::try_from(value).unwrap_or_else(|e| {
                    tracing::warn!(scenario = %preset.id, factor = %id, error = %e, "Ignoring invalid grade");
                    Grade::None
                }),
                None => Grade::None,
            };
            factors.set(id, grade);
        }

        for unknown in preset
            .factors
            .iter()
            .filter(|f| FactorId::parse(&f.id).is_none())
        {
            tracing::warn!(scenario = %preset.id, factor = %unknown.id, "Ignoring unknown factor");
        }

        factors
    }

    /// Resolve the preset's base metrics, if it has any
    pub fn base_for(preset: &ScenarioPreset) -> Result<Option<ResolvedBase>, DomainError> {
        match &preset.base {
            None => Ok(None),
            Some(ScenarioBase::Selection { metrics }) => Ok(Some(ResolvedBase::Selection(
                BaseMetricSelection::from_partial(metrics)?,
            ))),
            Some(ScenarioBase::LegacyScore { legacy_score }) => {
                Ok(Some(ResolvedBase::LegacyScore(*legacy_score)))
            }
        }
    }
}
