use crate::catalog::{load_catalog, LoadedCatalog};
use crate::config::AppConfig;
use aivss_scenarios::ScenarioCatalog;
use anyhow::{Context, Result};
use domain::catalog::{FactorId, Grade, MetricId};
use domain::profile::SlotChange;
use domain::scenario::ResolvedBase;
use domain::{
    evaluate, BaseScorer, ChartData, DomainError, Evaluation, Profile, ProfileError, ProfileId,
    ProfileStore, ReportSnapshot, ScenarioLoader, SessionInputs, ThreatMultiplier,
};

/// A profile selected for comparison, scored from its own snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ComparedProfile {
    pub slot: usize,
    pub profile: Profile,
    pub evaluation: Evaluation,
}

/// What applying a scenario did to the base metrics
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedBase {
    /// The preset's metric selection replaced the live one
    Selection,
    /// The preset only carries a score; the live selection is unchanged
    LegacyScore(f64),
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioApplied {
    pub id: String,
    pub name: String,
    pub base: AppliedBase,
}

/// Orchestrates one calculator session: the live inputs, the saved profiles
/// and the scenario catalog, scored through `S`.
pub struct CalculatorService<S: BaseScorer> {
    scorer: S,
    inputs: SessionInputs,
    initial: SessionInputs,
    profiles: ProfileStore,
    catalog: ScenarioCatalog,
}

impl<S: BaseScorer> CalculatorService<S> {
    pub fn new(scorer: S, catalog: ScenarioCatalog) -> Self {
        Self::with_inputs(scorer, catalog, SessionInputs::default())
    }

    /// Start from `inputs` instead of the catalog defaults
    pub fn with_inputs(scorer: S, catalog: ScenarioCatalog, inputs: SessionInputs) -> Self {
        Self {
            scorer,
            inputs,
            initial: inputs,
            profiles: ProfileStore::new(),
            catalog,
        }
    }

    /// Build a session from the user configuration: its default threat
    /// multiplier and its scenario catalog (builtin when none is set).
    pub fn from_config(scorer: S, config: &AppConfig) -> Result<(Self, LoadedCatalog)> {
        let loaded = load_catalog(config.scenario_catalog.as_deref())
            .context("Failed to prepare scenario catalog")?;
        let inputs = SessionInputs {
            threat: config.default_threat,
            ..SessionInputs::default()
        };
        Ok((
            Self::with_inputs(scorer, loaded.catalog.clone(), inputs),
            loaded,
        ))
    }

    pub fn inputs(&self) -> &SessionInputs {
        &self.inputs
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn set_metric(&mut self, metric: MetricId, value: char) -> Result<(), DomainError> {
        self.inputs.selection.set(metric, value)?;
        tracing::debug!(%metric, %value, "Base metric changed");
        Ok(())
    }

    /// Set a metric from text, e.g. `("AV", "N")`
    pub fn set_metric_code(&mut self, code: &str, value: &str) -> Result<(), DomainError> {
        self.inputs.selection.set_code(code, value)?;
        tracing::debug!(code, value, "Base metric changed");
        Ok(())
    }

    pub fn set_factor(&mut self, id: FactorId, grade: Grade) {
        self.inputs.factors.set(id, grade);
        tracing::debug!(factor = %id, %grade, "Factor grade changed");
    }

    pub fn set_threat(&mut self, threat: ThreatMultiplier) {
        self.inputs.threat = threat;
        tracing::debug!(%threat, "Threat multiplier changed");
    }

    /// Back to the inputs the session started with. Profiles are kept.
    pub fn reset(&mut self) {
        self.inputs = self.initial;
    }

    /// Scores of the live inputs, recomputed on every call
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.inputs, &self.scorer)
    }

    pub fn save_profile(&mut self, name: &str) -> Result<Profile, ProfileError> {
        self.profiles.save(name, &self.inputs)
    }

    pub fn profiles(&self) -> &[Profile] {
        self.profiles.list()
    }

    /// Replace the live inputs with a saved snapshot. Returns `false` and
    /// leaves the session alone when `id` is unknown.
    pub fn load_profile(&mut self, id: ProfileId) -> bool {
        match self.profiles.load(id) {
            Some(inputs) => {
                self.inputs = inputs;
                tracing::debug!(%id, "Loaded profile into session");
                true
            }
            None => false,
        }
    }

    pub fn delete_profile(&mut self, id: ProfileId) -> Option<Profile> {
        self.profiles.delete(id)
    }

    pub fn toggle_compare(&mut self, id: ProfileId) -> Option<SlotChange> {
        self.profiles.select_for_compare(id)
    }

    pub fn clear_comparison(&mut self) {
        self.profiles.clear_comparison();
    }

    /// Profiles in the comparison slots, each evaluated from its own inputs
    pub fn comparison(&self) -> Vec<ComparedProfile> {
        self.profiles
            .comparison()
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(slot, id)| {
                let profile = self.profiles.get((*id)?)?;
                Some(ComparedProfile {
                    slot,
                    profile: profile.clone(),
                    evaluation: evaluate(&profile.inputs, &self.scorer),
                })
            })
            .collect()
    }

    /// Apply a catalog preset.
    ///
    /// Factor grades are replaced wholesale; a metric selection in the preset
    /// replaces the live selection. Returns `Ok(None)` for an unknown id, with
    /// the session unchanged.
    pub fn apply_scenario(&mut self, id: &str) -> Result<Option<ScenarioApplied>> {
        let Some(preset) = self.catalog.get(id) else {
            tracing::debug!(scenario = id, "Unknown scenario");
            return Ok(None);
        };

        let base = ScenarioLoader::base_for(preset)
            .with_context(|| format!("Scenario '{}' has an invalid base selection", preset.id))?;
        let factors = ScenarioLoader::factors_for(preset, &self.inputs.factors);

        self.inputs.factors = factors;
        let applied_base = match base {
            Some(ResolvedBase::Selection(selection)) => {
                self.inputs.selection = selection;
                AppliedBase::Selection
            }
            Some(ResolvedBase::LegacyScore(score)) => AppliedBase::LegacyScore(score),
            None => AppliedBase::Unchanged,
        };

        tracing::info!(scenario = %preset.id, "Applied scenario");
        Ok(Some(ScenarioApplied {
            id: preset.id.clone(),
            name: preset.name.clone(),
            base: applied_base,
        }))
    }

    pub fn report(&self) -> ReportSnapshot {
        ReportSnapshot::new(&self.inputs, &self.evaluate())
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::new(&self.inputs.factors, &self.evaluate())
    }
}
