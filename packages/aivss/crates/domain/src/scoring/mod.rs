pub mod base;
pub mod composite;
pub mod risk;
pub mod secondary;

pub use base::{compute_base_score, BaseScoreOutcome, FALLBACK_BASE_SCORE};
pub use composite::compute_composite_score;
pub use risk::RiskLevel;
pub use secondary::compute_secondary_score;

use crate::codec::VectorCodec;
use crate::inputs::SessionInputs;
use crate::ports::{BaseScorer, ScoringError};
use serde::Serialize;

/// Derived scores. Never stored, always recomputed from inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub base_score: f64,
    pub secondary_score: f64,
    pub composite_score: f64,
}

impl ScoreResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.composite_score)
    }
}

/// Scores plus the vectors they were derived from
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scores: ScoreResult,
    pub base_vector: String,
    pub summary_vector: String,
    /// Set when the base score algorithm refused the vector
    pub rejection: Option<ScoringError>,
}

/// Run the full pipeline: encode, base score, secondary score, composite.
pub fn evaluate(inputs: &SessionInputs, scorer: &impl BaseScorer) -> Evaluation {
    let base_vector = VectorCodec::encode_base(&inputs.selection);
    let base = compute_base_score(scorer, &base_vector);
    let secondary_score = compute_secondary_score(&inputs.factors);
    let composite_score =
        compute_composite_score(base.score, secondary_score, inputs.threat.value());

    Evaluation {
        summary_vector: VectorCodec::encode_summary(base.score, secondary_score),
        scores: ScoreResult {
            base_score: base.score,
            secondary_score,
            composite_score,
        },
        base_vector,
        rejection: base.rejection,
    }
}

/// Round to one decimal place for display
pub fn round_display(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
