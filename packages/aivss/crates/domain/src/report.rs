use crate::catalog::{FactorId, Grade};
use crate::codec::VectorCodec;
use crate::inputs::{FactorSet, GradedFactor, SessionInputs};
use crate::scoring::{Evaluation, RiskLevel};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only snapshot handed to report generators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSnapshot {
    pub composite_score: f64,
    pub secondary_score: f64,
    pub base_score: f64,
    pub risk_level: RiskLevel,
    pub summary_vector: String,
    pub base_vector: String,
    pub threat_multiplier: f64,
    pub graded_factors: Vec<ReportFactor>,
    /// Present when the base score fell back because the vector was refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_score_notice: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportFactor {
    pub id: FactorId,
    pub name: String,
    pub value: Grade,
}

impl From<GradedFactor> for ReportFactor {
    fn from(factor: GradedFactor) -> Self {
        Self {
            id: factor.id,
            name: factor.name.to_string(),
            value: factor.value,
        }
    }
}

impl ReportSnapshot {
    pub fn new(inputs: &SessionInputs, evaluation: &Evaluation) -> Self {
        let scores = evaluation.scores;
        Self {
            composite_score: scores.composite_score,
            secondary_score: scores.secondary_score,
            base_score: scores.base_score,
            risk_level: scores.risk_level(),
            summary_vector: VectorCodec::encode_summary_with_threat(
                scores.base_score,
                scores.secondary_score,
                inputs.threat,
            ),
            base_vector: evaluation.base_vector.clone(),
            threat_multiplier: inputs.threat.value(),
            graded_factors: inputs.factors.graded().map(ReportFactor::from).collect(),
            base_score_notice: evaluation.rejection.as_ref().map(|e| e.to_string()),
            generated_at: Utc::now(),
        }
    }
}

/// Plain data for chart renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub factors: Vec<ChartPoint>,
    pub base_score: f64,
    pub secondary_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub id: FactorId,
    pub label: &'static str,
    pub value: f64,
}

impl ChartData {
    pub fn new(factors: &FactorSet, evaluation: &Evaluation) -> Self {
        Self {
            factors: factors
                .grades()
                .map(|(id, grade)| ChartPoint {
                    id,
                    label: id.template().short_label,
                    value: grade.value(),
                })
                .collect(),
            base_score: evaluation.scores.base_score,
            secondary_score: evaluation.scores.secondary_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{BaseScorer, ScoringError};
    use crate::scoring::evaluate;

    struct Rejecting;

    impl BaseScorer for Rejecting {
        fn score(&self, _vector: &str) -> Result<f64, ScoringError> {
            Err(ScoringError::MissingMetric {
                metric: "AV".into(),
            })
        }
    }

    #[test]
    fn test_report_carries_fallback_notice() {
        let inputs = SessionInputs::default();
        let evaluation = evaluate(&inputs, &Rejecting);
        let report = ReportSnapshot::new(&inputs, &evaluation);

        assert_eq!(report.base_score, 0.0);
        assert_eq!(report.secondary_score, 2.0);
        assert_eq!(report.composite_score, 1.0);
        assert_eq!(report.graded_factors.len(), 10);
        assert_eq!(report.summary_vector, "AIVSS:1.0/CVSS:0.0/AARS:2.0/TM:1");
        assert!(report
            .base_score_notice
            .as_deref()
            .unwrap()
            .contains("AV"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["graded_factors"][0]["id"], "autonomy");
        assert_eq!(json["risk_level"], "Low");
    }

    #[test]
    fn test_chart_uses_short_labels() {
        let inputs = SessionInputs::default();
        let evaluation = evaluate(&inputs, &Rejecting);
        let chart = ChartData::new(&inputs.factors, &evaluation);

        assert_eq!(chart.factors[0].label, "Autonomy");
        assert_eq!(chart.factors[0].value, 0.5);
        assert_eq!(chart.secondary_score, 2.0);
    }
}
