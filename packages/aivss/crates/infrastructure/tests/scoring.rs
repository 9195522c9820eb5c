use domain::catalog::MetricId;
use domain::inputs::{FactorSet, SessionInputs, ThreatMultiplier};
use domain::scoring::{evaluate, round_display};
use domain::{BaseMetricSelection, BaseScorer, Grade, RiskLevel, VectorCodec};
use infrastructure::CvssV4Scorer;
use proptest::prelude::*;
use proptest::sample::select;

fn arb_selection() -> impl Strategy<Value = BaseMetricSelection> {
    let per_metric: Vec<_> = MetricId::ALL
        .into_iter()
        .map(|m| select(m.definition().options.iter().map(|o| o.value).collect::<Vec<_>>()))
        .collect();

    per_metric.prop_map(|values| {
        let mut selection = BaseMetricSelection::default();
        for (metric, value) in MetricId::ALL.into_iter().zip(values) {
            selection.set(metric, value).unwrap();
        }
        selection
    })
}

proptest! {
    #[test]
    fn every_encoded_selection_is_accepted(selection in arb_selection()) {
        let vector = VectorCodec::encode_base(&selection);
        let score = CvssV4Scorer::new().score(&vector);

        prop_assert!(score.is_ok(), "{vector}: {score:?}");
        let score = score.unwrap();
        prop_assert!((0.0..=10.0).contains(&score));
        prop_assert_eq!(round_display(score), score);
    }

    #[test]
    fn scoring_is_deterministic(selection in arb_selection()) {
        let vector = VectorCodec::encode_base(&selection);
        let scorer = CvssV4Scorer::new();
        prop_assert_eq!(scorer.score(&vector), scorer.score(&vector));
    }
}

#[test]
fn default_session_matches_reference_scenario() {
    let mut inputs = SessionInputs {
        selection: BaseMetricSelection::default(),
        threat: ThreatMultiplier::ProofOfConcept,
        factors: FactorSet::uniform(Grade::Partial),
    };
    inputs
        .factors
        .set(domain::FactorId::Autonomy, Grade::Full);
    inputs
        .factors
        .set(domain::FactorId::DeceptionCapability, Grade::None);

    let evaluation = evaluate(&inputs, &CvssV4Scorer::new());

    assert_eq!(evaluation.scores.base_score, 9.3);
    assert_eq!(evaluation.scores.secondary_score, 5.0);
    assert!((evaluation.scores.composite_score - 6.9355).abs() < 1e-9);
    assert_eq!(evaluation.scores.risk_level(), RiskLevel::Medium);
    assert!(evaluation.rejection.is_none());
    assert_eq!(evaluation.summary_vector, "AIVSS:1.0/CVSS:9.3/AARS:5.0");
}

#[test]
fn no_impact_selection_scores_zero() {
    let mut selection = BaseMetricSelection::default();
    for metric in [
        MetricId::VulnerableConfidentiality,
        MetricId::VulnerableIntegrity,
        MetricId::VulnerableAvailability,
    ] {
        selection.set(metric, 'N').unwrap();
    }

    let score = CvssV4Scorer::new()
        .score(&VectorCodec::encode_base(&selection))
        .unwrap();
    assert_eq!(score, 0.0);
}
