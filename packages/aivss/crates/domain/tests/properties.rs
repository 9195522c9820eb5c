use aivss_scenarios::{FactorOverride, ScenarioCatalog, ScenarioPreset};
use domain::catalog::{FactorId, Grade, MetricId, FACTOR_COUNT};
use domain::inputs::{BaseMetricSelection, FactorSet, SessionInputs, ThreatMultiplier};
use domain::profile::{ProfileId, ProfileStore, SLOT_COUNT};
use domain::scenario::ScenarioLoader;
use domain::scoring::{compute_composite_score, compute_secondary_score};
use domain::VectorCodec;
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

fn arb_grade() -> impl Strategy<Value = Grade> {
    select(Grade::ALL.to_vec())
}

fn arb_factors() -> impl Strategy<Value = FactorSet> {
    proptest::collection::vec(arb_grade(), FACTOR_COUNT).prop_map(|grades| {
        let mut factors = FactorSet::uniform(Grade::None);
        for (id, grade) in FactorId::ALL.into_iter().zip(grades) {
            factors.set(id, grade);
        }
        factors
    })
}

fn arb_inputs() -> impl Strategy<Value = SessionInputs> {
    (
        arb_selection(),
        select(ThreatMultiplier::ALL.to_vec()),
        arb_factors(),
    )
        .prop_map(|(selection, threat, factors)| SessionInputs {
            selection,
            threat,
            factors,
        })
}

#[derive(Debug, Clone)]
enum StoreOp {
    Save,
    Delete(u64),
    Compare(u64),
    Clear,
}

fn arb_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => Just(StoreOp::Save),
        1 => (1u64..8).prop_map(StoreOp::Delete),
        4 => (1u64..8).prop_map(StoreOp::Compare),
        1 => Just(StoreOp::Clear),
    ]
}

proptest! {
    #[test]
    fn base_vector_names_every_metric_once(selection in arb_selection()) {
        let vector = VectorCodec::encode_base(&selection);
        prop_assert!(vector.starts_with("CVSS:4.0/"));

        let components: Vec<&str> = vector.split('/').skip(1).collect();
        prop_assert_eq!(components.len(), MetricId::ALL.len());
        for metric in MetricId::ALL {
            let prefix = format!("{}:", metric.code());
            prop_assert_eq!(components.iter().filter(|c| c.starts_with(&prefix)).count(), 1);
        }
    }

    #[test]
    fn raising_a_grade_never_lowers_secondary(factors in arb_factors(), idx in 0..FACTOR_COUNT) {
        let id = FactorId::ALL[idx];
        let before = compute_secondary_score(&factors);

        for higher in Grade::ALL.into_iter().filter(|g| *g >= factors.get(id)) {
            let mut raised = factors;
            raised.set(id, higher);
            prop_assert!(compute_secondary_score(&raised) >= before);
        }
    }

    #[test]
    fn composite_matches_formula(b in -100.0f64..100.0, s in -100.0f64..100.0, m in -10.0f64..10.0) {
        prop_assert_eq!(compute_composite_score(b, s, m), ((b + s) / 2.0) * m);
    }

    #[test]
    fn profile_round_trip(inputs in arb_inputs(), mutated in arb_inputs()) {
        let mut store = ProfileStore::new();
        let profile = store.save("snapshot", &inputs).unwrap();
        let second = store.save("mutated", &mutated).unwrap();

        prop_assert_eq!(store.load(profile.id), Some(inputs));
        prop_assert_eq!(store.load(second.id), Some(mutated));
    }

    #[test]
    fn comparison_slots_stay_valid(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut store = ProfileStore::new();

        for op in ops {
            match op {
                StoreOp::Save => {
                    store.save("p", &SessionInputs::default()).unwrap();
                }
                StoreOp::Delete(id) => {
                    store.delete(ProfileId::new(id));
                }
                StoreOp::Compare(id) => {
                    store.select_for_compare(ProfileId::new(id));
                }
                StoreOp::Clear => store.clear_comparison(),
            }

            let slotted: Vec<ProfileId> = store.comparison().ids().collect();
            prop_assert!(slotted.len() <= SLOT_COUNT);
            if slotted.len() == 2 {
                prop_assert_ne!(slotted[0], slotted[1]);
            }
            for id in slotted {
                prop_assert!(store.list().iter().any(|p| p.id == id));
            }
        }
    }
}

#[test]
fn scenario_covering_three_factors_zeroes_the_rest() {
    let catalog = ScenarioCatalog {
        scenarios: vec![ScenarioPreset {
            id: "three".into(),
            name: "Three".into(),
            description: String::new(),
            base: None,
            factors: ["autonomy", "persistence", "self_modification"]
                .into_iter()
                .map(|id| FactorOverride {
                    id: id.into(),
                    value: 1.0,
                })
                .collect(),
        }],
    };

    let factors =
        ScenarioLoader::apply(&catalog, "three", &FactorSet::uniform(Grade::Partial)).unwrap();

    assert_eq!(factors.grades().count(), FACTOR_COUNT);
    for (id, grade) in factors.grades() {
        match id {
            FactorId::Autonomy | FactorId::Persistence | FactorId::SelfModification => {
                assert_eq!(grade, Grade::Full)
            }
            _ => assert_eq!(grade.value(), 0.0),
        }
    }
}

#[test]
fn blank_profile_name_leaves_list_unchanged() {
    let mut store = ProfileStore::new();
    store.save("kept", &SessionInputs::default()).unwrap();
    let before: Vec<_> = store.list().to_vec();

    assert!(store.save("   ", &SessionInputs::default()).is_err());
    assert_eq!(store.list(), before.as_slice());
}
