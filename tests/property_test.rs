use montyhall::{
    always_swap, never_swap, types::constants::WEIGHT_TOLERANCE, DoorError, DoorSet, DoorSpec,
    LabelSequence, MontyHallExperiment, SimulationOptions, TrialOutcome,
};
use proptest::prelude::*;

/// Door weights: unweighted, arbitrary, out of range, or decimal fractions
/// whose sums only reach 1 up to rounding
fn door_weight() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        3 => Just(None),
        3 => (0.0f64..1.0).prop_map(Some),
        2 => prop::sample::select(vec![0.1, 0.2, 0.3, 0.7, 0.25, 0.5]).prop_map(Some),
        1 => prop::sample::select(vec![0.0, 1.0, -0.5, 1.5]).prop_map(Some),
    ]
}

fn check_outcome(outcome: &TrialOutcome, door_count: usize) {
    assert_eq!(outcome.eliminated.len(), door_count - 2);
    assert_eq!(outcome.selections.len(), door_count - 1);
    for (i, opened) in outcome.eliminated.iter().enumerate() {
        assert_ne!(opened, &outcome.correct);
        assert_ne!(opened, &outcome.selections[i]);
        assert!(!outcome.eliminated[..i].contains(opened));
        assert!(!outcome.selections[i + 1..].contains(opened));
    }
}

proptest! {
    #[test]
    fn built_door_sets_sum_to_one_or_fail_with_the_right_error(
        weights in prop::collection::vec(door_weight(), 1..10)
    ) {
        let specs: Vec<DoorSpec> = weights.iter().map(|w| DoorSpec::new(*w)).collect();
        let result = DoorSet::build(specs, &mut LabelSequence::default());

        let out_of_range = weights.iter().flatten().any(|p| !(*p > 0.0 && *p < 1.0));
        let explicit: f64 = weights.iter().flatten().sum();
        let unweighted = weights.iter().filter(|w| w.is_none()).count();

        match result {
            Ok(doors) => {
                prop_assert_eq!(doors.len(), weights.len());
                prop_assert!(
                    (doors.total_probability() - 1.0).abs() < WEIGHT_TOLERANCE,
                    "weights sum to {}",
                    doors.total_probability()
                );
                for door in doors.iter() {
                    prop_assert!(door.probability() > 0.0 && door.probability() < 1.0);
                }
            }
            Err(DoorError::Validation { probability, .. }) => {
                prop_assert!(weights.len() >= 2);
                prop_assert!(!(probability > 0.0 && probability < 1.0));
            }
            Err(DoorError::Configuration(message)) => {
                prop_assert!(!out_of_range || weights.len() < 2, "expected a validation error: {}", message);
                // Enough mass left over for the unweighted doors must always build
                prop_assert!(
                    weights.len() < 2 || unweighted == 0 || explicit >= 1.0 - 1e-6,
                    "rejected a buildable door set: {}",
                    message
                );
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn host_never_opens_the_correct_or_current_door(
        door_count in 3usize..10,
        seed in any::<u64>(),
        swap in any::<bool>(),
    ) {
        let experiment = MontyHallExperiment::with_door_count(door_count).unwrap();
        let strategy: montyhall::Strategy = if swap { always_swap } else { never_swap };
        let options = SimulationOptions::new(200).with_seed(seed).with_batch_size(64);

        let outcomes = experiment.run_trials(strategy, &options).unwrap();
        prop_assert_eq!(outcomes.len(), 200);
        for outcome in &outcomes {
            check_outcome(outcome, door_count);
        }
    }
}
