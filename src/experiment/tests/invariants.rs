use crate::{
    door::DoorSpec,
    experiment::{MontyHallExperiment, SimulationOptions},
    strategy::{always_swap, never_swap, Strategy},
    types::{Door, TrialOutcome},
};
use crate::utils::logging;

/// Strategy that returns to the earliest selection that is still in play
fn return_to_first(doors: &[Door], past_selections: &[Door]) -> Door {
    past_selections
        .iter()
        .find(|door| doors.contains(door))
        .unwrap_or(&doors[0])
        .clone()
}

/// Strategy that picks the last remaining door
fn last_door(doors: &[Door], _past_selections: &[Door]) -> Door {
    doors[doors.len() - 1].clone()
}

/// Checks the elimination invariants of a single trial.
///
/// The i-th elimination happened while selection i was the most recent one.
fn check_outcome(outcome: &TrialOutcome, door_count: usize) {
    assert_eq!(outcome.eliminations(), door_count - 2);
    assert_eq!(outcome.selections.len(), door_count - 1);

    for (i, opened) in outcome.eliminated.iter().enumerate() {
        assert_ne!(opened, &outcome.correct, "host opened the correct door");
        assert_ne!(opened, &outcome.selections[i], "host opened the current selection");
        assert!(
            !outcome.eliminated[..i].contains(opened),
            "door {} opened twice",
            opened.label()
        );
        // No later selection may land on an opened door
        assert!(!outcome.selections[i + 1..].contains(opened));
    }

    assert_eq!(outcome.success, outcome.final_selection() == Some(&outcome.correct));
}

/// Tests the elimination invariants across many randomized trials and strategies
#[test]
fn test_elimination_never_removes_correct_or_current_door() {
    logging::init_logging();
    let strategies: [Strategy; 4] = [always_swap, never_swap, return_to_first, last_door];

    for door_count in 3..=8 {
        let experiment = MontyHallExperiment::with_door_count(door_count).unwrap();
        for (seed, strategy) in strategies.iter().enumerate() {
            let options = SimulationOptions::new(2_000).with_seed(seed as u64).with_batch_size(128);
            let outcomes = experiment.run_trials(*strategy, &options).unwrap();
            assert_eq!(outcomes.len(), 2_000);
            for outcome in &outcomes {
                check_outcome(outcome, door_count);
            }
        }
    }
}

/// Tests the invariants on skewed weights where several doors share a weight
#[test]
fn test_elimination_invariants_with_weighted_doors() {
    logging::init_logging();
    let experiment = MontyHallExperiment::with_doors(vec![
        DoorSpec::new(Some(0.4)),
        DoorSpec::unweighted(),
        DoorSpec::unweighted(),
        DoorSpec::unweighted(),
        DoorSpec::unweighted(),
    ])
    .unwrap();
    let options = SimulationOptions::new(5_000).with_seed(99);
    let outcomes = experiment.run_trials(always_swap, &options).unwrap();
    for outcome in &outcomes {
        check_outcome(outcome, 5);
    }
}
