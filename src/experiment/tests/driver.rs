use crate::{
    door::DoorSpec,
    experiment::{MontyHallExperiment, SimulationError, SimulationOptions, CLASSICAL_MONTY_HALL},
    strategy::{always_swap, never_swap, resolve},
    types::{Door, DoorLabel},
};
use crate::utils::logging;

/// Strategy that names a door which is not part of the game
fn pick_missing_door(_doors: &[Door], _past_selections: &[Door]) -> Door {
    Door::new(DoorLabel::from("missing"), 0.5).unwrap()
}

/// Tests that always swap converges to 2/3 on the classical problem
#[test]
fn test_always_swap_converges_to_two_thirds() {
    logging::init_logging();
    let options = SimulationOptions::new(100_000).with_seed(42);
    let report = CLASSICAL_MONTY_HALL
        .run_simulations_with(always_swap, &options)
        .expect("Failed to run simulations");

    assert_eq!(report.trials, 100_000);
    assert!(
        (report.success_ratio - 2.0 / 3.0).abs() < 0.01,
        "always swap ratio {} should be close to 2/3",
        report.success_ratio
    );
}

/// Tests that never swap converges to 1/3 on the classical problem
#[test]
fn test_never_swap_converges_to_one_third() {
    logging::init_logging();
    let options = SimulationOptions::new(100_000).with_seed(43);
    let report = CLASSICAL_MONTY_HALL
        .run_simulations_with(never_swap, &options)
        .expect("Failed to run simulations");

    assert!(
        (report.success_ratio - 1.0 / 3.0).abs() < 0.01,
        "never swap ratio {} should be close to 1/3",
        report.success_ratio
    );
}

#[test]
fn test_run_simulations_returns_ratio() {
    logging::init_logging();
    let ratio = CLASSICAL_MONTY_HALL
        .run_simulations(always_swap, 2_000, Some(2))
        .expect("Failed to run simulations");
    assert!((0.0..=1.0).contains(&ratio));
}

/// Tests that weighted correct doors reach the trial results
#[test]
fn test_never_swap_on_weighted_doors() {
    logging::init_logging();
    // Never swapping keeps the uniform first pick, so it wins with probability 1/n
    let experiment = MontyHallExperiment::with_doors(vec![
        DoorSpec::new(Some(0.5)),
        DoorSpec::new(Some(0.3)),
        DoorSpec::new(Some(0.2)),
    ])
    .unwrap();
    let options = SimulationOptions::new(60_000).with_seed(8);
    let outcomes = experiment.run_trials(never_swap, &options).unwrap();

    let first_door = outcomes
        .iter()
        .filter(|outcome| outcome.correct.label() == &DoorLabel::from("0"))
        .count() as f64
        / outcomes.len() as f64;
    assert!((first_door - 0.5).abs() < 0.01, "door 0 correct in {} of trials", first_door);

    let wins = outcomes.iter().filter(|outcome| outcome.success).count() as f64 / outcomes.len() as f64;
    assert!((wins - 1.0 / 3.0).abs() < 0.01, "never swap won {} of trials", wins);
}

/// Tests that a seeded run is reproducible regardless of the worker count
#[test]
fn test_seeded_runs_are_reproducible() {
    logging::init_logging();
    let options = SimulationOptions::new(5_000).with_seed(77).with_batch_size(250);
    let single = CLASSICAL_MONTY_HALL
        .run_simulations_with(always_swap, &options.clone().with_workers(Some(1)))
        .unwrap();
    let several = CLASSICAL_MONTY_HALL
        .run_simulations_with(always_swap, &options.with_workers(Some(4)))
        .unwrap();
    assert_eq!(single.successes, several.successes);
}

/// Tests that run_trials keeps one outcome per trial, including a partial last batch
#[test]
fn test_run_trials_keeps_every_outcome() {
    logging::init_logging();
    let options = SimulationOptions::new(2_345).with_batch_size(1_000).with_seed(1);
    let outcomes = CLASSICAL_MONTY_HALL.run_trials(always_swap, &options).unwrap();
    assert_eq!(outcomes.len(), 2_345);
}

/// Tests that a misbehaving strategy aborts the whole batch
#[test]
fn test_strategy_violation_aborts_simulation() {
    logging::init_logging();
    let experiment = MontyHallExperiment::with_door_count(4).unwrap();
    let result = experiment.run_simulations(pick_missing_door, 1_000, None);
    assert!(matches!(
        result,
        Err(SimulationError::StrategyViolation { ref selected, remaining: 3 })
            if selected == &DoorLabel::from("missing")
    ));
}

#[test]
fn test_invalid_options_fail_before_running() {
    logging::init_logging();
    let invalid = [
        SimulationOptions::new(0),
        SimulationOptions::new(10).with_batch_size(0),
        SimulationOptions::new(10).with_workers(Some(0)),
    ];
    for options in invalid {
        let result = CLASSICAL_MONTY_HALL.run_simulations_with(always_swap, &options);
        assert!(matches!(result, Err(SimulationError::InvalidOptions(_))));
    }
}

/// Tests that strategies named in configuration resolve to the built-ins
#[test]
fn test_resolved_strategy_runs() {
    logging::init_logging();
    let strategy = resolve("never_swap").unwrap();
    let ratio = CLASSICAL_MONTY_HALL
        .run_simulations(strategy, 1_000, Some(1))
        .unwrap();
    assert!((0.0..=1.0).contains(&ratio));
}
