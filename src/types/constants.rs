/// Tolerance used when checking that door weights sum to one
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Number of doors in the classical Monty Hall problem
pub const CLASSICAL_DOOR_COUNT: usize = 3;

/// Default number of trials handed to a worker in one batch
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Default number of trials for a simulation run
pub const DEFAULT_TRIALS: usize = 1000;

/// Smallest door set a trial can be played on
pub const MIN_DOORS: usize = 2;
