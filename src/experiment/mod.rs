//! Monty Hall experiments and the parallel trial driver.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::door::{DoorError, DoorSet, DoorSpec, LabelSequence};
use crate::sampler::CorrectDoorSampler;
use crate::strategy::Strategy;
use crate::types::constants::{CLASSICAL_DOOR_COUNT, DEFAULT_BATCH_SIZE, DEFAULT_TRIALS};
use crate::types::{Door, DoorLabel, TrialOutcome};
use crate::utils::logging;

pub mod trial;
pub use trial::{random_choice, run_trial, EliminationChoice, TrialPhase};

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Door(#[from] DoorError),
    #[error("Strategy selected door {selected}, which is not among the {remaining} remaining doors")]
    StrategyViolation { selected: DoorLabel, remaining: usize },
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("No door can be opened with {remaining} doors remaining")]
    NoEliminationCandidate { remaining: usize },
    #[error("Invalid simulation options: {0}")]
    InvalidOptions(String),
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

// ------------------------------------------------------------------------------------------------
// Simulation Options and Report
// ------------------------------------------------------------------------------------------------

/// Parameters of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOptions {
    /// Number of trials to run
    pub trials: usize,
    /// Number of worker threads (None = one per core)
    pub max_workers: Option<usize>,
    /// Number of trials handed to a worker at a time
    pub batch_size: usize,
    /// Seed of the master RNG (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_workers: None,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

impl SimulationOptions {
    pub fn new(trials: usize) -> Self {
        Self { trials, ..Self::default() }
    }

    pub fn with_workers(mut self, max_workers: Option<usize>) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if self.trials == 0 {
            return Err(SimulationError::InvalidOptions("Number of trials must be positive".into()));
        }
        if self.batch_size == 0 {
            return Err(SimulationError::InvalidOptions("Batch size must be positive".into()));
        }
        if self.max_workers == Some(0) {
            return Err(SimulationError::InvalidOptions("Number of workers must be positive".into()));
        }
        Ok(())
    }
}

/// Aggregate result of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub trials: usize,
    pub successes: usize,
    pub success_ratio: f64,
    pub elapsed: Duration,
}

// ------------------------------------------------------------------------------------------------
// Experiment
// ------------------------------------------------------------------------------------------------

/// A Monty Hall type experiment over a fixed set of doors.
///
/// The doors are given either individually or as a door count, never both.
#[derive(Debug, Clone)]
pub struct MontyHallExperiment {
    doors: DoorSet,
    sampler: CorrectDoorSampler,
    choice: EliminationChoice,
}

/// The classical problem: three doors of equal probability
pub static CLASSICAL_MONTY_HALL: Lazy<MontyHallExperiment> = Lazy::new(|| {
    MontyHallExperiment::classical().expect("three equally likely doors form a valid door set")
});

impl MontyHallExperiment {
    /// Creates an experiment from individual doors or from a door count
    pub fn new(doors: Vec<DoorSpec>, number_of_doors: Option<usize>) -> Result<Self, SimulationError> {
        Self::with_labels(doors, number_of_doors, &mut LabelSequence::default())
    }

    /// Like `new`, taking labels for unlabelled doors from `labels`
    pub fn with_labels(
        doors: Vec<DoorSpec>,
        number_of_doors: Option<usize>,
        labels: &mut LabelSequence,
    ) -> Result<Self, SimulationError> {
        let door_set = match (doors.is_empty(), number_of_doors) {
            (false, Some(_)) => {
                return Err(DoorError::Configuration(
                    "number of doors and individual doors cannot be specified together".into(),
                )
                .into())
            }
            (true, None) => {
                return Err(DoorError::Configuration(
                    "either individual doors or a number of doors is required".into(),
                )
                .into())
            }
            (true, Some(count)) => DoorSet::uniform(count, labels)?,
            (false, None) => DoorSet::build(doors, labels)?,
        };
        Ok(Self::from_door_set(door_set))
    }

    pub fn with_doors(doors: Vec<DoorSpec>) -> Result<Self, SimulationError> {
        Self::new(doors, None)
    }

    pub fn with_door_count(number_of_doors: usize) -> Result<Self, SimulationError> {
        Self::new(Vec::new(), Some(number_of_doors))
    }

    pub fn from_door_set(doors: DoorSet) -> Self {
        let sampler = CorrectDoorSampler::new(&doors);
        Self {
            doors,
            sampler,
            choice: random_choice,
        }
    }

    /// Three doors labelled 0, 1 and 2, each with probability 1/3
    pub fn classical() -> Result<Self, SimulationError> {
        let doors = DoorSet::uniform(CLASSICAL_DOOR_COUNT, &mut LabelSequence::default())?;
        Ok(Self::from_door_set(doors))
    }

    /// Replaces the host's elimination choice
    pub fn with_elimination_choice(mut self, choice: EliminationChoice) -> Self {
        self.choice = choice;
        self
    }

    pub fn doors(&self) -> &DoorSet {
        &self.doors
    }

    pub fn sampler(&self) -> &CorrectDoorSampler {
        &self.sampler
    }

    /// Lazily draws `number` correct doors according to the door weights
    pub fn get_correct_doors<'a, R: Rng + ?Sized>(
        &'a self,
        number: usize,
        rng: &'a mut R,
    ) -> impl Iterator<Item = &'a Door> + 'a {
        self.sampler
            .correct_doors(number, rng)
            .map(move |index| &self.doors[index])
    }

    /// Plays a single trial with the given correct door
    pub fn run_trial<R: Rng>(
        &self,
        strategy: Strategy,
        correct: &Door,
        rng: &mut R,
    ) -> Result<TrialOutcome, SimulationError> {
        run_trial(&self.doors, strategy, self.choice, correct, rng)
    }

    /// Runs `number` trials and returns the proportion that ended on the correct door.
    ///
    /// Trials run concurrently on `max_workers` threads, one per core by default.
    /// The elapsed time is only logged when `MONTYHALL_LOGGING=true`; use
    /// `run_simulations_with` to get it in the report.
    pub fn run_simulations(
        &self,
        strategy: Strategy,
        number: usize,
        max_workers: Option<usize>,
    ) -> Result<f64, SimulationError> {
        let options = SimulationOptions::new(number).with_workers(max_workers);
        Ok(self.run_simulations_with(strategy, &options)?.success_ratio)
    }

    /// Runs a simulation and reports successes together with the elapsed time
    pub fn run_simulations_with(
        &self,
        strategy: Strategy,
        options: &SimulationOptions,
    ) -> Result<SimulationReport, SimulationError> {
        let start = Instant::now();
        let successes = self.run_batches(strategy, options, |outcomes| {
            let mut successes = 0usize;
            for outcome in outcomes {
                if outcome?.success {
                    successes += 1;
                }
            }
            Ok(successes)
        })?
        .into_iter()
        .sum::<usize>();
        let elapsed = start.elapsed();

        logging::log("SIMULATOR", &format!(
            "Ran {} simulations in {:.3} seconds",
            options.trials,
            elapsed.as_secs_f64()
        ));

        Ok(SimulationReport {
            trials: options.trials,
            successes,
            success_ratio: successes as f64 / options.trials as f64,
            elapsed,
        })
    }

    /// Runs a simulation and keeps every trial outcome
    pub fn run_trials(
        &self,
        strategy: Strategy,
        options: &SimulationOptions,
    ) -> Result<Vec<TrialOutcome>, SimulationError> {
        let batches = self.run_batches(strategy, options, |outcomes| {
            outcomes.collect::<Result<Vec<_>, _>>()
        })?;
        Ok(batches.into_iter().flatten().collect())
    }

    /// Splits the trials into batches and folds each batch on the worker pool.
    ///
    /// Every batch owns an RNG seeded from the master RNG and draws its own
    /// correct doors. The first error from any batch is returned.
    fn run_batches<T, F>(
        &self,
        strategy: Strategy,
        options: &SimulationOptions,
        fold: F,
    ) -> Result<Vec<T>, SimulationError>
    where
        T: Send,
        F: Fn(&mut dyn Iterator<Item = Result<TrialOutcome, SimulationError>>) -> Result<T, SimulationError>
            + Sync,
    {
        options.validate()?;

        let mut master = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let batches: Vec<(usize, u64)> = (0..options.trials)
            .step_by(options.batch_size)
            .map(|start| ((options.trials - start).min(options.batch_size), master.gen()))
            .collect();

        logging::log("SIMULATOR", &format!(
            "Running {} trials on {} doors in {} batches",
            options.trials,
            self.doors.len(),
            batches.len()
        ));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.max_workers.unwrap_or(0))
            .build()?;

        pool.install(|| {
            batches
                .par_iter()
                .map(|&(size, seed)| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let correct: Vec<usize> = self.sampler.correct_doors(size, &mut rng).collect();
                    let mut outcomes = correct
                        .into_iter()
                        .map(|index| self.run_trial(strategy, &self.doors[index], &mut rng));
                    fold(&mut outcomes)
                })
                .collect::<Result<Vec<T>, SimulationError>>()
        })
    }
}
