//! Configuration loader and validator for the Monty Hall simulator.
//! Handles parsing, validation, and access to simulation configuration files.


use montyhall::{
    strategy, DoorSpec, MontyHallExperiment, SimulationError, SimulationOptions, Strategy,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default location of the simple simulation config
pub const SIMPLE_CONFIG_PATH: &str = "simulator/src/scenarios/config_simple.toml";
/// Default location of the door count sweep config
pub const SWEEP_DOOR_COUNT_CONFIG_PATH: &str = "simulator/src/scenarios/config_sweep_door_count.toml";

// ------------------------------------------------------------------------------------------------
// Main Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for simulation parameters.
///
/// Used both for simple simulations and as the base configuration of sweeps.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Door setup of the experiment
    pub experiment: ExperimentConfig,
    /// Strategies, trial count and worker settings
    pub simulation: SimulationConfig,
}

/// Door configuration of an experiment.
///
/// Either `number_of_doors` or a list of `doors` is given, never both.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExperimentConfig {
    /// Number of equally likely doors
    #[serde(default)]
    pub number_of_doors: Option<usize>,
    /// Individually configured doors
    #[serde(default)]
    pub doors: Vec<DoorConfig>,
}

/// A single configured door
#[derive(Debug, Deserialize, Clone)]
pub struct DoorConfig {
    /// Label of the door (sequential number when absent)
    #[serde(default)]
    pub label: Option<String>,
    /// Prior probability (share of the remaining probability when absent)
    #[serde(default)]
    pub probability: Option<f64>,
}

/// Parameters controlling how trials are run
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Names of the strategies to evaluate
    pub strategies: Vec<String>,
    /// Number of trials per strategy
    pub num_trials: usize,
    /// Number of worker threads (one per core when absent)
    #[serde(default)]
    pub max_workers: Option<usize>,
    /// Trials handed to a worker at a time
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_batch_size() -> usize {
    montyhall::types::constants::DEFAULT_BATCH_SIZE
}

// ------------------------------------------------------------------------------------------------
// Sweep Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Configuration for sweep simulation parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct SweepParameters {
    /// Total number of simulation runs in the sweep
    pub num_simulations: usize,
    /// Step between door counts of consecutive runs
    #[serde(default)]
    pub door_count_step: Option<usize>,
}

/// Configuration of a door count sweep
#[derive(Debug, Deserialize, Clone)]
pub struct SweepDoorCountConfig {
    /// Experiment of the first run
    pub experiment: ExperimentConfig,
    pub simulation: SimulationConfig,
    pub sweep: SweepParameters,
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),
    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Common validation logic
pub fn validate_common_fields(
    experiment: &ExperimentConfig,
    simulation: &SimulationConfig,
) -> Result<(), ConfigError> {
    if experiment.number_of_doors.is_some() && !experiment.doors.is_empty() {
        return Err(ConfigError::ValidationError(
            "Number of doors and individual doors cannot be specified together".into(),
        ));
    }
    if experiment.number_of_doors.is_none() && experiment.doors.is_empty() {
        return Err(ConfigError::ValidationError(
            "Either number_of_doors or doors must be specified".into(),
        ));
    }
    if simulation.strategies.is_empty() {
        return Err(ConfigError::ValidationError("At least one strategy is required".into()));
    }
    for name in &simulation.strategies {
        strategy::resolve(name)?;
    }
    if simulation.num_trials == 0 {
        return Err(ConfigError::ValidationError("Number of trials must be positive".into()));
    }
    if simulation.batch_size == 0 {
        return Err(ConfigError::ValidationError("Batch size must be positive".into()));
    }
    if simulation.max_workers == Some(0) {
        return Err(ConfigError::ValidationError("Number of workers must be positive".into()));
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Configuration Implementation Methods
// ------------------------------------------------------------------------------------------------

impl ExperimentConfig {
    /// Builds the experiment described by this configuration
    pub fn build(&self) -> Result<MontyHallExperiment, ConfigError> {
        let doors = self
            .doors
            .iter()
            .map(|door| match &door.label {
                Some(label) => DoorSpec::labelled(label.as_str(), door.probability),
                None => DoorSpec::new(door.probability),
            })
            .collect();
        Ok(MontyHallExperiment::new(doors, self.number_of_doors)?)
    }

    /// Number of doors the experiment will have
    pub fn door_count(&self) -> usize {
        self.number_of_doors.unwrap_or(self.doors.len())
    }
}

impl SimulationConfig {
    /// Resolves the configured strategy names, keeping their order
    pub fn resolve_strategies(&self) -> Result<Vec<(String, Strategy)>, ConfigError> {
        self.strategies
            .iter()
            .map(|name| -> Result<(String, Strategy), ConfigError> {
                Ok((name.clone(), strategy::resolve(name)?))
            })
            .collect()
    }

    pub fn options(&self) -> SimulationOptions {
        SimulationOptions {
            trials: self.num_trials,
            max_workers: self.max_workers,
            batch_size: self.batch_size,
            seed: self.seed,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(SIMPLE_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.experiment, &self.simulation)
    }

    pub fn load_sweep_door_count() -> Result<SweepDoorCountConfig, ConfigError> {
        Self::load_sweep_door_count_from(SWEEP_DOOR_COUNT_CONFIG_PATH)
    }

    pub fn load_sweep_door_count_from(path: impl AsRef<Path>) -> Result<SweepDoorCountConfig, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        SweepDoorCountConfig::from_toml(&config_str)
    }
}

impl SweepDoorCountConfig {
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: SweepDoorCountConfig = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.experiment, &self.simulation)?;
        if self.experiment.number_of_doors.is_none() {
            return Err(ConfigError::ValidationError(
                "Door count sweeps start from number_of_doors".into(),
            ));
        }
        if self.sweep.num_simulations == 0 {
            return Err(ConfigError::ValidationError("Number of simulations must be positive".into()));
        }
        match self.sweep.door_count_step {
            Some(step) if step > 0 => Ok(()),
            _ => Err(ConfigError::ValidationError("Door count step must be positive".into())),
        }
    }

    /// Door counts visited by the sweep, starting from the configured count
    pub fn door_counts(&self) -> Vec<usize> {
        let start = self.experiment.door_count();
        let step = self.sweep.door_count_step.unwrap_or(1);
        (0..self.sweep.num_simulations).map(|i| start + i * step).collect()
    }
}
