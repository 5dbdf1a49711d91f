use montyhall::MontyHallExperiment;

use crate::config::{Config, ConfigError, SweepDoorCountConfig};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::simulation_results::SimulationResults;

/// Runs the door count sweep from the default config file
pub fn run_sweep_door_count_simulation() -> Result<Vec<(usize, SimulationResults)>, ConfigError> {
    run_sweep_door_count_with(&Config::load_sweep_door_count()?)
}

/// Runs every configured strategy on uniform door sets of growing size.
///
/// The door counts start at `number_of_doors` and grow by `door_count_step`.
pub fn run_sweep_door_count_with(
    sweep_config: &SweepDoorCountConfig,
) -> Result<Vec<(usize, SimulationResults)>, ConfigError> {
    let runner = SweepRunner::new(
        "Door Count",
        "sim_sweep_door_count",
        "number_of_doors",
        sweep_config.door_counts(),
        sweep_config.simulation.clone(),
        Box::new(|door_count: &usize| {
            MontyHallExperiment::with_door_count(*door_count).map_err(ConfigError::from)
        }),
    );

    runner.run()
}
