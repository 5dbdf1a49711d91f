use indicatif::{ProgressBar, ProgressStyle};
use montyhall::{utils::logging, MontyHallExperiment};

use crate::config::{ConfigError, SimulationConfig};
use crate::scenarios::utils::{results_dir, setup_logging};
use crate::simulation_results::{save_results, SimulationResults};

/// Builds the experiment for one parameter value of a sweep
pub type ExperimentFactory<T> = Box<dyn Fn(&T) -> Result<MontyHallExperiment, ConfigError>>;

/// Generic sweep runner: runs every configured strategy once per parameter value
pub struct SweepRunner<T> {
    sweep_name: String,
    results_dir: String,
    parameter_name: String,
    parameter_values: Vec<T>,
    simulation: SimulationConfig,
    experiment_factory: ExperimentFactory<T>,
}

impl<T: std::fmt::Debug + Clone + serde::Serialize> SweepRunner<T> {
    pub fn new(
        sweep_name: &str,
        results_dir: &str,
        parameter_name: &str,
        parameter_values: Vec<T>,
        simulation: SimulationConfig,
        experiment_factory: ExperimentFactory<T>,
    ) -> Self {
        Self {
            sweep_name: sweep_name.to_string(),
            results_dir: results_dir.to_string(),
            parameter_name: parameter_name.to_string(),
            parameter_values,
            simulation,
            experiment_factory,
        }
    }

    /// Runs the complete sweep simulation
    pub fn run(&self) -> Result<Vec<(T, SimulationResults)>, ConfigError> {
        let results_dir = results_dir(&self.results_dir)?;

        setup_logging();

        let strategies = self.simulation.resolve_strategies()?;
        let options = self.simulation.options();
        let total_runs = self.parameter_values.len() * strategies.len();

        self.log_sweep_start();
        println!("Running Sweep: {}", self.sweep_name);

        let progress_bar = self.create_progress_bar(total_runs);
        let mut all_results = Vec::with_capacity(total_runs);

        for (sim_index, param_value) in self.parameter_values.iter().enumerate() {
            logging::log("SIMULATOR", &format!(
                "Running simulation {}/{} with {}: {:?}",
                sim_index + 1,
                self.parameter_values.len(),
                self.parameter_name,
                param_value
            ));

            let experiment = (self.experiment_factory)(param_value)?;
            for (name, strategy) in &strategies {
                let report = match experiment.run_simulations_with(*strategy, &options) {
                    Ok(report) => report,
                    Err(e) => {
                        logging::log("SIMULATOR", &format!(
                            "Sweep '{}' failed during simulation {}/{} with {}: {:?} ({}): {}",
                            self.sweep_name,
                            sim_index + 1,
                            self.parameter_values.len(),
                            self.parameter_name,
                            param_value,
                            name,
                            e
                        ));
                        progress_bar.abandon();
                        return Err(e.into());
                    }
                };
                let results = SimulationResults::new(name, &experiment, &report, options.seed);
                results.log_summary();
                all_results.push((param_value.clone(), results));

                progress_bar.inc(1);
                progress_bar.set_message(format!("{} with {}: {:?}", name, self.parameter_name, param_value));
            }
        }

        progress_bar.finish_with_message(format!("{} complete", self.sweep_name));
        println!("Sweep simulation complete");

        self.save(&results_dir, &all_results)?;

        logging::log("SIMULATOR", "=== Sweep Simulation Complete ===");
        logging::log("SIMULATOR", &format!("Total simulations completed: {}", all_results.len()));

        Ok(all_results)
    }

    /// Creates a progress bar for the sweep
    fn create_progress_bar(&self, total_runs: usize) -> ProgressBar {
        let progress_bar = ProgressBar::new(total_runs as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {msg}") {
            progress_bar.set_style(style.progress_chars("+>-"));
        }
        progress_bar
    }

    /// Logs the start of the sweep
    fn log_sweep_start(&self) {
        logging::log("SIMULATOR", &format!("=== Sweep {} Simulation ===", self.sweep_name));
        logging::log("SIMULATOR", &format!("Number of simulations: {}", self.parameter_values.len()));
        logging::log("SIMULATOR", &format!("{} values: {:?}", self.parameter_name, self.parameter_values));
        logging::log("SIMULATOR", &format!("Strategies: {:?}", self.simulation.strategies));
        logging::log("SIMULATOR", "================================");
    }

    /// Saves the combined sweep results
    fn save(&self, results_dir: &str, all_results: &[(T, SimulationResults)]) -> Result<(), ConfigError> {
        let mut sweep_summary = serde_json::Map::new();
        sweep_summary.insert("num_simulations".to_string(), serde_json::to_value(self.parameter_values.len())?);
        sweep_summary.insert("strategies".to_string(), serde_json::to_value(&self.simulation.strategies)?);
        sweep_summary.insert(self.parameter_name.clone(), serde_json::to_value(&self.parameter_values)?);

        let mut individual_results = Vec::with_capacity(all_results.len());
        for (param, results) in all_results {
            let mut json_obj = serde_json::Map::new();
            json_obj.insert(self.parameter_name.clone(), serde_json::to_value(param)?);
            json_obj.insert("results".to_string(), serde_json::to_value(results)?);
            individual_results.push(serde_json::Value::Object(json_obj));
        }

        let combined_results = serde_json::json!({
            "sweep_summary": sweep_summary,
            "individual_results": individual_results,
        });

        save_results(results_dir, "sweep_results.json", &combined_results)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::utils::RESULTS_ROOT;
    use montyhall::SimulationError;

    /// A failing run keeps its simulation error instead of becoming a config error
    #[test]
    fn test_sweep_propagates_simulation_error() {
        let simulation = SimulationConfig {
            strategies: vec!["always_swap".to_string()],
            num_trials: 100,
            max_workers: Some(1),
            batch_size: 50,
            seed: Some(1),
        };
        let runner = SweepRunner::new(
            "Host Refuses",
            "sim_sweep_host_refuses",
            "number_of_doors",
            vec![4usize],
            simulation,
            Box::new(|door_count: &usize| -> Result<MontyHallExperiment, ConfigError> {
                Ok(MontyHallExperiment::with_door_count(*door_count)?
                    .with_elimination_choice(|_, _| None))
            }),
        );

        let result = runner.run();
        let _ = std::fs::remove_dir_all(format!("{}/sim_sweep_host_refuses", RESULTS_ROOT));
        assert!(matches!(
            result,
            Err(ConfigError::Simulation(SimulationError::NoEliminationCandidate { remaining: 4 }))
        ));
    }
}
