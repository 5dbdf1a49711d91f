use anyhow::{bail, Context};
use simulator::{
    config::Config,
    interface::{get_menu_text, SimulationType},
    scenarios::{
        run_all_tests::run_all_tests,
        sim_simple::run_simple_simulation_with,
        sim_sweep_door_count::run_sweep_door_count_with,
    },
};
use std::env;

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Runs the simulation named by the first argument.
///
/// An optional second argument overrides the config file of the scenario.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(choice) = args.get(1) else {
        println!("=== Monty Hall Simulator ===");
        println!("{}", get_menu_text());
        println!("\nUsage: simulator <simulation type> [config file]");
        return Ok(());
    };
    let config_path = args.get(2);

    match SimulationType::from_input(choice) {
        Some(SimulationType::Simple) => {
            let config = match config_path {
                Some(path) => Config::load_from(path),
                None => Config::load(),
            }
            .context("Failed to load simple simulation config")?;
            run_simple_simulation_with(&config)?;
        }
        Some(SimulationType::SweepDoorCount) => {
            let config = match config_path {
                Some(path) => Config::load_sweep_door_count_from(path),
                None => Config::load_sweep_door_count(),
            }
            .context("Failed to load door count sweep config")?;
            run_sweep_door_count_with(&config)?;
        }
        Some(SimulationType::RunAllTests) => run_all_tests()?,
        None => bail!("Unknown simulation type '{}'\n{}", choice, get_menu_text()),
    }

    Ok(())
}
