use montyhall::utils::logging;
use std::time::Instant;

/// Runs all simulation scenarios sequentially
pub fn run_all_tests() -> Result<(), crate::config::ConfigError> {
    let start_time = Instant::now();

    logging::log("SIMULATOR", "=== Starting All Tests Suite ===");

    crate::scenarios::sim_simple::run_simple_simulation()?;
    crate::scenarios::sim_sweep_door_count::run_sweep_door_count_simulation()?;

    let total_time = start_time.elapsed();
    logging::log("SIMULATOR", "=== All Tests Completed Successfully ===");
    println!("All tests completed successfully!");
    println!("Total execution time: {:.2?}", total_time);

    Ok(())
}
