pub mod run_all_tests;
pub mod sim_simple;
pub mod sim_sweep_door_count;
pub mod sweep_runner;
pub mod utils;
