//! Command line selection of the simulation to run.

/// Simulations the binary can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationType {
    Simple,
    SweepDoorCount,
    RunAllTests,
}

impl SimulationType {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" | "simple" => Some(SimulationType::Simple),
            "2" | "sweep_door_count" => Some(SimulationType::SweepDoorCount),
            "3" | "all" => Some(SimulationType::RunAllTests),
            _ => None,
        }
    }
}

pub fn get_menu_text() -> &'static str {
    "Available simulation types:\n  1. simple            Run each strategy on the configured doors\n  2. sweep_door_count  Sweep the number of equally likely doors\n  3. all               Run all of the above"
}
