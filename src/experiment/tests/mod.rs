mod driver;
mod invariants;
