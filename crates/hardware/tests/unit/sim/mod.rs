/// Assembly loading.
pub mod loader;

/// Cycle driver: reports, capacity check, fatal errors.
pub mod simulator;
