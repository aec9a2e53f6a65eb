/// Register file.
pub mod arch;

/// Data memory.
pub mod cpu;

/// Pipeline engines, locks, and hazards.
pub mod pipeline;

/// Functional units.
pub mod units;
