/// Data segment and change log.
pub mod memory;
