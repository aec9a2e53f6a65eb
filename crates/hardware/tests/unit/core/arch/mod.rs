/// General-purpose registers.
pub mod gpr;
