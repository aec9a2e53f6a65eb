/// Arithmetic, branch, and address units.
pub mod arithmetic;
