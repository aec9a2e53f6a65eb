
/// Pipelined versus unpipelined architectural state.
pub mod equivalence;



/// Decoded control signals.
pub mod signals;
