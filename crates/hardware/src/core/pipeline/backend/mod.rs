//! Back ends of the multi-track pipeline organizations.

/// Dual-track (R/I) back end and its engine.
pub mod dual_track;
