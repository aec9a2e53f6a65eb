//! Instruction pipeline implementation.
//!
//! This module contains every pipeline organization and the pieces they share:
//! 1. **Engine:** The half-cycle interface the simulator drives, and enum dispatch.
//! 2. **Latches:** Four-state inter-stage slots and the entries they carry.
//! 3. **Scoreboard:** Register lock counters with end-of-cycle release.
//! 4. **Hazards:** Lock gating and control stall windows.
//! 5. **Stages:** The 5-stage pipeline (IF, ID, EX, MEM, WB).
//! 6. **Frontend / Backend:** The dual-track pipeline (IF1 through ID2, RR, R/I tracks).
//! 7. **Sequential:** The unpipelined reference engine.

/// Dual-track back end (register read, tracks, in-order commit).
pub mod backend;

/// Engine trait and dispatch.
pub mod engine;

/// Dual-track front end (IF1, IF2, ID1, ID2).
pub mod frontend;

/// Pipeline hazard detection and control stall windows.
pub mod hazards;

/// Inter-stage pipeline latches.
pub mod latches;

/// Register lock table.
pub mod scoreboard;

/// Unpipelined reference engine.
pub mod sequential;

/// Control signals generated during instruction decode.
pub mod signals;

/// 5-stage pipeline stages and engine.
pub mod stages;
