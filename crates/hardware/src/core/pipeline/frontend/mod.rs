//! Dual-track front end: IF1 -> IF2 -> ID1 -> ID2.
//!
//! The front end advances as a unit. The engine ticks it only when register
//! read accepted its instruction this cycle; otherwise every front-end latch
//! holds, so nothing younger slips past a stalled instruction.

pub mod decode;
pub mod fetch1;
pub mod fetch2;

use crate::core::Cpu;
use crate::core::pipeline::hazards::StallWindow;
use crate::core::pipeline::latches::{DecodeEntry, FetchEntry, Latch, SeqNo};

/// The dual-track front end.
#[derive(Debug)]
pub struct Frontend {
    /// IF1 -> IF2 latch.
    pub fetch1_fetch2: Latch<FetchEntry>,
    /// IF2 -> ID1 latch.
    pub fetch2_decode1: Latch<FetchEntry>,
    /// ID1 -> ID2 latch.
    pub decode1_decode2: Latch<DecodeEntry>,
    /// Fetch bubbles still owed to an unresolved branch or jump.
    pub window: StallWindow,
    /// Next sequence number IF1 hands out.
    pub next_seq: SeqNo,
}

impl Default for Frontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend {
    /// Creates an empty front end; the first register writer gets sequence number 1.
    pub fn new() -> Self {
        Self {
            fetch1_fetch2: Latch::Empty,
            fetch2_decode1: Latch::Empty,
            decode1_decode2: Latch::Empty,
            window: StallWindow::default(),
            next_seq: SeqNo(1),
        }
    }

    /// Executes one cycle of all front-end stages (reverse order).
    ///
    /// `decode2_rr` must have been consumed by register read this cycle.
    pub fn tick(&mut self, cpu: &mut Cpu, decode2_rr: &mut Latch<DecodeEntry>) {
        decode::decode2_stage(cpu, &mut self.decode1_decode2, decode2_rr);
        decode::decode1_stage(&mut self.fetch2_decode1, &mut self.decode1_decode2);
        fetch2::fetch2_stage(cpu, &mut self.fetch1_fetch2, &mut self.fetch2_decode1, &mut self.window);
        fetch1::fetch1_stage(cpu, &mut self.fetch1_fetch2, &mut self.window, &mut self.next_seq);
    }

    /// True if every front-end latch is idle and no stall window is open.
    pub const fn is_idle(&self) -> bool {
        self.fetch1_fetch2.is_idle()
            && self.fetch2_decode1.is_idle()
            && self.decode1_decode2.is_idle()
            && !self.window.is_active()
    }
}
