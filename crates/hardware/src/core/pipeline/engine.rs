//! Pipeline engine trait and type erasure.
//!
//! This module defines the seam between the cycle driver and the pipeline
//! organizations:
//! 1. **`Phase`:** the two half-cycles every engine is advanced through.
//! 2. **`PipelineEngine`:** what every organization implements.
//! 3. **`PipelineDispatch`:** enum dispatch over the concrete engines.
//!
//! Within one cycle the simulator calls `advance(Phase::Commit)` and then
//! `advance(Phase::Propagate)`. The commit half performs the writes that must
//! be visible to everything else this cycle (register write-back, stores in
//! the 5-stage memory stage); the propagate half moves every latch one stage
//! downstream, visiting stages from write-back towards fetch so that no stage
//! reads a latch its downstream neighbour has already refilled.

use crate::common::error::Fault;
use crate::config::PipelineKind;
use crate::core::Cpu;
use crate::core::pipeline::backend::dual_track::DualTrackEngine;
use crate::core::pipeline::latches::SeqNo;
use crate::core::pipeline::sequential::SequentialEngine;
use crate::core::pipeline::stages::FiveStageEngine;

/// Half of a clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// First half: architectural writes at the end of the pipeline.
    Commit,
    /// Second half: every stage consumes its upstream latch and fills its downstream one.
    Propagate,
}

/// A pipeline organization driven one half-cycle at a time.
pub trait PipelineEngine {
    /// Runs every stage's behaviour for `phase` in the engine's fixed order.
    ///
    /// # Returns
    ///
    /// `Err` if an instruction raised a fatal error; the engine must not be
    /// advanced further.
    fn advance(&mut self, cpu: &mut Cpu, phase: Phase) -> Result<(), Fault>;

    /// True once nothing is left in flight and nothing more will be fetched.
    fn is_drained(&self) -> bool;

    /// Which organization this engine models.
    fn kind(&self) -> PipelineKind;

    /// Highest commit-order number retired so far, for engines that number
    /// their register writes.
    fn last_committed(&self) -> Option<SeqNo> {
        None
    }
}

/// Enum dispatch over the concrete engines.
#[derive(Debug)]
pub enum PipelineDispatch {
    /// Reference executor.
    Unpipelined(SequentialEngine),
    /// 5-stage pipeline.
    FiveStage(Box<FiveStageEngine>),
    /// Dual-track 7/9-stage pipeline.
    DualTrack(Box<DualTrackEngine>),
}

impl PipelineDispatch {
    /// Builds a fresh engine of the requested kind.
    pub fn new(kind: PipelineKind) -> Self {
        match kind {
            PipelineKind::Unpipelined => Self::Unpipelined(SequentialEngine::new()),
            PipelineKind::FiveStage => Self::FiveStage(Box::default()),
            PipelineKind::DualTrack => Self::DualTrack(Box::default()),
        }
    }

    /// Advances the wrapped engine through one half-cycle.
    pub fn advance(&mut self, cpu: &mut Cpu, phase: Phase) -> Result<(), Fault> {
        match self {
            Self::Unpipelined(e) => e.advance(cpu, phase),
            Self::FiveStage(e) => e.advance(cpu, phase),
            Self::DualTrack(e) => e.advance(cpu, phase),
        }
    }

    /// True once the wrapped engine has drained.
    pub fn is_drained(&self) -> bool {
        match self {
            Self::Unpipelined(e) => e.is_drained(),
            Self::FiveStage(e) => e.is_drained(),
            Self::DualTrack(e) => e.is_drained(),
        }
    }

    /// Organization of the wrapped engine.
    pub fn kind(&self) -> PipelineKind {
        match self {
            Self::Unpipelined(e) => e.kind(),
            Self::FiveStage(e) => e.kind(),
            Self::DualTrack(e) => e.kind(),
        }
    }

    /// Highest commit-order number retired so far (dual-track only).
    pub fn last_committed(&self) -> Option<SeqNo> {
        match self {
            Self::Unpipelined(e) => e.last_committed(),
            Self::FiveStage(e) => e.last_committed(),
            Self::DualTrack(e) => e.last_committed(),
        }
    }

    /// The 5-stage engine, if that is what is wrapped.
    pub fn as_five_stage(&self) -> Option<&FiveStageEngine> {
        match self {
            Self::FiveStage(e) => Some(e),
            _ => None,
        }
    }

    /// The dual-track engine, if that is what is wrapped.
    pub fn as_dual_track(&self) -> Option<&DualTrackEngine> {
        match self {
            Self::DualTrack(e) => Some(e),
            _ => None,
        }
    }
}
