//! The two simulation engines.
//!
//! 1. **Single-cycle** ([`single_cycle::SingleCycleCore`]): executes one full
//!    instruction per tick.
//! 2. **Five-stage pipeline** ([`pipeline::FiveStageCore`]): overlapped
//!    execution with forwarding, stalls, and flushes.
//!
//! Both implement [`Engine`], commit architecturally identical final state
//! for the same program, and differ only in cycle accounting.

pub mod pipeline;
pub mod single_cycle;

use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::mem::DataMemory;
use crate::stats::SimStats;

/// Common capability surface of the two engines.
pub trait Engine {
    /// Advances the engine by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns a decode or memory fault; the faulting tick is not committed
    /// and the engine is left halted.
    fn step(&mut self) -> Result<(), SimError>;

    /// Whether the engine has finished (clean halt or safety limit).
    fn halted(&self) -> bool;

    /// Whether the engine stopped because of the cycle safety limit.
    fn hit_cycle_limit(&self) -> bool;

    /// The statistics accumulated so far.
    fn stats(&self) -> &SimStats;

    /// The architectural register file.
    fn registers(&self) -> &RegisterFile;

    /// The data memory.
    fn data_memory(&self) -> &DataMemory;

    /// The per-cycle register-file dump recorded so far.
    fn rf_log(&self) -> &str;

    /// The per-cycle state dump recorded so far.
    fn state_log(&self) -> &str;
}
