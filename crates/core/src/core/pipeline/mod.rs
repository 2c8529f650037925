//! The five-stage pipelined engine.
//!
//! This module implements a classic in-order IF/ID/EX/MEM/WB pipeline:
//! 1. **Double Buffering:** Stages read one committed [`PipeState`] snapshot
//!    and write the next; the swap at the end of the tick is the only commit
//!    point, so intra-tick stage ordering cannot leak state.
//! 2. **Hazards:** Full forwarding into EX, early branch resolution in ID,
//!    and a single-bubble load-use stall (see [`hazards`]).
//! 3. **Drain:** The halt marker stops fetch and flows to writeback; the
//!    engine halts once every latch is a bubble.

pub mod hazards;
pub mod latches;
pub mod signals;
pub mod stages;

use tracing::warn;

use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::core::Engine;
use crate::mem::{DataMemory, InstructionMemory};
use crate::sim::output;
use crate::stats::SimStats;

pub use latches::{ExMemEntry, IdExEntry, IfIdEntry, IfStage, MemWbEntry, PipeState};

/// The five-stage pipelined engine.
#[derive(Debug)]
pub struct FiveStageCore {
    pub(crate) imem: InstructionMemory,
    pub(crate) dmem: DataMemory,
    pub(crate) regs: RegisterFile,
    /// Committed snapshot the current tick reads from.
    pub(crate) state: PipeState,
    /// Snapshot under construction for the next tick.
    pub(crate) next: PipeState,
    /// Set by decode when a load-use hazard freezes fetch this tick.
    pub(crate) stall: bool,
    /// Set by decode when a taken branch or jump steers fetch this tick.
    pub(crate) redirect: Option<u32>,
    pub(crate) stats: SimStats,
    halted: bool,
    limit_hit: bool,
    max_cycles: u64,
    rf_log: String,
    state_log: String,
}

impl FiveStageCore {
    /// Creates a pipelined engine over the given memories.
    ///
    /// # Arguments
    ///
    /// * `imem` - The program image.
    /// * `dmem` - This engine's private data memory.
    /// * `max_cycles` - Safety limit for programs that never halt.
    pub fn new(imem: InstructionMemory, dmem: DataMemory, max_cycles: u64) -> Self {
        Self {
            imem,
            dmem,
            regs: RegisterFile::new(),
            state: PipeState::default(),
            next: PipeState::default(),
            stall: false,
            redirect: None,
            stats: SimStats::default(),
            halted: false,
            limit_hit: false,
            max_cycles,
            rf_log: String::new(),
            state_log: String::new(),
        }
    }

    /// The committed pipeline snapshot, for inspection.
    pub fn pipe_state(&self) -> &PipeState {
        &self.state
    }
}

impl Engine for FiveStageCore {
    /// Runs one clock tick.
    ///
    /// Stages are evaluated writeback-first so each reads only the committed
    /// snapshot; fetch runs last because decode's stall/redirect decisions
    /// steer it within the same tick.
    fn step(&mut self) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }

        self.stall = false;
        self.redirect = None;
        self.next = PipeState::default();

        stages::writeback_stage(self);
        stages::memory_stage(self).inspect_err(|_| self.halted = true)?;
        stages::execute_stage(self);
        stages::decode_stage(self).inspect_err(|_| self.halted = true)?;
        stages::fetch_stage(self);

        output::record_rf_pipeline(&mut self.rf_log, self.stats.cycles, &self.regs);
        output::record_state_pipeline(&mut self.state_log, self.stats.cycles, &self.next);

        if self.next.is_drained() {
            self.halted = true;
        }

        self.state = std::mem::take(&mut self.next);
        self.stats.cycles += 1;

        if !self.halted && self.stats.cycles >= self.max_cycles {
            warn!(
                limit = self.max_cycles,
                "pipelined engine hit the cycle safety limit"
            );
            self.halted = true;
            self.limit_hit = true;
        }

        Ok(())
    }

    fn halted(&self) -> bool {
        self.halted
    }

    fn hit_cycle_limit(&self) -> bool {
        self.limit_hit
    }

    fn stats(&self) -> &SimStats {
        &self.stats
    }

    fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    fn data_memory(&self) -> &DataMemory {
        &self.dmem
    }

    fn rf_log(&self) -> &str {
        &self.rf_log
    }

    fn state_log(&self) -> &str {
        &self.state_log
    }
}
