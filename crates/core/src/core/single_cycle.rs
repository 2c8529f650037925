//! The single-cycle engine.
//!
//! One instruction per tick: fetch, decode, execute, memory, writeback all
//! complete before the PC advances. No hazards exist, so this engine is the
//! architectural reference the pipelined engine is checked against.

use tracing::{trace, warn};

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::core::Engine;
use crate::core::pipeline::signals::{ControlSignals, OpBSrc};
use crate::isa::instruction::OpClass;
use crate::isa::{decode, opcodes};
use crate::mem::{DataMemory, InstructionMemory};
use crate::sim::output;
use crate::stats::SimStats;

/// The single-cycle engine.
#[derive(Debug)]
pub struct SingleCycleCore {
    imem: InstructionMemory,
    dmem: DataMemory,
    regs: RegisterFile,
    pc: u32,
    /// Fetch-stop flag mirrored into the state dump.
    fetch_stopped: bool,
    stats: SimStats,
    halted: bool,
    limit_hit: bool,
    max_cycles: u64,
    rf_log: String,
    state_log: String,
}

impl SingleCycleCore {
    /// Creates a single-cycle engine over the given memories.
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
            pc: 0,
            fetch_stopped: false,
            stats: SimStats::default(),
            halted: false,
            limit_hit: false,
            max_cycles,
            rf_log: String::new(),
            state_log: String::new(),
        }
    }

    /// The current program counter.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    fn record(&mut self, next_pc: u32, stopped: bool) {
        output::record_rf_single(&mut self.rf_log, self.stats.cycles, &self.regs);
        output::record_state_single(&mut self.state_log, self.stats.cycles, next_pc, stopped);
    }
}

impl Engine for SingleCycleCore {
    /// Executes one full instruction (one tick).
    ///
    /// The halt marker and running off the end of instruction memory both
    /// stop the engine on a tick that counts toward the cycle total but does
    /// not retire an instruction.
    fn step(&mut self) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }

        let pc = self.pc;
        if !self.imem.contains_word(pc) {
            self.fetch_stopped = true;
            self.halted = true;
            self.record(pc, true);
            self.stats.cycles += 1;
            return Ok(());
        }

        let inst = self.imem.read_word(pc)?;
        let d = decode(inst, pc).inspect_err(|_| self.halted = true)?;
        trace!(
            pc = format_args!("{pc:#x}"),
            inst = format_args!("{inst:#010x}"),
            "SS step"
        );

        if d.class == OpClass::Halt {
            self.fetch_stopped = true;
            self.halted = true;
            self.record(pc, true);
            self.stats.cycles += 1;
            return Ok(());
        }

        let ctrl = ControlSignals::derive(&d);
        let rs1_val = self.regs.read(d.rs1);
        let rs2_val = self.regs.read(d.rs2);
        let mut next_pc = pc.wrapping_add(WORD_BYTES);
        let mut wb_data = 0u32;

        match d.class {
            OpClass::ArithR | OpClass::ArithI => {
                let op2 = match ctrl.b_src {
                    OpBSrc::Imm => d.imm as u32,
                    OpBSrc::Reg => rs2_val,
                };
                wb_data = ctrl.alu.compute(rs1_val, op2);
            }
            OpClass::Load => {
                let addr = rs1_val.wrapping_add(d.imm as u32);
                wb_data = self
                    .dmem
                    .read_word(addr)
                    .inspect_err(|_| self.halted = true)?;
            }
            OpClass::Store => {
                let addr = rs1_val.wrapping_add(d.imm as u32);
                self.dmem
                    .write_word(addr, rs2_val)
                    .inspect_err(|_| self.halted = true)?;
            }
            OpClass::Branch => {
                let taken = if d.funct3 == opcodes::F3_BNE {
                    rs1_val != rs2_val
                } else {
                    rs1_val == rs2_val
                };
                if taken {
                    next_pc = pc.wrapping_add(d.imm as u32);
                }
            }
            OpClass::Jal => {
                wb_data = pc.wrapping_add(WORD_BYTES);
                next_pc = pc.wrapping_add(d.imm as u32);
            }
            OpClass::Halt => unreachable!("halt handled before execution"),
        }

        if ctrl.reg_write {
            self.regs.write(d.rd, wb_data);
        }

        self.stats.instructions_retired += 1;
        match d.class {
            OpClass::Load => self.stats.loads += 1,
            OpClass::Store => self.stats.stores += 1,
            OpClass::Branch => self.stats.branches += 1,
            OpClass::Jal => self.stats.jumps += 1,
            _ => self.stats.alu_ops += 1,
        }

        self.record(next_pc, false);
        self.pc = next_pc;
        self.stats.cycles += 1;

        if self.stats.cycles >= self.max_cycles {
            warn!(
                limit = self.max_cycles,
                "single-cycle engine hit the cycle safety limit"
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
