//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five pipeline
//! stages: Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One entry type per latch boundary.
//! 2. **Bubble Encoding:** Every entry carries a `nop` flag; a defaulted
//!    entry is a bubble, and a drained pipeline is all-nop.
//! 3. **Double Buffering:** [`PipeState`] snapshots a whole tick; stages read
//!    the current snapshot and write only the next one.

use crate::core::pipeline::signals::ControlSignals;

/// The fetch stage's own state: the PC and whether issue has stopped.
///
/// `nop` goes true once the halt marker (or the end of instruction memory)
/// is reached; the PC then holds its last value while the pipeline drains.
#[derive(Clone, Debug)]
pub struct IfStage {
    /// Fetch is stopped.
    pub nop: bool,
    /// Program counter of the next fetch.
    pub pc: u32,
}

impl Default for IfStage {
    fn default() -> Self {
        Self { nop: false, pc: 0 }
    }
}

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Debug)]
pub struct IfIdEntry {
    /// This slot holds a bubble.
    pub nop: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

impl Default for IfIdEntry {
    fn default() -> Self {
        Self {
            nop: true,
            pc: 0,
            inst: 0,
        }
    }
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Debug)]
pub struct IdExEntry {
    /// This slot holds a bubble.
    pub nop: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index (rs1).
    pub rs1: usize,
    /// Second source register index (rs2).
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Operand value for rs1, forwarded where a newer in-flight result exists.
    pub rv1: u32,
    /// Operand value for rs2, forwarded where a newer in-flight result exists.
    pub rv2: u32,
    /// Sign-extended I/S-format immediate (zero for other formats).
    pub imm: i32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

impl Default for IdExEntry {
    fn default() -> Self {
        Self {
            nop: true,
            pc: 0,
            inst: 0,
            rs1: 0,
            rs2: 0,
            rd: 0,
            rv1: 0,
            rv2: 0,
            imm: 0,
            ctrl: ControlSignals::default(),
        }
    }
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Debug)]
pub struct ExMemEntry {
    /// This slot holds a bubble.
    pub nop: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// ALU result, memory address, or the JAL return address.
    pub alu: u32,
    /// Data to be stored (for store instructions).
    pub store_data: u32,
    /// First source register index, carried for state dumps.
    pub rs1: usize,
    /// Second source register index, carried for state dumps.
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

impl Default for ExMemEntry {
    fn default() -> Self {
        Self {
            nop: true,
            pc: 0,
            inst: 0,
            alu: 0,
            store_data: 0,
            rs1: 0,
            rs2: 0,
            rd: 0,
            ctrl: ControlSignals::default(),
        }
    }
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Debug)]
pub struct MemWbEntry {
    /// This slot holds a bubble.
    pub nop: bool,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Value destined for the register file (load data or ALU result).
    pub wrt_data: u32,
    /// First source register index, carried for state dumps.
    pub rs1: usize,
    /// Second source register index, carried for state dumps.
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl Default for MemWbEntry {
    fn default() -> Self {
        Self {
            nop: true,
            inst: 0,
            wrt_data: 0,
            rs1: 0,
            rs2: 0,
            rd: 0,
            ctrl: ControlSignals::default(),
        }
    }
}

/// One full snapshot of the pipeline's architectural latch state.
#[derive(Clone, Debug, Default)]
pub struct PipeState {
    /// Fetch-stage state.
    pub if_stage: IfStage,
    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: IdExEntry,
    /// EX/MEM latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB latch.
    pub mem_wb: MemWbEntry,
}

impl PipeState {
    /// Whether fetch has stopped and every latch holds a bubble.
    pub fn is_drained(&self) -> bool {
        self.if_stage.nop
            && self.if_id.nop
            && self.id_ex.nop
            && self.ex_mem.nop
            && self.mem_wb.nop
    }
}
