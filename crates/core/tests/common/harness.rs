//! Test harness: instruction encoders, memory builders, and run helpers.
//!
//! Programs are written as slices of encoded words; the builders turn them
//! into big-endian memory images and the run helpers step an engine to its
//! halt with an iteration guard so a broken drain fails the test instead of
//! hanging it.

use rv32sim_core::config::defaults;
use rv32sim_core::core::Engine;
use rv32sim_core::core::pipeline::FiveStageCore;
use rv32sim_core::core::single_cycle::SingleCycleCore;
use rv32sim_core::mem::{DataMemory, InstructionMemory};

/// Iteration guard for run helpers; generous for test-sized programs.
const STEP_GUARD: u64 = 10_000;

// ══════════════════════════════════════════════════════════
// Instruction encoders
// ══════════════════════════════════════════════════════════

fn r_type(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32) -> u32 {
    (funct7 << 25) | ((rs2 & 0x1f) << 20) | ((rs1 & 0x1f) << 15) | (funct3 << 12)
        | ((rd & 0x1f) << 7)
        | 0x33
}

fn i_type(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (((imm as u32) & 0xfff) << 20) | ((rs1 & 0x1f) << 15) | (funct3 << 12) | ((rd & 0x1f) << 7)
        | opcode
}

/// ADD rd, rs1, rs2
pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0x0, rd)
}

/// SUB rd, rs1, rs2
pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x20, rs2, rs1, 0x0, rd)
}

/// XOR rd, rs1, rs2
pub fn xor(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0x4, rd)
}

/// OR rd, rs1, rs2
pub fn or(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0x6, rd)
}

/// AND rd, rs1, rs2
pub fn and(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0x7, rd)
}

/// ADDI rd, rs1, imm
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0x0, rd, 0x13)
}

/// XORI rd, rs1, imm
pub fn xori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0x4, rd, 0x13)
}

/// ORI rd, rs1, imm
pub fn ori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0x6, rd, 0x13)
}

/// ANDI rd, rs1, imm
pub fn andi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0x7, rd, 0x13)
}

/// LW rd, imm(rs1)
pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0x2, rd, 0x03)
}

/// SW rs2, imm(rs1)
pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    let imm = imm as u32;
    (((imm >> 5) & 0x7f) << 25)
        | ((rs2 & 0x1f) << 20)
        | ((rs1 & 0x1f) << 15)
        | (0x2 << 12)
        | ((imm & 0x1f) << 7)
        | 0x23
}

fn b_type(rs1: u32, rs2: u32, funct3: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    (((imm >> 12) & 0x1) << 31)
        | (((imm >> 5) & 0x3f) << 25)
        | ((rs2 & 0x1f) << 20)
        | ((rs1 & 0x1f) << 15)
        | (funct3 << 12)
        | (((imm >> 1) & 0xf) << 8)
        | (((imm >> 11) & 0x1) << 7)
        | 0x63
}

/// BEQ rs1, rs2, byte offset
pub fn beq(rs1: u32, rs2: u32, offset: i32) -> u32 {
    b_type(rs1, rs2, 0x0, offset)
}

/// BNE rs1, rs2, byte offset
pub fn bne(rs1: u32, rs2: u32, offset: i32) -> u32 {
    b_type(rs1, rs2, 0x1, offset)
}

/// JAL rd, byte offset
pub fn jal(rd: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    (((imm >> 20) & 0x1) << 31)
        | (((imm >> 1) & 0x3ff) << 21)
        | (((imm >> 11) & 0x1) << 20)
        | (((imm >> 12) & 0xff) << 12)
        | ((rd & 0x1f) << 7)
        | 0x6f
}

/// The halt marker.
pub fn halt() -> u32 {
    0x7f
}

// ══════════════════════════════════════════════════════════
// Memory builders
// ══════════════════════════════════════════════════════════

/// Flattens encoded words into a big-endian byte image.
pub fn assemble(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Builds an instruction memory from encoded words.
pub fn imem(words: &[u32]) -> InstructionMemory {
    InstructionMemory::new(assemble(words))
}

/// Builds a default-sized, zeroed data memory.
pub fn dmem_zeroed() -> DataMemory {
    DataMemory::new(Vec::new(), defaults::DMEM_IMAGE_BYTES)
}

/// Builds a default-sized data memory with the given word values planted.
pub fn dmem_with_words(words: &[(u32, u32)]) -> DataMemory {
    let mut dmem = dmem_zeroed();
    for &(addr, val) in words {
        dmem.write_word(addr, val).unwrap();
    }
    dmem
}

// ══════════════════════════════════════════════════════════
// Run helpers
// ══════════════════════════════════════════════════════════

/// Runs a program on the five-stage engine until it halts.
pub fn run_five_stage(words: &[u32], dmem: DataMemory) -> FiveStageCore {
    let mut core = FiveStageCore::new(imem(words), dmem, STEP_GUARD);
    while !core.halted() {
        core.step().unwrap();
    }
    assert!(
        !core.hit_cycle_limit(),
        "five-stage engine failed to drain within {STEP_GUARD} cycles"
    );
    core
}

/// Runs a program on the single-cycle engine until it halts.
pub fn run_single_cycle(words: &[u32], dmem: DataMemory) -> SingleCycleCore {
    let mut core = SingleCycleCore::new(imem(words), dmem, STEP_GUARD);
    while !core.halted() {
        core.step().unwrap();
    }
    assert!(
        !core.hit_cycle_limit(),
        "single-cycle engine failed to halt within {STEP_GUARD} cycles"
    );
    core
}

/// Runs a program on both engines with identical initial data memories.
pub fn run_both(words: &[u32], dmem: DataMemory) -> (SingleCycleCore, FiveStageCore) {
    let ss = run_single_cycle(words, dmem.clone());
    let fs = run_five_stage(words, dmem);
    (ss, fs)
}
