//! Control signals derived at decode and carried down the pipeline.

use crate::isa::instruction::{Decoded, OpClass};
use crate::isa::opcodes;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Addition (also address generation for loads/stores).
    #[default]
    Add,
    /// Subtraction.
    Sub,
    /// Bitwise exclusive-or.
    Xor,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
}

impl AluOp {
    /// Computes the operation over two register-width operands.
    ///
    /// Add and Sub wrap on overflow, as register arithmetic does.
    pub fn compute(self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Sub => a.wrapping_sub(b),
            Self::Xor => a ^ b,
            Self::Or => a | b,
            Self::And => a & b,
        }
    }
}

/// Source of the ALU's second operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// The sign-extended immediate.
    Imm,
    /// The rs2 register value.
    #[default]
    Reg,
}

/// Per-instruction control signals.
///
/// Derived once in decode and read by every downstream stage; a bubble
/// carries the all-false default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Writeback stage writes `rd`.
    pub reg_write: bool,
    /// Memory stage performs a load.
    pub mem_read: bool,
    /// Memory stage performs a store.
    pub mem_write: bool,
    /// The writeback value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// The instruction is a conditional branch.
    pub branch: bool,
    /// The instruction is an unconditional jump (JAL).
    pub jump: bool,
    /// The instruction is the halt marker.
    pub halt: bool,
    /// ALU operation to perform in EX.
    pub alu: AluOp,
    /// Second ALU operand source.
    pub b_src: OpBSrc,
}

impl ControlSignals {
    /// Derives the control signals for a decoded instruction.
    pub fn derive(d: &Decoded) -> Self {
        let alu = match d.class {
            OpClass::ArithR => match (d.funct3, d.funct7) {
                (opcodes::F3_ADD_SUB, opcodes::F7_SUB) => AluOp::Sub,
                (opcodes::F3_XOR, _) => AluOp::Xor,
                (opcodes::F3_OR, _) => AluOp::Or,
                (opcodes::F3_AND, _) => AluOp::And,
                _ => AluOp::Add,
            },
            OpClass::ArithI => match d.funct3 {
                opcodes::F3_XOR => AluOp::Xor,
                opcodes::F3_OR => AluOp::Or,
                opcodes::F3_AND => AluOp::And,
                _ => AluOp::Add,
            },
            _ => AluOp::Add,
        };

        Self {
            reg_write: d.writes_rd(),
            mem_read: d.class == OpClass::Load,
            mem_write: d.class == OpClass::Store,
            mem_to_reg: d.class == OpClass::Load,
            branch: d.class == OpClass::Branch,
            jump: d.class == OpClass::Jal,
            halt: d.class == OpClass::Halt,
            alu,
            b_src: match d.class {
                OpClass::ArithI | OpClass::Load | OpClass::Store => OpBSrc::Imm,
                _ => OpBSrc::Reg,
            },
        }
    }
}
