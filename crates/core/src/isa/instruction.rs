//! Decoded-instruction model shared by both engines.

/// Broad class of a decoded instruction, keyed by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClass {
    /// Register-register arithmetic (R-format).
    ArithR,
    /// Register-immediate arithmetic (I-format).
    ArithI,
    /// Word load (I-format addressing).
    Load,
    /// Word store (S-format).
    Store,
    /// Conditional branch (B-format).
    Branch,
    /// Jump-and-link (J-format).
    Jal,
    /// Simulator halt marker.
    Halt,
}

/// A fully decoded instruction.
///
/// Field extraction is uniform across formats; `imm` holds the sign-extended
/// immediate appropriate to the instruction's format (zero for R-format and
/// HALT). Register indices are carried even when the class does not read the
/// corresponding register; consumers must consult [`Decoded::reads_rs1`] and
/// [`Decoded::reads_rs2`] before treating them as live sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The raw 32-bit instruction word.
    pub raw: u32,
    /// Instruction class.
    pub class: OpClass,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// The funct3 field.
    pub funct3: u32,
    /// The funct7 field.
    pub funct7: u32,
    /// Sign-extended immediate for the instruction's format.
    pub imm: i32,
}

impl Decoded {
    /// Whether this instruction reads `rs1` as an operand.
    pub fn reads_rs1(&self) -> bool {
        !matches!(self.class, OpClass::Jal | OpClass::Halt)
    }

    /// Whether this instruction reads `rs2` as an operand.
    pub fn reads_rs2(&self) -> bool {
        matches!(self.class, OpClass::ArithR | OpClass::Store | OpClass::Branch)
    }

    /// Whether this instruction writes a result to `rd`.
    pub fn writes_rd(&self) -> bool {
        matches!(
            self.class,
            OpClass::ArithR | OpClass::ArithI | OpClass::Load | OpClass::Jal
        )
    }
}
