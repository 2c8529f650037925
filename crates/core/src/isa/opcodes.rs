//! Opcode and funct-field constants for the supported instruction subset.

/// Register-register arithmetic (ADD, SUB, XOR, OR, AND).
pub const OP_ARITH_R: u32 = 0x33;
/// Register-immediate arithmetic (ADDI, XORI, ORI, ANDI).
pub const OP_ARITH_I: u32 = 0x13;
/// Memory load (LW).
pub const OP_LOAD: u32 = 0x03;
/// Memory store (SW).
pub const OP_STORE: u32 = 0x23;
/// Conditional branch (BEQ, BNE).
pub const OP_BRANCH: u32 = 0x63;
/// Unconditional jump-and-link (JAL).
pub const OP_JAL: u32 = 0x6f;
/// Simulator halt marker.
pub const OP_HALT: u32 = 0x7f;

/// funct3 for ADD/SUB, ADDI, and BEQ.
pub const F3_ADD_SUB: u32 = 0x0;
/// funct3 for XOR and XORI.
pub const F3_XOR: u32 = 0x4;
/// funct3 for OR and ORI.
pub const F3_OR: u32 = 0x6;
/// funct3 for AND and ANDI.
pub const F3_AND: u32 = 0x7;
/// funct3 for LW and SW (word access).
pub const F3_WORD: u32 = 0x2;
/// funct3 for BEQ.
pub const F3_BEQ: u32 = 0x0;
/// funct3 for BNE.
pub const F3_BNE: u32 = 0x1;

/// funct7 selecting ADD (and the base encoding for XOR/OR/AND).
pub const F7_BASE: u32 = 0x00;
/// funct7 selecting SUB.
pub const F7_SUB: u32 = 0x20;
