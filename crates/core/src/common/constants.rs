//! Machine widths and instruction-encoding field positions.
//!
//! Every instruction format shares the low-order layout: opcode in bits
//! [6:0], rd in [11:7], funct3 in [14:12], rs1 in [19:15], rs2 in [24:20],
//! funct7 in [31:25]. Immediates are scattered per format and are handled
//! by the decoder.

/// Number of architectural integer registers.
pub const NUM_REGISTERS: usize = 32;

/// Width of one instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Mask selecting the 7-bit opcode field.
pub const OPCODE_MASK: u32 = 0x7f;

/// Shift to the destination-register field.
pub const RD_SHIFT: u32 = 7;
/// Shift to the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Shift to the first source-register field.
pub const RS1_SHIFT: u32 = 15;
/// Shift to the second source-register field.
pub const RS2_SHIFT: u32 = 20;
/// Shift to the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Mask for a 5-bit register index after shifting.
pub const REG_MASK: u32 = 0x1f;
/// Mask for the 3-bit funct3 field after shifting.
pub const FUNCT3_MASK: u32 = 0x7;
/// Mask for the 7-bit funct7 field after shifting.
pub const FUNCT7_MASK: u32 = 0x7f;
