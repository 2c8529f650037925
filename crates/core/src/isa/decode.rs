//! Instruction decoder.
//!
//! Splits a raw 32-bit word into its fields, extracts and sign-extends the
//! format-specific immediate, and validates the opcode/funct combination.
//! Both engines decode through [`decode`]; the pipelined engine calls it in
//! its ID stage, the single-cycle engine at the top of each tick.

use crate::common::constants::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, OPCODE_MASK, RD_SHIFT, REG_MASK,
    RS1_SHIFT, RS2_SHIFT,
};
use crate::common::error::SimError;
use crate::isa::instruction::{Decoded, OpClass};
use crate::isa::opcodes;

/// Sign-extends the low `bits` bits of `value`.
fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Extracts the I-format immediate (bits [31:20]), sign-extended.
pub fn decode_i_type_imm(inst: u32) -> i32 {
    sign_extend(inst >> 20, 12)
}

/// Extracts the S-format immediate (bits [31:25] ++ [11:7]), sign-extended.
pub fn decode_s_type_imm(inst: u32) -> i32 {
    let imm = ((inst >> 25) << 5) | ((inst >> 7) & 0x1f);
    sign_extend(imm, 12)
}

/// Extracts the B-format immediate, sign-extended.
///
/// Bit layout: imm[12] = inst[31], imm[11] = inst[7], imm[10:5] = inst[30:25],
/// imm[4:1] = inst[11:8], imm[0] = 0.
pub fn decode_b_type_imm(inst: u32) -> i32 {
    let imm = ((inst >> 31) << 12)
        | (((inst >> 7) & 0x1) << 11)
        | (((inst >> 25) & 0x3f) << 5)
        | (((inst >> 8) & 0xf) << 1);
    sign_extend(imm, 13)
}

/// Extracts the J-format immediate, sign-extended.
///
/// Bit layout: imm[20] = inst[31], imm[19:12] = inst[19:12],
/// imm[11] = inst[20], imm[10:1] = inst[30:21], imm[0] = 0.
pub fn decode_j_type_imm(inst: u32) -> i32 {
    let imm = ((inst >> 31) << 20)
        | (((inst >> 12) & 0xff) << 12)
        | (((inst >> 20) & 0x1) << 11)
        | (((inst >> 21) & 0x3ff) << 1);
    sign_extend(imm, 21)
}

/// Decodes one instruction word.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction word.
/// * `pc` - Program counter of the word, carried into the error on failure.
///
/// # Errors
///
/// Returns [`SimError::InvalidOpcode`] when the opcode or its funct fields do
/// not name a supported instruction.
pub fn decode(inst: u32, pc: u32) -> Result<Decoded, SimError> {
    let opcode = inst & OPCODE_MASK;
    let rd = ((inst >> RD_SHIFT) & REG_MASK) as usize;
    let rs1 = ((inst >> RS1_SHIFT) & REG_MASK) as usize;
    let rs2 = ((inst >> RS2_SHIFT) & REG_MASK) as usize;
    let funct3 = (inst >> FUNCT3_SHIFT) & FUNCT3_MASK;
    let funct7 = (inst >> FUNCT7_SHIFT) & FUNCT7_MASK;

    let invalid = || SimError::InvalidOpcode { inst, pc };

    let (class, imm) = match opcode {
        opcodes::OP_ARITH_R => {
            let funct7_ok = match funct3 {
                opcodes::F3_ADD_SUB => {
                    funct7 == opcodes::F7_BASE || funct7 == opcodes::F7_SUB
                }
                opcodes::F3_XOR | opcodes::F3_OR | opcodes::F3_AND => {
                    funct7 == opcodes::F7_BASE
                }
                _ => false,
            };
            if !funct7_ok {
                return Err(invalid());
            }
            (OpClass::ArithR, 0)
        }
        opcodes::OP_ARITH_I => match funct3 {
            opcodes::F3_ADD_SUB | opcodes::F3_XOR | opcodes::F3_OR | opcodes::F3_AND => {
                (OpClass::ArithI, decode_i_type_imm(inst))
            }
            _ => return Err(invalid()),
        },
        opcodes::OP_LOAD if funct3 == opcodes::F3_WORD => {
            (OpClass::Load, decode_i_type_imm(inst))
        }
        opcodes::OP_STORE if funct3 == opcodes::F3_WORD => {
            (OpClass::Store, decode_s_type_imm(inst))
        }
        opcodes::OP_BRANCH => match funct3 {
            opcodes::F3_BEQ | opcodes::F3_BNE => (OpClass::Branch, decode_b_type_imm(inst)),
            _ => return Err(invalid()),
        },
        opcodes::OP_JAL => (OpClass::Jal, decode_j_type_imm(inst)),
        opcodes::OP_HALT => (OpClass::Halt, 0),
        _ => return Err(invalid()),
    };

    Ok(Decoded {
        raw: inst,
        class,
        rd,
        rs1,
        rs2,
        funct3,
        funct7,
        imm,
    })
}
