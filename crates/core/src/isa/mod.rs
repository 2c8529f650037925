//! Instruction-set definitions and decoding.
//!
//! This module owns everything about the instruction encoding:
//! 1. **Opcodes:** Numeric opcode and funct-field constants.
//! 2. **Instruction Model:** The [`Decoded`] form shared by both engines.
//! 3. **Decoder:** Field extraction, immediate sign extension, and validation.

pub mod decode;
pub mod instruction;
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Decoded, OpClass};
