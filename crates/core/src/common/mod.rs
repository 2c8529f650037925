//! Shared definitions used across the simulator.
//!
//! This module collects the pieces every other module leans on:
//! 1. **Constants:** Instruction-encoding field positions and machine widths.
//! 2. **Errors:** The [`SimError`] type returned by fallible simulator operations.
//! 3. **Registers:** The 32-entry architectural register file.

pub mod constants;
pub mod error;
pub mod reg;

pub use error::{AccessType, SimError};
pub use reg::RegisterFile;
