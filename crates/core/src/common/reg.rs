//! Architectural register file.
//!
//! This module provides the `RegisterFile` struct backing both engines.
//! It provides:
//! 1. **Storage:** All 32 general-purpose registers as raw 32-bit words.
//! 2. **Zero Register:** `x0` reads as zero and silently discards writes.
//! 3. **Observability:** Access to the full contents for state dumps.

use crate::common::constants::NUM_REGISTERS;

/// The 32-entry integer register file.
///
/// Register `x0` is hardwired to zero: the backing slot is never written, so
/// dumps and reads agree without special-casing.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns the contents of all registers, `x0` first.
    pub fn values(&self) -> &[u32; NUM_REGISTERS] {
        &self.regs
    }
}
