//! Simulator error definitions.
//!
//! This module defines the error surface for the simulator. It provides:
//! 1. **Fault Representation:** Decode and memory faults that abort a run.
//! 2. **Setup Errors:** I/O-directory and memory-image problems found while loading.
//! 3. **Run Outcomes:** The safety-limit condition for programs that never drain.

use std::path::PathBuf;

use thiserror::Error;

/// The kind of memory access that faulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch from instruction memory.
    Fetch,
    /// Data load from data memory.
    Read,
    /// Data store to data memory.
    Write,
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Errors raised while setting up or running a simulation.
///
/// Decode and data-memory faults are fatal: the engine that raised one stops
/// without committing the tick that caused it. [`SimError::SafetyLimitReached`]
/// is a run outcome rather than a fault; callers report it and still treat the
/// run as completed.
#[derive(Debug, Error)]
pub enum SimError {
    /// The instruction word does not decode to a supported opcode/funct combination.
    #[error("illegal instruction {inst:#010x} at pc={pc:#x}")]
    InvalidOpcode {
        /// The raw 32-bit instruction word.
        inst: u32,
        /// Program counter of the offending instruction.
        pc: u32,
    },

    /// A data-memory access fell outside the memory image.
    #[error("{access} of 4 bytes at address {addr:#x} is outside the {len}-byte data memory")]
    MemoryOutOfBounds {
        /// The kind of access that faulted.
        access: AccessType,
        /// The faulting byte address.
        addr: u32,
        /// Size of the data memory in bytes.
        len: usize,
    },

    /// The I/O directory passed on the command line does not exist.
    #[error("I/O directory not found: {0}")]
    IoDirectoryMissing(PathBuf),

    /// A memory-image file contains a line that is not 8 binary digits.
    #[error("malformed memory file {path}: line {line}: {reason}")]
    MalformedMemoryFile {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The run configuration file could not be parsed.
    #[error("invalid config {path}: {reason}")]
    InvalidConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// Parse failure description.
        reason: String,
    },

    /// An engine reached the cycle safety limit before its pipeline drained.
    #[error("safety limit of {limit} cycles reached before the program halted")]
    SafetyLimitReached {
        /// The configured cycle limit.
        limit: u64,
    },

    /// An output artifact could not be written.
    #[error("failed to write {path}")]
    Io {
        /// Path of the artifact being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
