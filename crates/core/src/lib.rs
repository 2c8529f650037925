//! Cycle-accurate RV32 simulator library.
//!
//! This crate implements two engines over a reduced RV32 integer subset and
//! checks them against each other:
//! 1. **Single-cycle:** One instruction per tick; the architectural reference.
//! 2. **Five-stage pipeline:** IF/ID/EX/MEM/WB with forwarding, a one-bubble
//!    load-use stall, and early branch resolution in decode.
//! 3. **Memory:** Big-endian byte-addressable instruction and data memories
//!    loaded from one-byte-per-line text images.
//! 4. **Simulation:** Loader, configuration, lockstep orchestration, and the
//!    per-cycle trace artifacts both engines emit.

/// Common types (constants, errors, the register file).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// The two engines and the pipeline machinery.
pub mod core;
/// Instruction set (opcodes, decoded model, decoder).
pub mod isa;
/// Instruction and data memories.
pub mod mem;
/// Loader, output writers, and run orchestration.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load a JSON override.
pub use crate::config::Config;
/// Error type for every fallible simulator operation.
pub use crate::common::error::SimError;
/// Common capability surface of the two engines.
pub use crate::core::Engine;
/// Owns both engines and drives them in lockstep; construct with `Simulator::new`.
pub use crate::sim::Simulator;
