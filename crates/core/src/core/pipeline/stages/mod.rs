//! The five pipeline stage implementations.
//!
//! Each stage is a free function over the core, reading the current tick
//! snapshot and writing its output latch into the next snapshot. The tick
//! loop evaluates them writeback-first so every stage sees pre-tick state.

pub mod decode;
pub mod execute;
pub mod fetch;
pub mod memory;
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::memory_stage;
pub use writeback::writeback_stage;
