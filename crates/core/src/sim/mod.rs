//! Simulation setup and orchestration.
//!
//! 1. **Loader:** Parses the text memory images from the I/O directory.
//! 2. **Output:** Per-cycle trace recording and artifact rendering.
//! 3. **Simulator:** Drives both engines in lockstep and writes artifacts.

pub mod loader;
pub mod output;
pub mod simulator;

pub use simulator::Simulator;
