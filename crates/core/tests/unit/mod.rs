//! Unit tests for the simulator components.

pub mod core;
