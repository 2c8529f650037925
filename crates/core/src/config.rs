//! Run configuration.
//!
//! All tunables live here with their defaults; a JSON file can override any
//! subset of them. The engines take plain values, so configuration is parsed
//! once at startup and never consulted on the hot path.

use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default values for every tunable.
pub mod defaults {
    /// Minimum size of the data-memory image in bytes.
    ///
    /// Shorter on-disk images are zero-padded up to this size; longer ones
    /// are kept in full.
    pub const DMEM_IMAGE_BYTES: usize = 1000;

    /// Cycle safety limit per engine.
    ///
    /// A program that has not halted after this many cycles is stopped and
    /// the run reported as limit-bound rather than looping forever.
    pub const SAFETY_CYCLE_LIMIT: u64 = 100_000;
}

/// General engine settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a per-instruction trace event stream.
    #[serde(default)]
    pub trace_instructions: bool,
    /// Cycle safety limit per engine.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::SAFETY_CYCLE_LIMIT,
        }
    }
}

/// Memory sizing settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Minimum data-memory image size in bytes.
    #[serde(default = "default_dmem_size")]
    pub dmem_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            dmem_size: defaults::DMEM_IMAGE_BYTES,
        }
    }
}

/// Complete run configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General engine settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory sizing settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] when the file cannot be read or
    /// does not parse.
    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path).map_err(|e| SimError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SimError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

fn default_max_cycles() -> u64 {
    defaults::SAFETY_CYCLE_LIMIT
}

fn default_dmem_size() -> usize {
    defaults::DMEM_IMAGE_BYTES
}
