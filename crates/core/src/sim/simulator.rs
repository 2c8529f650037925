//! Run orchestration.
//!
//! The [`Simulator`] owns one engine of each kind, built from the same
//! memory images, and steps them in lockstep until both stop. Artifact
//! writing is separate from running so a faulted run can still dump what it
//! produced.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::core::Engine;
use crate::core::pipeline::FiveStageCore;
use crate::core::single_cycle::SingleCycleCore;
use crate::common::error::SimError;
use crate::mem::{DataMemory, InstructionMemory};
use crate::sim::{loader, output};

/// Owns and drives both engines over one program.
#[derive(Debug)]
pub struct Simulator {
    /// The single-cycle reference engine.
    pub single_cycle: SingleCycleCore,
    /// The five-stage pipelined engine.
    pub five_stage: FiveStageCore,
    out_dir: PathBuf,
}

impl Simulator {
    /// Builds a simulator from an I/O directory.
    ///
    /// Each engine gets its own data memory initialized from the same image,
    /// so their final memory states can be compared independently.
    ///
    /// # Errors
    ///
    /// Propagates loader errors for a missing directory or malformed image.
    pub fn new(iodir: &Path, out_dir: PathBuf, config: &Config) -> Result<Self, SimError> {
        let (imem_bytes, dmem_bytes) = loader::load_io_dir(iodir)?;
        let max_cycles = config.general.max_cycles;
        let dmem_size = config.memory.dmem_size;

        let imem = InstructionMemory::new(imem_bytes);
        let dmem_ss = DataMemory::new(dmem_bytes.clone(), dmem_size);
        let dmem_fs = DataMemory::new(dmem_bytes, dmem_size);

        Ok(Self {
            single_cycle: SingleCycleCore::new(imem.clone(), dmem_ss, max_cycles),
            five_stage: FiveStageCore::new(imem, dmem_fs, max_cycles),
            out_dir,
        })
    }

    /// Runs both engines to completion.
    ///
    /// # Errors
    ///
    /// A decode or memory fault from either engine aborts the run. If both
    /// engines stop but at least one hit the cycle safety limit, returns
    /// [`SimError::SafetyLimitReached`]; callers treat that as a reportable
    /// outcome rather than a failure.
    pub fn run(&mut self) -> Result<(), SimError> {
        loop {
            if !self.single_cycle.halted() {
                self.single_cycle.step()?;
            }
            if !self.five_stage.halted() {
                self.five_stage.step()?;
            }
            if self.single_cycle.halted() && self.five_stage.halted() {
                break;
            }
        }

        info!(
            ss_cycles = self.single_cycle.stats().cycles,
            fs_cycles = self.five_stage.stats().cycles,
            "both engines stopped"
        );

        if self.single_cycle.hit_cycle_limit() || self.five_stage.hit_cycle_limit() {
            let limit = self
                .single_cycle
                .stats()
                .cycles
                .max(self.five_stage.stats().cycles);
            return Err(SimError::SafetyLimitReached { limit });
        }
        Ok(())
    }

    /// Writes every output artifact to the output directory.
    ///
    /// Artifacts: per-cycle register dumps and state dumps for each engine,
    /// final data-memory dumps, and the performance report.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] on the first artifact that fails to write.
    pub fn write_outputs(&self) -> Result<(), SimError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| SimError::Io {
            path: self.out_dir.clone(),
            source: e,
        })?;

        self.write_file("SS_RFResult.txt", self.single_cycle.rf_log())?;
        self.write_file("FS_RFResult.txt", self.five_stage.rf_log())?;
        self.write_file("StateResult_SS.txt", self.single_cycle.state_log())?;
        self.write_file("StateResult_FS.txt", self.five_stage.state_log())?;
        self.write_file(
            "SS_DMEMResult.txt",
            &output::dmem_lines(self.single_cycle.data_memory().bytes()),
        )?;
        self.write_file(
            "FS_DMEMResult.txt",
            &output::dmem_lines(self.five_stage.data_memory().bytes()),
        )?;
        self.write_file(
            "PerformanceMetrics.txt",
            &output::performance_report(self.single_cycle.stats(), self.five_stage.stats()),
        )?;
        Ok(())
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<(), SimError> {
        let path = self.out_dir.join(name);
        std::fs::write(&path, contents).map_err(|e| SimError::Io { path, source: e })
    }
}
