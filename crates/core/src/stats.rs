//! Run statistics.
//!
//! Both engines accumulate a [`SimStats`] while running:
//! 1. **Progress:** Cycle and retired-instruction counts, CPI/IPC.
//! 2. **Instruction Mix:** Per-class retirement counters.
//! 3. **Hazards:** Data (load-use) and control (flush) stall counts; always
//!    zero for the single-cycle engine.

/// Counters accumulated over one engine's run.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Total clock cycles elapsed, including the halt tick.
    pub cycles: u64,
    /// Instructions retired; the halt marker is not counted.
    pub instructions_retired: u64,
    /// Retired register-arithmetic instructions.
    pub alu_ops: u64,
    /// Retired loads.
    pub loads: u64,
    /// Retired stores.
    pub stores: u64,
    /// Retired conditional branches.
    pub branches: u64,
    /// Retired jumps.
    pub jumps: u64,
    /// Bubbles inserted for load-use hazards.
    pub data_stalls: u64,
    /// Bubbles inserted for taken branches and jumps.
    pub control_stalls: u64,
}

impl SimStats {
    /// Cycles per retired instruction, or zero before anything retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle, or zero before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints a human-readable summary block to stdout.
    pub fn print(&self, label: &str) {
        println!("── {label} ──────────────────────────────");
        println!("  cycles:       {}", self.cycles);
        println!("  retired:      {}", self.instructions_retired);
        println!("  CPI:          {:.4}", self.cpi());
        println!("  IPC:          {:.4}", self.ipc());
        println!(
            "  mix:          alu {} / load {} / store {} / branch {} / jump {}",
            self.alu_ops, self.loads, self.stores, self.branches, self.jumps
        );
        println!(
            "  stalls:       data {} / control {}",
            self.data_stalls, self.control_stalls
        );
    }
}
