//! Memory access stage.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::FiveStageCore;
use crate::core::pipeline::latches::MemWbEntry;

/// Runs the memory stage for one tick.
///
/// # Errors
///
/// Returns [`SimError::MemoryOutOfBounds`] for an access outside the data
/// memory; the engine stops without committing the tick.
pub fn memory_stage(core: &mut FiveStageCore) -> Result<(), SimError> {
    let entry = core.state.ex_mem.clone();
    if entry.nop {
        core.next.mem_wb = MemWbEntry::default();
        return Ok(());
    }

    let mut wrt_data = entry.alu;
    if entry.ctrl.mem_read {
        let loaded = core.dmem.read_word(entry.alu)?;
        trace!(
            addr = format_args!("{:#x}", entry.alu),
            data = format_args!("{loaded:#010x}"),
            "MEM load"
        );
        if entry.ctrl.mem_to_reg {
            wrt_data = loaded;
        }
    }
    if entry.ctrl.mem_write {
        core.dmem.write_word(entry.alu, entry.store_data)?;
        trace!(
            addr = format_args!("{:#x}", entry.alu),
            data = format_args!("{:#010x}", entry.store_data),
            "MEM store"
        );
    }

    core.next.mem_wb = MemWbEntry {
        nop: false,
        inst: entry.inst,
        wrt_data,
        rs1: entry.rs1,
        rs2: entry.rs2,
        rd: entry.rd,
        ctrl: entry.ctrl,
    };

    Ok(())
}
