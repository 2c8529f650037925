//! Writeback stage.

use tracing::trace;

use crate::core::pipeline::FiveStageCore;

/// Runs the writeback stage for one tick.
///
/// Commits the register result (writes to `x0` are discarded by the register
/// file) and retires the instruction. The halt marker reaches this stage like
/// any other latched entry but does not count as a retired instruction.
pub fn writeback_stage(core: &mut FiveStageCore) {
    let entry = core.state.mem_wb.clone();
    if entry.nop {
        return;
    }

    if entry.ctrl.reg_write {
        core.regs.write(entry.rd, entry.wrt_data);
    }

    if entry.ctrl.halt {
        return;
    }

    core.stats.instructions_retired += 1;
    if entry.ctrl.mem_read {
        core.stats.loads += 1;
    } else if entry.ctrl.mem_write {
        core.stats.stores += 1;
    } else if entry.ctrl.branch {
        core.stats.branches += 1;
    } else if entry.ctrl.jump {
        core.stats.jumps += 1;
    } else {
        core.stats.alu_ops += 1;
    }

    trace!(
        inst = format_args!("{:#010x}", entry.inst),
        rd = entry.rd,
        data = format_args!("{:#010x}", entry.wrt_data),
        "WB"
    );
}
