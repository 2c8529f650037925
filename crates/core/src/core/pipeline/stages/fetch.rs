//! Instruction fetch stage.

use tracing::trace;

use crate::common::constants::{OPCODE_MASK, WORD_BYTES};
use crate::core::pipeline::FiveStageCore;
use crate::core::pipeline::latches::{IfIdEntry, IfStage};
use crate::isa::opcodes;

/// Runs the fetch stage for one tick.
///
/// Ordering matters: a decode-stage stall freezes both the PC and the IF/ID
/// latch, and a decode-stage redirect squashes the fetch that would have gone
/// down the wrong path. Only when neither applies does a normal fetch happen.
/// The halt marker is still latched into IF/ID (it drains through the
/// pipeline) but stops further issue, as does running off the end of
/// instruction memory.
pub fn fetch_stage(core: &mut FiveStageCore) {
    if core.stall {
        core.next.if_id = core.state.if_id.clone();
        core.next.if_stage = core.state.if_stage.clone();
        return;
    }

    if let Some(target) = core.redirect {
        trace!(target = format_args!("{target:#x}"), "fetch redirected");
        core.next.if_id = IfIdEntry::default();
        core.next.if_stage = IfStage {
            nop: false,
            pc: target,
        };
        return;
    }

    let pc = core.state.if_stage.pc;
    if core.state.if_stage.nop || !core.imem.contains_word(pc) {
        core.next.if_id = IfIdEntry::default();
        core.next.if_stage = IfStage { nop: true, pc };
        return;
    }

    let Ok(inst) = core.imem.read_word(pc) else {
        // contains_word above makes this unreachable; treat it as a drain.
        core.next.if_id = IfIdEntry::default();
        core.next.if_stage = IfStage { nop: true, pc };
        return;
    };

    trace!(
        pc = format_args!("{pc:#x}"),
        inst = format_args!("{inst:#010x}"),
        "IF"
    );

    core.next.if_id = IfIdEntry {
        nop: false,
        pc,
        inst,
    };

    if inst & OPCODE_MASK == opcodes::OP_HALT {
        core.next.if_stage = IfStage { nop: true, pc };
    } else {
        core.next.if_stage = IfStage {
            nop: false,
            pc: pc.wrapping_add(WORD_BYTES),
        };
    }
}
