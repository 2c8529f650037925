//! Execute stage.

use crate::core::pipeline::FiveStageCore;
use crate::core::pipeline::hazards::forward_operand;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::OpBSrc;

/// Runs the execute stage for one tick.
///
/// Operands come through the EX forwarding network, so a dependent ALU
/// instruction one or two slots behind its producer never stalls. For JAL
/// the "ALU result" is the return address PC+4; for loads and stores it is
/// the effective address.
pub fn execute_stage(core: &mut FiveStageCore) {
    let entry = core.state.id_ex.clone();
    if entry.nop {
        core.next.ex_mem = ExMemEntry::default();
        return;
    }

    let op1 = forward_operand(entry.rs1, entry.rv1, &core.state.ex_mem, &core.state.mem_wb);
    let rs2_val = forward_operand(entry.rs2, entry.rv2, &core.state.ex_mem, &core.state.mem_wb);
    let op2 = match entry.ctrl.b_src {
        OpBSrc::Imm => entry.imm as u32,
        OpBSrc::Reg => rs2_val,
    };

    let alu = if entry.ctrl.jump {
        entry.pc.wrapping_add(4)
    } else if entry.ctrl.halt {
        0
    } else {
        entry.ctrl.alu.compute(op1, op2)
    };

    core.next.ex_mem = ExMemEntry {
        nop: false,
        pc: entry.pc,
        inst: entry.inst,
        alu,
        store_data: rs2_val,
        rs1: entry.rs1,
        rs2: entry.rs2,
        rd: entry.rd,
        ctrl: entry.ctrl,
    };
}
