//! Instruction decode stage.
//!
//! Decode does the pipeline's steering work in addition to field extraction:
//! load-use stall insertion, early branch resolution (predict-not-taken with
//! a one-cycle flush on a taken branch), and JAL target redirection.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::FiveStageCore;
use crate::core::pipeline::hazards::{
    forward_operand, need_stall_branch_load, need_stall_load_use, resolve_decode_operand,
};
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::OpClass;
use crate::isa::opcodes;
use crate::isa::decode;

/// Runs the decode stage for one tick.
///
/// # Errors
///
/// Returns [`SimError::InvalidOpcode`] when the latched word does not decode;
/// the engine stops without committing the tick.
pub fn decode_stage(core: &mut FiveStageCore) -> Result<(), SimError> {
    core.next.id_ex = IdExEntry::default();

    let if_id = core.state.if_id.clone();
    if if_id.nop {
        return Ok(());
    }

    let d = decode(if_id.inst, if_id.pc)?;

    if need_stall_load_use(&core.state.id_ex, &d) {
        core.stall = true;
        core.stats.data_stalls += 1;
        trace!(pc = format_args!("{:#x}", if_id.pc), "load-use stall");
        return Ok(());
    }

    if need_stall_branch_load(&core.state.id_ex, &core.state.ex_mem, &d) {
        core.stall = true;
        core.stats.data_stalls += 1;
        trace!(pc = format_args!("{:#x}", if_id.pc), "branch waits on load");
        return Ok(());
    }

    let ctrl = ControlSignals::derive(&d);
    let rv1 = forward_operand(
        d.rs1,
        core.regs.read(d.rs1),
        &core.state.ex_mem,
        &core.state.mem_wb,
    );
    let rv2 = forward_operand(
        d.rs2,
        core.regs.read(d.rs2),
        &core.state.ex_mem,
        &core.state.mem_wb,
    );

    match d.class {
        OpClass::Branch => {
            let a = resolve_decode_operand(
                d.rs1,
                core.regs.read(d.rs1),
                &core.state.id_ex,
                &core.state.ex_mem,
                &core.state.mem_wb,
            );
            let b = resolve_decode_operand(
                d.rs2,
                core.regs.read(d.rs2),
                &core.state.id_ex,
                &core.state.ex_mem,
                &core.state.mem_wb,
            );
            let taken = if d.funct3 == opcodes::F3_BNE {
                a != b
            } else {
                a == b
            };
            if taken {
                let target = if_id.pc.wrapping_add(d.imm as u32);
                core.redirect = Some(target);
                core.stats.control_stalls += 1;
                trace!(
                    pc = format_args!("{:#x}", if_id.pc),
                    target = format_args!("{target:#x}"),
                    "branch taken"
                );
            }
        }
        OpClass::Jal => {
            let target = if_id.pc.wrapping_add(d.imm as u32);
            core.redirect = Some(target);
            core.stats.control_stalls += 1;
            trace!(
                pc = format_args!("{:#x}", if_id.pc),
                target = format_args!("{target:#x}"),
                "jal"
            );
        }
        _ => {}
    }

    // Only the I/S-format immediate travels to EX; branch and jump
    // displacements are consumed here.
    let imm = match d.class {
        OpClass::ArithI | OpClass::Load | OpClass::Store => d.imm,
        _ => 0,
    };

    core.next.id_ex = IdExEntry {
        nop: false,
        pc: if_id.pc,
        inst: if_id.inst,
        rs1: d.rs1,
        rs2: d.rs2,
        rd: d.rd,
        rv1,
        rv2,
        imm,
        ctrl,
    };

    Ok(())
}
