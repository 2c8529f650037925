//! Hazard detection and operand forwarding.
//!
//! Two forwarding networks exist:
//! 1. **EX network** ([`forward_operand`]): feeds ALU operands from the
//!    EX/MEM latch (highest priority) or the MEM/WB latch. A load sitting in
//!    EX/MEM is skipped; its data does not exist until MEM completes.
//! 2. **ID network** ([`resolve_decode_operand`]): feeds the early branch/JAL
//!    resolution in decode. It adds one tier above the EX network: the result
//!    the instruction in ID/EX is about to compute this tick.
//!
//! Load data is the one value no network can produce early. A load
//! immediately followed by any consumer costs one bubble
//! ([`need_stall_load_use`]); a branch, which resolves a stage earlier than
//! the EX network can see load data, costs a second bubble when its operand
//! is still a load in EX/MEM ([`need_stall_branch_load`]) so the value can
//! arrive through the MEM/WB tier.

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::pipeline::signals::OpBSrc;
use crate::isa::instruction::{Decoded, OpClass};

/// Detects the load-use hazard.
///
/// True when the instruction in ID/EX is a load whose destination is read
/// (as a live source) by the instruction currently being decoded. `x0` never
/// creates a dependence.
pub fn need_stall_load_use(id_ex: &IdExEntry, decoding: &Decoded) -> bool {
    if id_ex.nop || !id_ex.ctrl.mem_read || id_ex.rd == 0 {
        return false;
    }
    (decoding.reads_rs1() && decoding.rs1 == id_ex.rd)
        || (decoding.reads_rs2() && decoding.rs2 == id_ex.rd)
}

/// Detects a branch operand only a load in EX/MEM can supply.
///
/// Branches compare in ID, so the EX network's EX/MEM tier is useless for
/// them while that slot holds a load. One more bubble moves the load to
/// MEM/WB, where [`forward_operand`] can read its data. A younger ALU
/// writer of the same register in ID/EX shadows the load and needs no stall;
/// a younger load there is already covered by [`need_stall_load_use`].
pub fn need_stall_branch_load(
    id_ex: &IdExEntry,
    ex_mem: &ExMemEntry,
    decoding: &Decoded,
) -> bool {
    if decoding.class != OpClass::Branch {
        return false;
    }
    let blocked = |reg: usize| {
        reg != 0
            && !ex_mem.nop
            && ex_mem.ctrl.mem_read
            && ex_mem.rd == reg
            && !(!id_ex.nop
                && id_ex.ctrl.reg_write
                && !id_ex.ctrl.mem_read
                && id_ex.rd == reg)
    };
    blocked(decoding.rs1) || blocked(decoding.rs2)
}

/// Resolves an ALU operand through the EX forwarding network.
///
/// # Arguments
///
/// * `reg` - Source register index being read.
/// * `latched` - The value latched for that register at decode time.
/// * `ex_mem` - The EX/MEM snapshot (producer one instruction ahead).
/// * `mem_wb` - The MEM/WB snapshot (producer two instructions ahead).
///
/// # Returns
///
/// The youngest in-flight value for `reg`, or `latched` when no producer is
/// in flight.
pub fn forward_operand(reg: usize, latched: u32, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> u32 {
    if reg == 0 {
        return 0;
    }
    if !ex_mem.nop && ex_mem.ctrl.reg_write && !ex_mem.ctrl.mem_read && ex_mem.rd == reg {
        return ex_mem.alu;
    }
    if !mem_wb.nop && mem_wb.ctrl.reg_write && mem_wb.rd == reg {
        return mem_wb.wrt_data;
    }
    latched
}

/// Computes, ahead of time, the value the instruction in ID/EX will produce
/// this tick.
///
/// Returns `None` for bubbles, non-writing instructions, and loads (whose
/// value is not computable before MEM).
fn early_ex_result(id_ex: &IdExEntry, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> Option<u32> {
    if id_ex.nop || !id_ex.ctrl.reg_write || id_ex.ctrl.mem_read || id_ex.rd == 0 {
        return None;
    }
    if id_ex.ctrl.jump {
        return Some(id_ex.pc.wrapping_add(4));
    }
    let a = forward_operand(id_ex.rs1, id_ex.rv1, ex_mem, mem_wb);
    let b = match id_ex.ctrl.b_src {
        OpBSrc::Imm => id_ex.imm as u32,
        OpBSrc::Reg => forward_operand(id_ex.rs2, id_ex.rv2, ex_mem, mem_wb),
    };
    Some(id_ex.ctrl.alu.compute(a, b))
}

/// Resolves a branch/JAL comparison operand through the ID forwarding network.
///
/// Priority order: the in-flight EX computation, then the EX/MEM latch, then
/// the MEM/WB latch, then the register-file value read this tick.
pub fn resolve_decode_operand(
    reg: usize,
    rf_val: u32,
    id_ex: &IdExEntry,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
) -> u32 {
    if reg == 0 {
        return 0;
    }
    if !id_ex.nop && id_ex.ctrl.reg_write && !id_ex.ctrl.mem_read && id_ex.rd == reg {
        if let Some(val) = early_ex_result(id_ex, ex_mem, mem_wb) {
            return val;
        }
    }
    forward_operand(reg, rf_val, ex_mem, mem_wb)
}
