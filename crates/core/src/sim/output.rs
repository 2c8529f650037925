//! Per-cycle trace recording and output-artifact formatting.
//!
//! The renderings here byte-match the trace format of the grading tool this
//! simulator is checked against: Python-style `True`/`False` booleans, a
//! 70-dash rule between cycle blocks, binary field renderings, and shortest
//! round-trip float formatting (Rust's `{:?}` for `f64`) in the performance
//! report.

use std::fmt::Write as _;

use crate::common::reg::RegisterFile;
use crate::core::pipeline::latches::PipeState;
use crate::core::pipeline::signals::{AluOp, OpBSrc};
use crate::stats::SimStats;

const RULE: &str = "----------------------------------------------------------------------";

fn py_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

fn flag(b: bool) -> u8 {
    u8::from(b)
}

/// Appends one single-cycle register dump block.
///
/// The single-cycle format has no rule line and pads the header with two
/// spaces before the cycle number.
pub fn record_rf_single(log: &mut String, cycle: u64, regs: &RegisterFile) {
    let _ = writeln!(log, "State of RF after executing cycle:  {cycle}");
    for val in regs.values() {
        let _ = writeln!(log, "{val:032b}");
    }
}

/// Appends one pipelined register dump block.
pub fn record_rf_pipeline(log: &mut String, cycle: u64, regs: &RegisterFile) {
    let _ = writeln!(log, "{RULE}");
    let _ = writeln!(log, "State of RF after executing cycle:{cycle}");
    for val in regs.values() {
        let _ = writeln!(log, "{val:032b}");
    }
}

/// Appends one single-cycle state block: the PC and fetch-stop flag the tick
/// committed.
pub fn record_state_single(log: &mut String, cycle: u64, pc: u32, nop: bool) {
    let _ = writeln!(log, "{RULE}");
    let _ = writeln!(log, "State after executing cycle: {cycle}");
    let _ = writeln!(log, "IF.PC: {pc}");
    let _ = writeln!(log, "IF.nop: {}", py_bool(nop));
}

/// The 2-bit ALU-operation rendering of the legacy trace format: `01` for
/// SUB, `10` for immediate logic ops, `00` otherwise.
fn alu_op_code(alu: AluOp, b_src: OpBSrc) -> u8 {
    match (alu, b_src) {
        (AluOp::Sub, _) => 1,
        (AluOp::Xor | AluOp::Or | AluOp::And, OpBSrc::Imm) => 2,
        _ => 0,
    }
}

/// Appends one pipelined state block describing the latch contents the tick
/// committed.
pub fn record_state_pipeline(log: &mut String, cycle: u64, state: &PipeState) {
    let _ = writeln!(log, "{RULE}");
    let _ = writeln!(log, "State after executing cycle: {cycle}");
    let _ = writeln!(log, "IF.nop: {}", py_bool(state.if_stage.nop));
    let _ = writeln!(log, "IF.PC: {}", state.if_stage.pc);

    let _ = writeln!(log, "ID.nop: {}", py_bool(state.if_id.nop));
    if state.if_id.nop {
        let _ = writeln!(log, "ID.Instr: ");
    } else {
        let _ = writeln!(log, "ID.Instr: {:032b}", state.if_id.inst);
    }

    let ex = &state.id_ex;
    let _ = writeln!(log, "EX.nop: {}", py_bool(ex.nop));
    if ex.nop {
        let _ = writeln!(log, "EX.instr: ");
    } else {
        let _ = writeln!(log, "EX.instr: {:032b}", ex.inst);
    }
    let _ = writeln!(log, "EX.Read_data1: {:032b}", ex.rv1);
    let _ = writeln!(log, "EX.Read_data2: {:032b}", ex.rv2);
    if ex.nop {
        let _ = writeln!(log, "EX.Imm: {:032b}", ex.imm as u32);
    } else {
        let _ = writeln!(log, "EX.Imm: {:012b}", ex.imm as u32 & 0xfff);
    }
    let _ = writeln!(log, "EX.Rs: {:05b}", ex.rs1);
    let _ = writeln!(log, "EX.Rt: {:05b}", ex.rs2);
    let _ = writeln!(log, "EX.Wrt_reg_addr: {:05b}", ex.rd);
    let _ = writeln!(log, "EX.is_I_type: {}", flag(ex.ctrl.b_src == OpBSrc::Imm));
    let _ = writeln!(log, "EX.rd_mem: {}", flag(ex.ctrl.mem_read));
    let _ = writeln!(log, "EX.wrt_mem: {}", flag(ex.ctrl.mem_write));
    let _ = writeln!(log, "EX.alu_op: {:02b}", alu_op_code(ex.ctrl.alu, ex.ctrl.b_src));
    let _ = writeln!(log, "EX.wrt_enable: {}", flag(ex.ctrl.reg_write));

    let mem = &state.ex_mem;
    let _ = writeln!(log, "MEM.nop: {}", py_bool(mem.nop));
    let _ = writeln!(log, "MEM.ALUresult: {:032b}", mem.alu);
    let _ = writeln!(log, "MEM.Store_data: {:032b}", mem.store_data);
    let _ = writeln!(log, "MEM.Rs: {:05b}", mem.rs1);
    let _ = writeln!(log, "MEM.Rt: {:05b}", mem.rs2);
    let _ = writeln!(log, "MEM.Wrt_reg_addr: {:05b}", mem.rd);
    let _ = writeln!(log, "MEM.rd_mem: {}", flag(mem.ctrl.mem_read));
    let _ = writeln!(log, "MEM.wrt_mem: {}", flag(mem.ctrl.mem_write));
    let _ = writeln!(log, "MEM.wrt_enable: {}", flag(mem.ctrl.reg_write));

    let wb = &state.mem_wb;
    let _ = writeln!(log, "WB.nop: {}", py_bool(wb.nop));
    let _ = writeln!(log, "WB.Wrt_data: {:032b}", wb.wrt_data);
    let _ = writeln!(log, "WB.Rs: {:05b}", wb.rs1);
    let _ = writeln!(log, "WB.Rt: {:05b}", wb.rs2);
    let _ = writeln!(log, "WB.Wrt_reg_addr: {:05b}", wb.rd);
    let _ = writeln!(log, "WB.wrt_enable: {}", flag(wb.ctrl.reg_write));
}

/// Renders a memory image as one 8-digit binary line per byte.
pub fn dmem_lines(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 9);
    for byte in bytes {
        let _ = writeln!(out, "{byte:08b}");
    }
    out
}

/// Renders the two-engine performance report.
pub fn performance_report(ss: &SimStats, fs: &SimStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Performance of Single Stage:");
    let _ = writeln!(out, "#Cycles -> {}", ss.cycles);
    let _ = writeln!(out, "#Instructions -> {}", ss.instructions_retired);
    let _ = writeln!(out, "CPI -> {:?}", ss.cpi());
    let _ = writeln!(out, "IPC -> {:?}", ss.ipc());
    let _ = writeln!(out);
    let _ = writeln!(out, "Performance of Five Stage:");
    let _ = writeln!(out, "#Cycles -> {}", fs.cycles);
    let _ = writeln!(out, "#Instructions -> {}", fs.instructions_retired);
    let _ = writeln!(out, "CPI -> {:?}", fs.cpi());
    let _ = writeln!(out, "IPC -> {:?}", fs.ipc());
    out
}
