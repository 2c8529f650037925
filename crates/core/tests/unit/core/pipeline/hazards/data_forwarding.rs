//! Forwarding-network tests.
//!
//! Unit-level checks of `forward_operand` tier priority plus end-to-end
//! programs whose results are only correct if forwarding works.

use pretty_assertions::assert_eq;

use crate::common::harness::{add, addi, dmem_with_words, dmem_zeroed, halt, lw, run_five_stage, sub};
use rv32sim_core::core::Engine;
use rv32sim_core::core::pipeline::hazards::forward_operand;
use rv32sim_core::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use rv32sim_core::core::pipeline::signals::ControlSignals;

fn ex_mem_writer(rd: usize, alu: u32) -> ExMemEntry {
    ExMemEntry {
        nop: false,
        rd,
        alu,
        ctrl: ControlSignals {
            reg_write: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn ex_mem_load(rd: usize) -> ExMemEntry {
    ExMemEntry {
        nop: false,
        rd,
        ctrl: ControlSignals {
            reg_write: true,
            mem_read: true,
            mem_to_reg: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn mem_wb_writer(rd: usize, wrt_data: u32) -> MemWbEntry {
    MemWbEntry {
        nop: false,
        rd,
        wrt_data,
        ctrl: ControlSignals {
            reg_write: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

// ══════════════════════════════════════════════════════════
// 1. Tier priority
// ══════════════════════════════════════════════════════════

#[test]
fn ex_mem_beats_mem_wb() {
    // Both in-flight producers target x5; the younger (EX/MEM) value wins.
    let got = forward_operand(5, 0, &ex_mem_writer(5, 111), &mem_wb_writer(5, 222));
    assert_eq!(got, 111);
}

#[test]
fn mem_wb_beats_the_latched_value() {
    let got = forward_operand(5, 999, &ExMemEntry::default(), &mem_wb_writer(5, 222));
    assert_eq!(got, 222);
}

#[test]
fn latched_value_used_when_nothing_matches() {
    let got = forward_operand(5, 999, &ex_mem_writer(4, 111), &mem_wb_writer(3, 222));
    assert_eq!(got, 999);
}

#[test]
fn load_in_ex_mem_is_not_forwarded() {
    // The load's data does not exist yet; fall through to MEM/WB.
    let got = forward_operand(5, 0, &ex_mem_load(5), &mem_wb_writer(5, 222));
    assert_eq!(got, 222);
}

#[test]
fn x0_is_never_forwarded() {
    let got = forward_operand(0, 0, &ex_mem_writer(0, 111), &mem_wb_writer(0, 222));
    assert_eq!(got, 0);
}

#[test]
fn bubbles_are_transparent() {
    let got = forward_operand(5, 7, &ExMemEntry::default(), &MemWbEntry::default());
    assert_eq!(got, 7);
}

// ══════════════════════════════════════════════════════════
// 2. End-to-end forwarding programs
// ══════════════════════════════════════════════════════════

#[test]
fn back_to_back_alu_chain_never_stalls() {
    // Each add consumes the previous result one cycle later.
    let program = [
        addi(1, 0, 1),
        add(2, 1, 1),
        add(3, 2, 2),
        add(4, 3, 3),
        halt(),
    ];
    let core = run_five_stage(&program, dmem_zeroed());

    assert_eq!(core.registers().read(4), 8);
    assert_eq!(core.stats().data_stalls, 0);
    // 5 latched instructions + 4 fill/drain, no bubbles.
    assert_eq!(core.stats().cycles, 9);
}

#[test]
fn two_apart_dependence_uses_mem_wb_tier() {
    let program = [
        addi(1, 0, 40),
        addi(9, 0, 1),
        sub(2, 1, 9), // x1 producer is in MEM/WB here
        halt(),
    ];
    let core = run_five_stage(&program, dmem_zeroed());
    assert_eq!(core.registers().read(2), 39);
    assert_eq!(core.stats().data_stalls, 0);
}

#[test]
fn load_data_forwards_from_mem_wb_after_one_gap() {
    // An independent instruction separates the load from its consumer, so
    // no stall is needed and the data arrives through the MEM/WB tier.
    let program = [
        lw(1, 0, 0),
        addi(9, 0, 7),
        add(2, 1, 1),
        halt(),
    ];
    let core = run_five_stage(&program, dmem_with_words(&[(0, 15)]));
    assert_eq!(core.registers().read(2), 30);
    assert_eq!(core.stats().data_stalls, 0);
}

#[test]
fn writes_to_x0_produce_no_bogus_forwarding() {
    // addi x0 discards its result; the following read of x0 must see zero.
    let program = [addi(0, 0, 5), add(1, 0, 0), halt()];
    let core = run_five_stage(&program, dmem_zeroed());
    assert_eq!(core.registers().read(0), 0);
    assert_eq!(core.registers().read(1), 0);
}
