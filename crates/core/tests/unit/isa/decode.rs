//! Field extraction, sign extension, and opcode/funct validation.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{add, addi, beq, bne, halt, jal, lw, sub, sw};
use rv32sim_core::SimError;
use rv32sim_core::isa::{OpClass, decode};

// ══════════════════════════════════════════════════════════
// 1. Field extraction per format
// ══════════════════════════════════════════════════════════

#[test]
fn decodes_r_type_fields() {
    let d = decode(add(3, 1, 2), 0).unwrap();
    assert_eq!(d.class, OpClass::ArithR);
    assert_eq!((d.rd, d.rs1, d.rs2), (3, 1, 2));
    assert_eq!(d.imm, 0);

    let d = decode(sub(7, 6, 5), 0).unwrap();
    assert_eq!(d.class, OpClass::ArithR);
    assert_eq!(d.funct7, 0x20);
}

#[test]
fn decodes_i_type_immediate() {
    let d = decode(addi(1, 2, 2047), 0).unwrap();
    assert_eq!(d.class, OpClass::ArithI);
    assert_eq!(d.imm, 2047);

    let d = decode(addi(1, 2, -2048), 0).unwrap();
    assert_eq!(d.imm, -2048);
}

#[test]
fn decodes_load_and_store_offsets() {
    let d = decode(lw(4, 2, -4), 0).unwrap();
    assert_eq!(d.class, OpClass::Load);
    assert_eq!(d.imm, -4);

    let d = decode(sw(4, 2, -32), 0).unwrap();
    assert_eq!(d.class, OpClass::Store);
    assert_eq!((d.rs1, d.rs2), (2, 4));
    assert_eq!(d.imm, -32);
}

#[test]
fn decodes_branch_displacements() {
    let d = decode(beq(1, 2, 16), 0).unwrap();
    assert_eq!(d.class, OpClass::Branch);
    assert_eq!(d.imm, 16);

    let d = decode(bne(1, 2, -8), 0).unwrap();
    assert_eq!(d.funct3, 0x1);
    assert_eq!(d.imm, -8);
}

#[test]
fn decodes_jal_displacement() {
    let d = decode(jal(1, 2048), 0).unwrap();
    assert_eq!(d.class, OpClass::Jal);
    assert_eq!((d.rd, d.imm), (1, 2048));

    let d = decode(jal(0, -16), 0).unwrap();
    assert_eq!(d.imm, -16);
}

#[test]
fn decodes_halt_marker() {
    let d = decode(halt(), 0).unwrap();
    assert_eq!(d.class, OpClass::Halt);
}

// ══════════════════════════════════════════════════════════
// 2. Source/destination liveness
// ══════════════════════════════════════════════════════════

#[test]
fn i_type_does_not_read_rs2() {
    // The immediate bits alias the rs2 field; they must not count as a read.
    let d = decode(addi(6, 1, 5), 0).unwrap();
    assert_eq!(d.rs2, 5);
    assert!(!d.reads_rs2());
}

#[test]
fn jal_reads_no_registers_and_writes_rd() {
    let d = decode(jal(5, 8), 0).unwrap();
    assert!(!d.reads_rs1());
    assert!(!d.reads_rs2());
    assert!(d.writes_rd());
}

#[test]
fn branch_and_store_write_nothing() {
    assert!(!decode(beq(1, 2, 8), 0).unwrap().writes_rd());
    assert!(!decode(sw(1, 2, 0), 0).unwrap().writes_rd());
}

// ══════════════════════════════════════════════════════════
// 3. Rejection of unsupported encodings
// ══════════════════════════════════════════════════════════

#[test]
fn rejects_unknown_opcode() {
    let err = decode(0x0000_005b, 0x40).unwrap_err();
    match err {
        SimError::InvalidOpcode { inst, pc } => {
            assert_eq!(inst, 0x0000_005b);
            assert_eq!(pc, 0x40);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case::slli_shaped_funct3(0x0000_1093)] // opcode 0x13, funct3 0x1
#[case::byte_load(0x0000_0083)] // opcode 0x03, funct3 0x0
#[case::blt_funct3(0x0000_4063)] // opcode 0x63, funct3 0x4
#[case::m_extension_funct7(0x0200_00b3)] // funct7 0x01, funct3 0, opcode 0x33
#[case::sub_funct7_on_xor(0x4020_c0b3)] // funct7 0x20, funct3 0x4, opcode 0x33
fn rejects_unsupported_funct_combinations(#[case] inst: u32) {
    assert!(
        decode(inst, 0)
            .unwrap_err()
            .to_string()
            .contains("illegal instruction")
    );
}
