//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts register fields, immediates and operand
//! roles for every format, and rejects words with no table entry.

use mipsim_core::common::SimError;
use mipsim_core::isa::decode::{decode, decode_at, encode_i, encode_j, encode_r};
use mipsim_core::isa::instruction::InstructionBits;
use mipsim_core::isa::table::ISA_TABLE;
use mipsim_core::isa::{Format, Register};
use proptest::prelude::*;

fn reg() -> impl Strategy<Value = Register> {
    (0u32..32).prop_map(Register::from_field)
}

proptest! {
    #[test]
    fn test_r_format_fields(rs in reg(), rt in reg(), rd in reg()) {
        let word = encode_r(rs, rt, rd, 0, 0x21); // addu
        let i = decode(word).unwrap();
        prop_assert_eq!(i.format(), Format::R);
        prop_assert_eq!((i.src1(), i.src2(), i.dst()), (rs, rt, rd));
        prop_assert_eq!(i.text(), format!("addu  {rd}, {rs}, {rt}"));
    }

    #[test]
    fn test_i_format_fields(rs in reg(), rt in reg(), imm in any::<u16>()) {
        let word = encode_i(0x9, rs, rt, imm); // addiu
        let i = decode(word).unwrap();
        prop_assert_eq!(i.imm(), u32::from(imm));
        prop_assert_eq!(i.simm(), imm as i16 as i32 as u32);
        prop_assert_eq!((i.src1(), i.dst()), (rs, rt));
        prop_assert_eq!(i.text(), format!("addiu  {rt}, {rs}, {imm:#x}"));
    }

    #[test]
    fn test_j_format_target(target in 0u32..(1 << 26)) {
        let i = decode(encode_j(0x2, target)).unwrap();
        prop_assert_eq!(i.format(), Format::J);
        prop_assert_eq!(i.target(), target);
        prop_assert!(i.is_jump());
    }

    #[test]
    fn test_field_accessors(word in any::<u32>()) {
        prop_assert_eq!(word.opcode(), word >> 26);
        prop_assert_eq!(word.rs().index() as u32, (word >> 21) & 0x1F);
        prop_assert_eq!(word.rt().index() as u32, (word >> 16) & 0x1F);
        prop_assert_eq!(word.rd().index() as u32, (word >> 11) & 0x1F);
        prop_assert_eq!(word.imm(), word & 0xFFFF);
        prop_assert_eq!(word.target(), word & 0x03FF_FFFF);
    }
}

#[test]
fn test_every_table_entry_decodes_to_itself() {
    for entry in ISA_TABLE {
        let word = match entry.format {
            Format::R => entry.funct,
            Format::I | Format::J => entry.opcode << 26,
        };
        let i = decode(word).unwrap();
        assert_eq!(i.mnemonic(), entry.mnemonic, "word {word:#010x}");
        assert_eq!(i.operation(), entry.op);
    }
}

#[test]
fn test_reference_word() {
    let i = decode(0x0022_1820).unwrap();
    assert_eq!(i.text(), "add  $v1, $at, $v0");
    assert_eq!(i.src1(), Register::AT);
    assert_eq!(i.src2(), Register::V0);
    assert_eq!(i.dst(), Register::V1);
}

#[test]
fn test_unknown_words_fail() {
    // funct 0x01 and opcode 0x3F are not in the table.
    assert!(matches!(
        decode(0x0000_0001),
        Err(SimError::Decode { word: 1, format: Format::R })
    ));
    assert!(matches!(
        decode(0xFC00_0000),
        Err(SimError::Decode { format: Format::I, .. })
    ));
}

#[test]
fn test_pc_and_default_next_pc() {
    let i = decode_at(encode_i(0x9, Register::ZERO, Register::T0, 1), 0x40_0010).unwrap();
    assert_eq!(i.pc(), 0x40_0010);
    assert_eq!(i.new_pc(), 0x40_0014);
}

#[test]
fn test_operand_roles() {
    let lw = decode(encode_i(0x23, Register::SP, Register::T0, 4)).unwrap();
    assert!(lw.is_load());
    assert_eq!((lw.src1(), lw.dst(), lw.mem_size()), (Register::SP, Register::T0, 4));

    let sb = decode(encode_i(0x28, Register::SP, Register::T0, 4)).unwrap();
    assert!(sb.is_store());
    assert_eq!((sb.src1(), sb.src2(), sb.dst()), (Register::SP, Register::T0, Register::ZERO));
    assert_eq!(sb.mem_size(), 1);

    let mult = decode(encode_r(Register::T0, Register::T1, Register::ZERO, 0, 0x18)).unwrap();
    assert_eq!(mult.dst(), Register::HI_LO);

    let mflo = decode(encode_r(Register::ZERO, Register::ZERO, Register::T2, 0, 0x12)).unwrap();
    assert_eq!((mflo.src1(), mflo.dst()), (Register::HI_LO, Register::T2));

    let jal = decode(encode_j(0x3, 0x100)).unwrap();
    assert_eq!(jal.dst(), Register::RA);
}
