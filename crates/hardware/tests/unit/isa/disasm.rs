use mipsim_core::isa::Register;
use mipsim_core::isa::decode::render;
use mipsim_core::isa::disasm::{UNKNOWN, disassemble};
use rstest::rstest;

use crate::common::builder::*;

#[rstest]
#[case::add(0x0022_1820, "add  $v1, $at, $v0")]
#[case::addiu(addiu(Register::T0, Register::ZERO, 1), "addiu  $t0, $zero, 0x1")]
#[case::addi_negative(addi(Register::SP, Register::SP, -8), "addi  $sp, $sp, 0xfff8")]
#[case::lw(lw(Register::T0, 0x10, Register::SP), "lw  $t0, 0x10($sp)")]
#[case::sb(sb(Register::T2, 8, Register::T0), "sb  $t2, 0x8($t0)")]
#[case::sll(sll(Register::T0, Register::T1, 4), "sll  $t0, $t1, 0x4")]
#[case::nop(nop(), "sll  $zero, $zero, 0x0")]
#[case::lui(lui(Register::T0, 0x1000), "lui  $t0, 0x1000")]
#[case::beq(beq(Register::T0, Register::T1, 3), "beq  $t0, $t1, 0x3")]
#[case::bne(bne(Register::T0, Register::ZERO, -1), "bne  $t0, $zero, 0xffff")]
#[case::j(j(0x40), "j  0x10")]
#[case::jal(jal(0x0040_0100), "jal  0x100040")]
#[case::jr(jr(Register::RA), "jr  $ra")]
#[case::mult(mult(Register::S0, Register::S1), "mult  $s0, $s1")]
#[case::mfhi(mfhi(Register::V0), "mfhi  $v0")]
#[case::syscall(0x0000_000C, "syscall")]
#[case::break_(0x0000_000D, "break")]
fn test_disassemble(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[test]
fn test_unknown() {
    assert_eq!(disassemble(0xFFFF_FFFF), UNKNOWN);
}

#[test]
fn test_render_templates() {
    assert_eq!(render("dst", 0x0022_1820), "$v1, $at, $v0");
    assert_eq!(render("", 0x0022_1820), "");
    assert_eq!(render("tC(s)", lw(Register::T9, -4, Register::RA)), "$t9, 0xfffc($ra)");
}
