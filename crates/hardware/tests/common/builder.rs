//! Tiny MIPS assembler for test programs.
//!
//! Each helper returns the encoded word; operands follow assembler order.

use mipsim_core::isa::Register;
use mipsim_core::isa::decode::{encode_i, encode_j, encode_r};

pub fn add(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(rs, rt, rd, 0, 0x20)
}

pub fn addu(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(rs, rt, rd, 0, 0x21)
}

pub fn subu(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(rs, rt, rd, 0, 0x23)
}

pub fn slt(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(rs, rt, rd, 0, 0x2A)
}

pub fn sll(rd: Register, rt: Register, shamt: u32) -> u32 {
    encode_r(Register::ZERO, rt, rd, shamt, 0x00)
}

pub fn mult(rs: Register, rt: Register) -> u32 {
    encode_r(rs, rt, Register::ZERO, 0, 0x18)
}

pub fn divu(rs: Register, rt: Register) -> u32 {
    encode_r(rs, rt, Register::ZERO, 0, 0x1B)
}

pub fn mfhi(rd: Register) -> u32 {
    encode_r(Register::ZERO, Register::ZERO, rd, 0, 0x10)
}

pub fn mflo(rd: Register) -> u32 {
    encode_r(Register::ZERO, Register::ZERO, rd, 0, 0x12)
}

pub fn jr(rs: Register) -> u32 {
    encode_r(rs, Register::ZERO, Register::ZERO, 0, 0x08)
}

pub fn addi(rt: Register, rs: Register, imm: i16) -> u32 {
    encode_i(0x08, rs, rt, imm as u16)
}

pub fn addiu(rt: Register, rs: Register, imm: i16) -> u32 {
    encode_i(0x09, rs, rt, imm as u16)
}

pub fn ori(rt: Register, rs: Register, imm: u16) -> u32 {
    encode_i(0x0D, rs, rt, imm)
}

pub fn lui(rt: Register, imm: u16) -> u32 {
    encode_i(0x0F, Register::ZERO, rt, imm)
}

pub fn beq(rs: Register, rt: Register, offset: i16) -> u32 {
    encode_i(0x04, rs, rt, offset as u16)
}

pub fn bne(rs: Register, rt: Register, offset: i16) -> u32 {
    encode_i(0x05, rs, rt, offset as u16)
}

pub fn lw(rt: Register, offset: i16, base: Register) -> u32 {
    encode_i(0x23, base, rt, offset as u16)
}

pub fn lb(rt: Register, offset: i16, base: Register) -> u32 {
    encode_i(0x20, base, rt, offset as u16)
}

pub fn lbu(rt: Register, offset: i16, base: Register) -> u32 {
    encode_i(0x24, base, rt, offset as u16)
}

pub fn sw(rt: Register, offset: i16, base: Register) -> u32 {
    encode_i(0x2B, base, rt, offset as u16)
}

pub fn sb(rt: Register, offset: i16, base: Register) -> u32 {
    encode_i(0x28, base, rt, offset as u16)
}

/// `j` to an absolute address in the same 256 MiB region.
pub fn j(addr: u32) -> u32 {
    encode_j(0x02, addr >> 2)
}

/// `jal` to an absolute address in the same 256 MiB region.
pub fn jal(addr: u32) -> u32 {
    encode_j(0x03, addr >> 2)
}

/// `sll $zero, $zero, 0`.
pub fn nop() -> u32 {
    0
}
