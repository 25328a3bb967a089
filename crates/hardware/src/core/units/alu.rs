//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles:
//! 1. **Arithmetic:** Wrapping 32-bit add and subtract, register and immediate forms.
//! 2. **Multiply/Divide:** 64-bit results packed into the HI/LO pseudo-register.
//! 3. **Logic and Compare:** Bitwise operations and set-on-less-than.
//! 4. **Shifts:** Immediate and variable shifts.
//! 5. **Address Generation:** Effective addresses for loads and stores.
//!
//! Control transfers are resolved by [`Bru`](super::bru::Bru).

use crate::core::units::bru::Bru;
use crate::isa::{Instruction, Operation as Op};

/// Mask selecting the low (LO) half of the HI/LO pair.
const LO_MASK: u64 = 0xFFFF_FFFF;

/// Shift amounts use the low five bits of the register.
const SHIFT_MASK: u32 = 0x1F;

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an instruction whose source values have been read.
    ///
    /// Fills in the result (`v_dst`), the resolved next PC for control
    /// transfers, or the effective address for memory operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::decode::{decode, encode_r};
    /// use mipsim_core::isa::Register;
    ///
    /// let word = encode_r(Register::T0, Register::T1, Register::T2, 0, 0x21); // addu
    /// let mut instr = decode(word).unwrap();
    /// instr.set_v_src1(0xFFFF_FFFF);
    /// instr.set_v_src2(2);
    /// Alu::execute(&mut instr);
    /// assert_eq!(instr.v_dst(), 1);
    /// ```
    pub fn execute(instr: &mut Instruction) {
        let op = instr.operation();
        if op.is_jump() {
            Bru::resolve(instr);
        } else if op.is_load() || op.is_store() {
            let base = instr.v_src1() as u32;
            instr.mem_addr = u64::from(base.wrapping_add(instr.simm()));
        } else {
            instr.v_dst = Self::compute(op, instr);
        }
    }

    /// Computes the result of a non-memory, non-control operation.
    fn compute(op: Op, instr: &Instruction) -> u64 {
        let a = instr.v_src1() as u32;
        let b = instr.v_src2() as u32;
        let imm = instr.imm();
        let simm = instr.simm();
        let shamt = instr.shamt();

        let word = match op {
            Op::Add | Op::Addu => a.wrapping_add(b),
            Op::Sub | Op::Subu => a.wrapping_sub(b),
            Op::Addi | Op::Addiu => a.wrapping_add(simm),

            Op::Mult => return (i64::from(a as i32) * i64::from(b as i32)) as u64,
            Op::Multu => return u64::from(a) * u64::from(b),
            Op::Div => return Self::divide_signed(a, b),
            Op::Divu => return Self::divide_unsigned(a, b),

            Op::Mfhi => (instr.v_src1() >> 32) as u32,
            Op::Mflo => (instr.v_src1() & LO_MASK) as u32,
            Op::Mthi => return (u64::from(a) << 32) | (instr.v_src2() & LO_MASK),
            Op::Mtlo => return (instr.v_src2() & !LO_MASK) | u64::from(a),

            Op::Sll => a << shamt,
            Op::Srl => a >> shamt,
            Op::Sra => ((a as i32) >> shamt) as u32,
            Op::Sllv => a << (b & SHIFT_MASK),
            Op::Srlv => a >> (b & SHIFT_MASK),
            Op::Srav => ((a as i32) >> (b & SHIFT_MASK)) as u32,

            Op::Lui => imm << 16,

            Op::Slt => u32::from((a as i32) < (b as i32)),
            Op::Sltu => u32::from(a < b),
            Op::Slti => u32::from((a as i32) < (simm as i32)),
            Op::Sltiu => u32::from(a < simm),

            Op::And => a & b,
            Op::Or => a | b,
            Op::Xor => a ^ b,
            Op::Nor => !(a | b),
            Op::Andi => a & imm,
            Op::Ori => a | imm,
            Op::Xori => a ^ imm,

            // No architectural result.
            Op::Syscall | Op::Break | Op::Trap => 0,

            Op::Beq
            | Op::Bne
            | Op::Blez
            | Op::Bgtz
            | Op::J
            | Op::Jal
            | Op::Jr
            | Op::Jalr
            | Op::Lb
            | Op::Lh
            | Op::Lw
            | Op::Lbu
            | Op::Lhu
            | Op::Sb
            | Op::Sh
            | Op::Sw => 0,
        };
        u64::from(word)
    }

    /// Packs `{remainder:quotient}`; division by zero yields 0.
    fn divide_signed(a: u32, b: u32) -> u64 {
        if b == 0 {
            return 0;
        }
        let (a, b) = (a as i32, b as i32);
        let quot = a.wrapping_div(b) as u32;
        let rem = a.wrapping_rem(b) as u32;
        (u64::from(rem) << 32) | u64::from(quot)
    }

    /// Packs `{remainder:quotient}`; division by zero yields 0.
    fn divide_unsigned(a: u32, b: u32) -> u64 {
        if b == 0 {
            return 0;
        }
        (u64::from(a % b) << 32) | u64::from(a / b)
    }
}
