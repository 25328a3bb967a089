//! Branch Resolution Unit (BRU).
//!
//! Resolves conditional branches and jumps in the Execute stage. There is no
//! prediction and no delay slot: the resolved next PC is the only PC that
//! will ever be fetched after the control transfer.

use crate::common::constants::JUMP_REGION_MASK;
use crate::isa::{Instruction, Operation as Op};

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Computes the next PC of a control transfer and its link value.
    ///
    /// Branch targets are `pc + 4 + (sext(imm) << 2)`; `j`/`jal` keep the top
    /// four bits of `pc + 4`. `jal` and `jalr` write `pc + 4` to their
    /// destination.
    pub fn resolve(instr: &mut Instruction) {
        let a = instr.v_src1() as u32;
        let b = instr.v_src2() as u32;
        let next = (instr.pc() as u32).wrapping_add(4);
        let branch_target = next.wrapping_add(instr.simm() << 2);
        let jump_target = (next & JUMP_REGION_MASK) | (instr.target() << 2);

        let new_pc = match instr.operation() {
            Op::Beq => Self::select(a == b, branch_target, next),
            Op::Bne => Self::select(a != b, branch_target, next),
            Op::Blez => Self::select((a as i32) <= 0, branch_target, next),
            Op::Bgtz => Self::select((a as i32) > 0, branch_target, next),
            Op::J => jump_target,
            Op::Jal => {
                instr.v_dst = u64::from(next);
                jump_target
            }
            Op::Jr => a,
            Op::Jalr => {
                instr.v_dst = u64::from(next);
                a
            }
            _ => next,
        };
        instr.new_pc = u64::from(new_pc);
    }

    #[inline]
    const fn select(taken: bool, target: u32, fallthrough: u32) -> u32 {
        if taken { target } else { fallthrough }
    }
}
