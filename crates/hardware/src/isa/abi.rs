//! MIPS register numbering and ABI names.
//!
//! Defines the `Register` operand type used by the decoder, the register file
//! and the pipeline, together with the canonical o32 ABI names used when
//! rendering instructions.

use std::fmt;

use crate::common::constants::{GPR_COUNT, REG_FILE_SIZE};

/// ABI names for `$0`-`$31`.
const REG_NAMES: [&str; GPR_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$s8", "$ra",
];

/// Display name of the HI/LO pseudo-register.
const HI_LO_NAME: &str = "$hilo";

/// Register operand number.
///
/// Values `0..32` are the architectural GPRs; [`Register::HI_LO`] is the
/// pseudo-register holding the `{hi:lo}` pair written by multiply and divide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// `$zero`, hard-wired to 0.
    pub const ZERO: Self = Self(0);
    /// `$at`, assembler temporary.
    pub const AT: Self = Self(1);
    /// `$v0`, first return value.
    pub const V0: Self = Self(2);
    /// `$v1`, second return value.
    pub const V1: Self = Self(3);
    /// `$a0`, first argument.
    pub const A0: Self = Self(4);
    /// `$t0`, first temporary.
    pub const T0: Self = Self(8);
    /// `$t1`, second temporary.
    pub const T1: Self = Self(9);
    /// `$t2`, third temporary.
    pub const T2: Self = Self(10);
    /// `$s0`, first saved register.
    pub const S0: Self = Self(16);
    /// `$s1`, second saved register.
    pub const S1: Self = Self(17);
    /// `$t9`, last temporary; holds the callee address in PIC calls.
    pub const T9: Self = Self(25);
    /// `$sp`, stack pointer.
    pub const SP: Self = Self(29);
    /// `$ra`, return address written by `jal`.
    pub const RA: Self = Self(31);
    /// HI/LO multiply-divide result pair.
    pub const HI_LO: Self = Self(GPR_COUNT as u8);

    /// Builds a GPR operand from a 5-bit instruction field.
    #[inline(always)]
    pub const fn from_field(bits: u32) -> Self {
        Self((bits & 0x1F) as u8)
    }

    /// Builds a register from a register-file index, or `None` if out of range.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < REG_FILE_SIZE {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Register-file index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for the hard-wired `$zero`.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Canonical ABI name including the `$` sigil.
    pub fn name(self) -> &'static str {
        REG_NAMES.get(self.index()).copied().unwrap_or(HI_LO_NAME)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
