//! MIPS General-Purpose Register Storage.
//!
//! This module implements the raw register storage behind the register file.
//! It performs the following:
//! 1. **Storage:** Maintains the 32 integer registers plus the HI/LO pair.
//! 2. **Validity:** Tracks, per register, whether a write is still in flight.
//! 3. **Invariant Enforcement:** Register `$zero` reads 0 and is always valid.

use crate::common::constants::REG_FILE_SIZE;
use crate::isa::Register;

/// One register slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reg {
    /// Stored value; GPRs keep 32-bit values zero-extended.
    pub value: u64,
    /// `false` while an instruction that will write this register is in flight.
    pub valid: bool,
}

impl Default for Reg {
    fn default() -> Self {
        Self {
            value: 0,
            valid: true,
        }
    }
}

/// General-purpose register storage.
///
/// Slot 0 is hard-wired: it always reads as zero and never becomes invalid.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [Reg; REG_FILE_SIZE],
}

impl Gpr {
    /// Creates storage with every register zero and valid.
    pub fn new() -> Self {
        Self {
            regs: [Reg::default(); REG_FILE_SIZE],
        }
    }

    /// Reads a register value. `$zero` always returns 0.
    #[inline]
    pub fn read(&self, reg: Register) -> u64 {
        if reg.is_zero() {
            0
        } else {
            self.regs[reg.index()].value
        }
    }

    /// Returns the validity flag of a register.
    #[inline]
    pub fn is_valid(&self, reg: Register) -> bool {
        reg.is_zero() || self.regs[reg.index()].valid
    }

    /// Stores a value and validity flag. Ignored for `$zero`.
    #[inline]
    pub fn set(&mut self, reg: Register, value: u64, valid: bool) {
        if !reg.is_zero() {
            self.regs[reg.index()] = Reg { value, valid };
        }
    }

    /// Clears the validity flag. Ignored for `$zero`.
    #[inline]
    pub fn set_invalid(&mut self, reg: Register) {
        if !reg.is_zero() {
            self.regs[reg.index()].valid = false;
        }
    }

    /// Zeroes every register and marks all of them valid.
    pub fn reset(&mut self) {
        self.regs = [Reg::default(); REG_FILE_SIZE];
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
