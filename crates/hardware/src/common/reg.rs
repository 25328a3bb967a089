//! Register File with Hazard Tracking.
//!
//! This module provides the `RegisterFile` struct used by both execution modes.
//! It provides:
//! 1. **Storage:** The 32 MIPS GPRs plus the HI/LO pseudo-register.
//! 2. **Hazard Tracking:** A claim/commit protocol (`invalidate` then `write`)
//!    marking registers with an in-flight write so decode can stall on them.
//! 3. **Instruction Plumbing:** Source operand reads and destination commits
//!    straight from a decoded `Instruction`.
//! 4. **Observability:** A textual dump of the register state.

use std::fmt::Write as _;

use crate::common::constants::GPR_COUNT;
use crate::common::error::{HazardViolation, SimResult};
use crate::core::arch::gpr::Gpr;
use crate::isa::Register;
use crate::isa::instruction::Instruction;

/// GPR values are 32 bits wide.
const GPR_VALUE_MASK: u64 = 0xFFFF_FFFF;

/// Register file shared by the decode and writeback stages.
///
/// Register `$zero` is hard-wired to 0 and is always valid; invalidating or
/// writing it is a no-op.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a register file with every register zero and valid.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to read. `$zero` always returns 0.
    pub fn read(&self, reg: Register) -> u64 {
        self.gpr.read(reg)
    }

    /// Returns `true` if no in-flight instruction will write `reg`.
    pub fn valid(&self, reg: Register) -> bool {
        self.gpr.is_valid(reg)
    }

    /// Claims `reg` for an in-flight instruction.
    ///
    /// # Arguments
    ///
    /// * `reg` - Destination register of the instruction entering execution.
    ///
    /// # Returns
    ///
    /// `HazardViolation::AlreadyInvalid` if another write to `reg` is still in flight.
    pub fn invalidate(&mut self, reg: Register) -> SimResult<()> {
        if reg.is_zero() {
            return Ok(());
        }
        if !self.gpr.is_valid(reg) {
            return Err(HazardViolation::AlreadyInvalid(reg).into());
        }
        self.gpr.set_invalid(reg);
        Ok(())
    }

    /// Commits a value to a previously claimed register and marks it valid.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to write. Writes to `$zero` are ignored.
    /// * `value` - New value; GPR values are truncated to 32 bits.
    ///
    /// # Returns
    ///
    /// `HazardViolation::NotInvalid` if `reg` was never claimed.
    pub fn write(&mut self, reg: Register, value: u64) -> SimResult<()> {
        if reg.is_zero() {
            return Ok(());
        }
        if self.gpr.is_valid(reg) {
            return Err(HazardViolation::NotInvalid(reg).into());
        }
        let value = if reg.index() < GPR_COUNT {
            value & GPR_VALUE_MASK
        } else {
            value
        };
        self.gpr.set(reg, value, true);
        Ok(())
    }

    /// Copies the first source operand value into the instruction.
    pub fn read_src1(&self, instr: &mut Instruction) {
        instr.set_v_src1(self.read(instr.src1()));
    }

    /// Copies the second source operand value into the instruction.
    pub fn read_src2(&self, instr: &mut Instruction) {
        instr.set_v_src2(self.read(instr.src2()));
    }

    /// Commits the instruction's result to its destination register.
    pub fn write_dst(&mut self, instr: &Instruction) -> SimResult<()> {
        self.write(instr.dst(), instr.v_dst())
    }

    /// Zeroes every register and marks all of them valid.
    pub fn reset(&mut self) {
        self.gpr.reset();
    }

    /// Renders the register state, two GPRs per line followed by HI/LO.
    ///
    /// Registers with a write in flight are marked with `*`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mark = |r: Register| if self.valid(r) { ' ' } else { '*' };
        for i in (0..GPR_COUNT).step_by(2) {
            let a = Register::from_field(i as u32);
            let b = Register::from_field(i as u32 + 1);
            let _ = writeln!(
                out,
                "{:>5}={:#010x}{} {:>5}={:#010x}{}",
                a.name(),
                self.read(a),
                mark(a),
                b.name(),
                self.read(b),
                mark(b)
            );
        }
        let hl = self.read(Register::HI_LO);
        let _ = writeln!(
            out,
            "   hi={:#010x}     lo={:#010x}{}",
            hl >> 32,
            hl & GPR_VALUE_MASK,
            mark(Register::HI_LO)
        );
        out
    }
}
