//! Functional Execution.
//!
//! This module implements the single-pass interpreter. Each step performs the
//! following, in order and to completion:
//! 1. **Fetch and Decode:** Read the word at PC and decode it.
//! 2. **Operands:** Read sources and claim the destination.
//! 3. **Execute and Memory:** Compute the result and perform any load or store.
//! 4. **Retire:** Commit the destination and move PC to the resolved next PC.

use tracing::trace;

use super::Cpu;
use crate::common::error::SimResult;
use crate::core::units::alu::Alu;
use crate::isa::Instruction;
use crate::isa::decode::decode_at;

impl Cpu {
    /// Executes one instruction to completion.
    ///
    /// # Returns
    ///
    /// The retired instruction, for printing and inspection.
    pub fn step(&mut self) -> SimResult<Instruction> {
        let word = self.fetch()?;
        let mut instr = decode_at(word, self.pc)?;
        trace!(pc = self.pc, word, instr = %instr, "step");

        self.read_src(&mut instr);
        self.regs.invalidate(instr.dst())?;
        Alu::execute(&mut instr);
        self.load_store(&mut instr)?;
        self.wb(&instr)?;

        self.pc = instr.new_pc();
        Ok(instr)
    }
}
