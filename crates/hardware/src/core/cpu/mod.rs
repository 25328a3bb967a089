//! CPU Core Definition.
//!
//! This module defines the `Cpu` structure, the architectural state shared by
//! both execution modes. It coordinates the following:
//! 1. **State Management:** Registers (with hazard tracking) and the program counter.
//! 2. **Memory:** The sparse address space holding code and data.
//! 3. **Stage Helpers:** Fetch, operand read, memory access and writeback
//!    primitives used by the functional loop and the pipeline stages.

/// Single-pass functional execution.
pub mod execution;

use crate::common::RegisterFile;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::SimResult;
use crate::core::units::lsu::Lsu;
use crate::isa::Instruction;
use crate::soc::AddressSpace;

/// Architectural CPU state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General purpose registers and HI/LO.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u64,
    /// Code and data memory.
    pub mem: AddressSpace,
}

impl Cpu {
    /// Creates a CPU over a loaded address space, starting at its entry point.
    ///
    /// # Arguments
    ///
    /// * `mem` - Address space with the program already loaded.
    pub fn new(mem: AddressSpace) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: mem.entry_point(),
            mem,
        }
    }

    /// Reads the instruction word at the current PC.
    pub fn fetch(&self) -> SimResult<u32> {
        Ok(self.mem.read(self.pc, INSTRUCTION_SIZE as usize)? as u32)
    }

    /// Copies both source operand values into the instruction.
    pub fn read_src(&self, instr: &mut Instruction) {
        self.regs.read_src1(instr);
        self.regs.read_src2(instr);
    }

    /// Performs the instruction's load or store, if any.
    pub fn load_store(&mut self, instr: &mut Instruction) -> SimResult<()> {
        Lsu::access(instr, &mut self.mem)
    }

    /// Performs the instruction's load, if any.
    pub fn load(&self, instr: &mut Instruction) -> SimResult<()> {
        Lsu::load(instr, &self.mem)
    }

    /// Commits the instruction's store, if any.
    pub fn store(&mut self, instr: &Instruction) -> SimResult<()> {
        Lsu::store(instr, &mut self.mem)
    }

    /// Commits the instruction's result to its destination register.
    pub fn wb(&mut self, instr: &Instruction) -> SimResult<()> {
        self.regs.write_dst(instr)
    }
}
