//! Load/Store Unit (LSU).
//!
//! Performs the memory access of loads and stores, with sign or zero extension
//! of loaded bytes and halfwords. The pipeline loads in the Memory stage and
//! stores in Writeback, so a store only reaches memory once it retires.

use crate::common::error::SimResult;
use crate::isa::{Instruction, Operation as Op};
use crate::soc::AddressSpace;

/// Load/Store Unit for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs the instruction's memory access, if any.
    ///
    /// Loads place the extended value in `v_dst`; stores write the low
    /// `mem_size` bytes of the second source. Other instructions pass through.
    ///
    /// # Arguments
    ///
    /// * `instr` - Executed instruction with its effective address computed.
    /// * `mem` - The address space.
    ///
    /// # Returns
    ///
    /// An access fault if a load touches unallocated memory.
    pub fn access(instr: &mut Instruction, mem: &mut AddressSpace) -> SimResult<()> {
        Self::load(instr, mem)?;
        Self::store(instr, mem)
    }

    /// Reads memory for a load; no-op for anything else.
    pub fn load(instr: &mut Instruction, mem: &AddressSpace) -> SimResult<()> {
        if instr.is_load() {
            let raw = mem.read(instr.mem_addr(), instr.mem_size())?;
            instr.v_dst = Self::extend(instr.operation(), raw);
        }
        Ok(())
    }

    /// Writes memory for a store; no-op for anything else.
    pub fn store(instr: &Instruction, mem: &mut AddressSpace) -> SimResult<()> {
        if instr.is_store() {
            mem.write(instr.v_src2(), instr.mem_addr(), instr.mem_size())?;
        }
        Ok(())
    }

    /// Extends a raw loaded value to 32 bits.
    const fn extend(op: Op, raw: u64) -> u64 {
        let word = match op {
            Op::Lb => raw as u8 as i8 as i32 as u32,
            Op::Lh => raw as u16 as i16 as i32 as u32,
            Op::Lbu => raw as u8 as u32,
            Op::Lhu => raw as u16 as u32,
            _ => raw as u32,
        };
        word as u64
    }
}
