//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts the fetched word into an `Instruction` at the current PC.
//!    A word that does not decode, or a fetch fault, is passed on as a faulted
//!    slot that claims no registers.
//! 2. **Control Hazards:** A newly decoded control transfer invalidates the PC
//!    until writeback resolves it. There is no prediction and nothing is flushed.
//! 3. **Data Hazards:** If a source or the destination has a write in flight, the
//!    instruction is held and fetch is stalled.
//! 4. **Register Read:** Reads source values and claims the destination register.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::{Fault, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::engine::{InFlight, Pipeline, StageDump};
use crate::isa::Instruction;
use crate::isa::decode::decode_at;

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `p` - Pipeline ports and control state.
/// * `cpu` - Architectural state; registers are read and claimed, PC advanced.
///
/// # Returns
///
/// A port error. Decode faults travel down the pipeline instead.
pub fn decode_stage(p: &mut Pipeline, cpu: &mut Cpu) -> SimResult<()> {
    let stalled = p.execute_to_decode_stall.read(p.cycle)?.unwrap_or(false);
    if stalled {
        p.decode_to_fetch_stall.write(true, p.cycle)?;
        return Ok(());
    }

    let mut instr = match p.fetch_to_decode.read(p.cycle)? {
        Some(fetched) => {
            // A re-fetched word replaces whatever was held.
            p.held = None;
            let instr = match fetched.map(|word| decode_at(word, cpu.pc)) {
                Ok(Ok(instr)) => instr,
                Ok(Err(err)) => return pass_fault(p, cpu, Fault::try_from(err)?),
                Err(fault) => return pass_fault(p, cpu, fault),
            };
            if instr.is_jump() {
                debug!(cycle = p.cycle, pc = cpu.pc, instr = %instr, "pc invalidated");
                p.pc_is_valid = false;
            }
            instr
        }
        None => match p.held.take() {
            Some(instr) => instr,
            None => return Ok(()),
        },
    };

    if !operands_ready(cpu, &instr) {
        debug!(cycle = p.cycle, instr = %instr, "data hazard, holding");
        p.stats.stalls_data += 1;
        p.held = Some(instr);
        p.decode_to_fetch_stall.write(true, p.cycle)?;
        return Ok(());
    }

    cpu.read_src(&mut instr);
    cpu.regs.invalidate(instr.dst())?;
    if !instr.is_jump() {
        cpu.pc += INSTRUCTION_SIZE;
    }
    trace!(cycle = p.cycle, pc = instr.pc(), instr = %instr, "decode");
    p.dump.decode = StageDump::Instr(instr.text().to_string());
    p.decode_to_execute.write(Ok(instr), p.cycle)
}

/// Forwards a faulted slot in program order and steps past its word.
fn pass_fault(p: &mut Pipeline, cpu: &mut Cpu, fault: Fault) -> SimResult<()> {
    debug!(cycle = p.cycle, pc = cpu.pc, %fault, "decode fault deferred");
    cpu.pc += INSTRUCTION_SIZE;
    let slot: InFlight = Err(fault);
    p.dump.decode = StageDump::of(&slot);
    p.decode_to_execute.write(slot, p.cycle)
}

/// Sources must be valid to be read; the destination must be valid so that
/// two writes to the same register retire in program order.
fn operands_ready(cpu: &Cpu, instr: &Instruction) -> bool {
    cpu.regs.valid(instr.src1()) && cpu.regs.valid(instr.src2()) && cpu.regs.valid(instr.dst())
}
