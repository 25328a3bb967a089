//! Writeback (WB) Stage.
//!
//! The final stage commits stores to memory and the destination register,
//! which also clears its hazard, and retires the instruction. A retiring
//! control transfer redirects the PC and lets fetch resume. A faulted slot
//! reaching this stage ends the run with its fault.

use tracing::{debug, trace};

use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::engine::{Pipeline, StageDump};

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `p` - Pipeline ports and control state.
/// * `cpu` - Architectural state; memory, the register file and PC are updated.
///
/// # Returns
///
/// The fault of a faulted slot, an access fault from a store, or a hazard
/// violation if the destination was never claimed.
pub fn wb_stage(p: &mut Pipeline, cpu: &mut Cpu) -> SimResult<()> {
    let Some(slot) = p.memory_to_writeback.read(p.cycle)? else {
        return Ok(());
    };
    let instr = slot?;

    cpu.store(&instr)?;

    if instr.is_jump() {
        p.pc_is_valid = true;
        cpu.pc = instr.new_pc();
        debug!(cycle = p.cycle, new_pc = cpu.pc, instr = %instr, "pc resolved");
    }
    cpu.wb(&instr)?;
    p.writeback_to_memory_stall.write(false, p.cycle)?;

    trace!(cycle = p.cycle, instr = %instr, "retire");
    p.stats.record_retire(&instr);
    p.dump.writeback = StageDump::Instr(instr.text().to_string());
    p.retired = Some(instr);
    Ok(())
}
