//! Execute (EX) Stage.
//!
//! Computes ALU results, resolves control transfers and generates effective
//! addresses for loads and stores.

use tracing::trace;

use crate::common::error::SimResult;
use crate::core::pipeline::engine::{Pipeline, StageDump};
use crate::core::units::alu::Alu;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `p` - Pipeline ports and control state.
pub fn execute_stage(p: &mut Pipeline) -> SimResult<()> {
    let stalled = p.memory_to_execute_stall.read(p.cycle)?.unwrap_or(false);
    if stalled {
        p.execute_to_decode_stall.write(true, p.cycle)?;
        return Ok(());
    }

    let Some(mut slot) = p.decode_to_execute.read(p.cycle)? else {
        return Ok(());
    };
    if let Ok(instr) = &mut slot {
        Alu::execute(instr);
        trace!(cycle = p.cycle, instr = %instr, v_dst = instr.v_dst(), new_pc = instr.new_pc(), "execute");
    }
    p.dump.execute = StageDump::of(&slot);
    p.execute_to_memory.write(slot, p.cycle)
}
