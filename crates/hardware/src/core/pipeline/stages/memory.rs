//! Memory Access (MEM) Stage.
//!
//! Performs the load of the instruction leaving execute. Stores only carry
//! their address and data onward: they are committed in writeback, so memory
//! never sees a store that does not retire. A load that faults is passed on as
//! a faulted slot.

use tracing::{debug, trace};

use crate::common::error::{Fault, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::engine::{Pipeline, StageDump};

/// Executes the memory stage.
///
/// # Arguments
///
/// * `p` - Pipeline ports and control state.
/// * `cpu` - Architectural state; memory is only read.
pub fn mem_stage(p: &mut Pipeline, cpu: &Cpu) -> SimResult<()> {
    let stalled = p.writeback_to_memory_stall.read(p.cycle)?.unwrap_or(false);
    if stalled {
        p.memory_to_execute_stall.write(true, p.cycle)?;
        return Ok(());
    }

    let Some(slot) = p.execute_to_memory.read(p.cycle)? else {
        return Ok(());
    };
    let slot = match slot {
        Ok(mut instr) => match cpu.load(&mut instr) {
            Ok(()) => {
                if instr.is_load() || instr.is_store() {
                    trace!(cycle = p.cycle, addr = instr.mem_addr(), instr = %instr, "memory");
                }
                Ok(instr)
            }
            Err(err) => {
                let fault = Fault::try_from(err)?;
                debug!(cycle = p.cycle, addr = instr.mem_addr(), %fault, "load fault deferred");
                Err(fault)
            }
        },
        Err(fault) => Err(fault),
    };
    p.dump.memory = StageDump::of(&slot);
    p.memory_to_writeback.write(slot, p.cycle)
}
