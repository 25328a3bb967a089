//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads
//! the word at the current Program Counter and forwards it to decode. Fetch
//! never advances the PC; decode does that once an instruction is accepted.
//! An access fault is not raised here: it is passed on in place of the word
//! and only stops the run if it reaches writeback.

use tracing::{debug, trace};

use crate::common::error::{Fault, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::engine::{Pipeline, StageDump};

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `p` - Pipeline ports and control state.
/// * `cpu` - Architectural state; only the PC and memory are read.
///
/// # Behavior
///
/// - Produces a bubble if decode asserted a stall or the PC is invalid
///   because a control transfer has not yet retired.
/// - Otherwise reads the word at PC and writes it, or its access fault, to decode.
pub fn fetch_stage(p: &mut Pipeline, cpu: &Cpu) -> SimResult<()> {
    let stalled = p.decode_to_fetch_stall.read(p.cycle)?.unwrap_or(false);
    if stalled || !p.pc_is_valid {
        p.stats.fetch_bubbles += 1;
        if !p.pc_is_valid {
            p.stats.stalls_control += 1;
        }
        return Ok(());
    }

    let fetched = match cpu.fetch() {
        Ok(word) => {
            trace!(cycle = p.cycle, pc = cpu.pc, word, "fetch");
            p.dump.fetch = StageDump::Word(word);
            Ok(word)
        }
        Err(err) => {
            let fault = Fault::try_from(err)?;
            debug!(cycle = p.cycle, pc = cpu.pc, %fault, "fetch fault deferred");
            p.dump.fetch = StageDump::Fault(fault);
            Err(fault)
        }
    };
    p.fetch_to_decode.write(fetched, p.cycle)
}
