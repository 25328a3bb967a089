//! Pipeline Engine.
//!
//! The engine owns the port set wiring the five stages and the state that
//! belongs to the pipeline rather than the architecture:
//! 1. **Ports:** One data port per forward edge, one stall port per backward edge.
//! 2. **Control State:** PC validity while a control transfer is in flight, and
//!    the instruction held by decode during a data hazard.
//! 3. **Diagnostics:** The per-cycle stage dump and run statistics.
//!
//! Each cycle runs the stages in the order writeback, decode, fetch, execute,
//! memory. Writeback runs first so that a register it commits is visible to
//! decode in the same cycle.

use std::fmt;

use tracing::trace;

use super::port::Port;
use super::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::common::error::{Fault, SimResult};
use crate::core::Cpu;
use crate::isa::Instruction;
use crate::stats::SimStats;

/// Pipeline slot: a decoded instruction, or the fault its word raised.
pub(crate) type InFlight = Result<Instruction, Fault>;

/// What one stage did in one cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StageDump {
    /// The stage had nothing to do.
    #[default]
    Bubble,
    /// Fetch produced a raw word.
    Word(u32),
    /// The stage processed this instruction (rendered text).
    Instr(String),
    /// The stage passed on a slot that will fault if it retires.
    Fault(Fault),
}

impl StageDump {
    pub(crate) fn of(slot: &InFlight) -> Self {
        match slot {
            Ok(instr) => Self::Instr(instr.text().to_string()),
            Err(fault) => Self::Fault(*fault),
        }
    }
}

impl fmt::Display for StageDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bubble => f.write_str("bubble"),
            Self::Word(word) => write!(f, "{word:#x}"),
            Self::Instr(text) => f.write_str(text),
            Self::Fault(fault) => write!(f, "{fault}"),
        }
    }
}

/// Snapshot of all five stages for one cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleDump {
    /// Cycle number.
    pub cycle: u64,
    /// Fetch stage.
    pub fetch: StageDump,
    /// Decode stage.
    pub decode: StageDump,
    /// Execute stage.
    pub execute: StageDump,
    /// Memory stage.
    pub memory: StageDump,
    /// Writeback stage.
    pub writeback: StageDump,
}

impl fmt::Display for CycleDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages = [
            ("fetch", &self.fetch),
            ("decode", &self.decode),
            ("execute", &self.execute),
            ("memory", &self.memory),
            ("writeback", &self.writeback),
        ];
        for (name, stage) in stages {
            writeln!(f, "{name:<10}cycle {}:  {stage}", self.cycle)?;
        }
        Ok(())
    }
}

/// Five-stage in-order pipeline.
#[derive(Clone, Debug)]
pub struct Pipeline {
    pub(crate) fetch_to_decode: Port<Result<u32, Fault>>,
    pub(crate) decode_to_fetch_stall: Port<bool>,
    pub(crate) decode_to_execute: Port<InFlight>,
    pub(crate) execute_to_decode_stall: Port<bool>,
    pub(crate) execute_to_memory: Port<InFlight>,
    pub(crate) memory_to_execute_stall: Port<bool>,
    pub(crate) memory_to_writeback: Port<InFlight>,
    pub(crate) writeback_to_memory_stall: Port<bool>,

    /// False from decode of a control transfer until its writeback.
    pub(crate) pc_is_valid: bool,
    /// Instruction kept by decode while its registers are pending.
    pub(crate) held: Option<Instruction>,
    pub(crate) cycle: u64,
    pub(crate) dump: CycleDump,
    pub(crate) retired: Option<Instruction>,
    pub(crate) stats: SimStats,
}

impl Pipeline {
    /// Creates an empty pipeline at cycle 0.
    pub fn new() -> Self {
        Self {
            fetch_to_decode: Port::data("fetch_to_decode"),
            decode_to_fetch_stall: Port::signal("decode_to_fetch_stall"),
            decode_to_execute: Port::data("decode_to_execute"),
            execute_to_decode_stall: Port::signal("execute_to_decode_stall"),
            execute_to_memory: Port::data("execute_to_memory"),
            memory_to_execute_stall: Port::signal("memory_to_execute_stall"),
            memory_to_writeback: Port::data("memory_to_writeback"),
            writeback_to_memory_stall: Port::signal("writeback_to_memory_stall"),
            pc_is_valid: true,
            held: None,
            cycle: 0,
            dump: CycleDump::default(),
            retired: None,
            stats: SimStats::default(),
        }
    }

    /// Runs one clock cycle of all five stages.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Architectural state the stages operate on.
    ///
    /// # Returns
    ///
    /// The stage dump for the cycle just simulated.
    pub fn tick(&mut self, cpu: &mut Cpu) -> SimResult<&CycleDump> {
        self.dump = CycleDump {
            cycle: self.cycle,
            ..CycleDump::default()
        };
        self.retired = None;

        wb_stage(self, cpu)?;
        decode_stage(self, cpu)?;
        fetch_stage(self, cpu)?;
        execute_stage(self)?;
        mem_stage(self, cpu)?;

        trace!(cycle = self.cycle, pc = cpu.pc, pc_valid = self.pc_is_valid, "cycle done");
        self.cycle += 1;
        self.stats.cycles = self.cycle;
        Ok(&self.dump)
    }

    /// Instruction retired in the last cycle, if any.
    pub const fn retired(&self) -> Option<&Instruction> {
        self.retired.as_ref()
    }

    /// Number of cycles simulated so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Whether fetch may use the current PC.
    pub const fn pc_is_valid(&self) -> bool {
        self.pc_is_valid
    }

    /// Run statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
