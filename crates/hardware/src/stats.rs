//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the MIPS simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, control).
//! 3. **Stalls:** Fetch bubbles, data hazard and control stall counts.

use std::fmt;
use std::time::Instant;

use crate::isa::Instruction;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed (zero in functional mode).
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_branch: u64,
    /// Count of all other instructions retired.
    pub inst_alu: u64,

    /// Cycles in which fetch produced a bubble.
    pub fetch_bubbles: u64,
    /// Cycles decode held an instruction waiting for a register.
    pub stalls_data: u64,
    /// Cycles fetch waited for a control transfer to resolve.
    pub stalls_control: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_alu: 0,
            fetch_bubbles: 0,
            stalls_data: 0,
            stalls_control: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction in its category.
    ///
    /// # Arguments
    ///
    /// * `instr` - The instruction leaving writeback (or the functional loop).
    pub fn record_retire(&mut self, instr: &Instruction) {
        self.instructions_retired += 1;
        if instr.is_load() {
            self.inst_load += 1;
        } else if instr.is_store() {
            self.inst_store += 1;
        } else if instr.is_jump() {
            self.inst_branch += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Instructions per cycle, or 0 when no cycles have been simulated.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "MIPS SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu))?;
        writeln!(f, "  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load))?;
        writeln!(f, "  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store))?;
        writeln!(f, "  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch))?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "STALLS")?;
        writeln!(f, "  fetch.bubbles          {}", self.fetch_bubbles)?;
        writeln!(f, "  stalls.data            {}", self.stalls_data)?;
        writeln!(f, "  stalls.control         {}", self.stalls_control)?;
        write!(f, "==========================================================")
    }
}
