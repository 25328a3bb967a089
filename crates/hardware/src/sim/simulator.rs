//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! The CPU holds the architectural state; the pipeline holds the ports and
//! in-flight control state and borrows the CPU mutably for each cycle. The
//! configured execution mode picks which of the two drives a run.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::common::error::SimResult;
use crate::config::{Config, ExecutionMode};
use crate::core::Cpu;
use crate::core::pipeline::{CycleDump, Pipeline};
use crate::sim::loader::load_elf_sections;
use crate::soc::{AddressSpace, Section};
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, PC, memory).
    pub cpu: Cpu,
    /// Five-stage pipeline.
    pub pipeline: Pipeline,
    config: Config,
}

impl Simulator {
    /// Creates a simulator with the given sections loaded.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated before use.
    /// * `sections` - Program image; must contain the configured code section.
    pub fn new(config: Config, sections: &[Section]) -> SimResult<Self> {
        config.validate()?;
        let mut mem = AddressSpace::with_config(&config.memory)?;
        mem.load(sections, &config.general.code_section)?;
        Ok(Self {
            cpu: Cpu::new(mem),
            pipeline: Pipeline::new(),
            config,
        })
    }

    /// Creates a simulator from an ELF executable on disk.
    pub fn from_elf(config: Config, path: impl AsRef<Path>) -> SimResult<Self> {
        let sections = load_elf_sections(path)?;
        Self::new(config, &sections)
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Advances the pipeline by one clock cycle.
    pub fn tick(&mut self) -> SimResult<&CycleDump> {
        self.pipeline.tick(&mut self.cpu)
    }

    /// Runs until `count` more instructions have retired.
    ///
    /// Pipelined runs print the per-cycle stage dump, or only the retired
    /// instructions when silent. Functional runs print each instruction
    /// unless silent.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of instructions to retire.
    /// * `out` - Destination of the simulator output.
    ///
    /// # Returns
    ///
    /// Statistics for the run, or the first fatal error.
    pub fn run<W: Write>(&mut self, count: u64, out: &mut W) -> SimResult<SimStats> {
        info!(count, mode = ?self.config.general.mode, pc = self.cpu.pc, "run start");
        let stats = match self.config.general.mode {
            ExecutionMode::Functional => self.run_functional(count, out)?,
            ExecutionMode::Pipelined => self.run_pipelined(count, out)?,
        };
        info!(
            cycles = stats.cycles,
            instructions = stats.instructions_retired,
            "run end"
        );
        Ok(stats)
    }

    fn run_functional<W: Write>(&mut self, count: u64, out: &mut W) -> SimResult<SimStats> {
        let silent = self.config.general.silent;
        let mut stats = SimStats::default();
        for _ in 0..count {
            let instr = self.cpu.step()?;
            stats.record_retire(&instr);
            if !silent {
                writeln!(out, "{instr}")?;
            }
        }
        Ok(stats)
    }

    fn run_pipelined<W: Write>(&mut self, count: u64, out: &mut W) -> SimResult<SimStats> {
        let silent = self.config.general.silent;
        let target = self.pipeline.stats().instructions_retired + count;
        while self.pipeline.stats().instructions_retired < target {
            let dump = self.pipeline.tick(&mut self.cpu)?;
            if !silent {
                writeln!(out, "{dump}")?;
            } else if let Some(instr) = self.pipeline.retired() {
                writeln!(out, "{instr}")?;
            }
        }
        Ok(self.pipeline.stats().clone())
    }
}
