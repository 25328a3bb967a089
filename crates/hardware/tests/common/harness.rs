use mipsim_core::Simulator;
use mipsim_core::config::{Config, ExecutionMode};
use mipsim_core::core::pipeline::CycleDump;
use mipsim_core::isa::Register;
use mipsim_core::soc::Section;
use mipsim_core::stats::SimStats;
use tracing_subscriber::EnvFilter;

/// Address the test program is placed at.
pub const TEXT_BASE: u64 = 0x0040_0000;

/// Address of the default data section.
pub const DATA_BASE: u64 = 0x1000_0000;

/// Program image plus configuration, ready to be turned into a simulator.
pub struct TestContext {
    pub sections: Vec<Section>,
    pub config: Config,
}

impl TestContext {
    pub fn new(program: &[u32]) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let bytes = program.iter().flat_map(|w| w.to_le_bytes()).collect();
        Self {
            sections: vec![Section::new(".text", TEXT_BASE, bytes)],
            config: Config::default(),
        }
    }

    /// Adds a `.data` section.
    pub fn with_data(mut self, addr: u64, bytes: &[u8]) -> Self {
        self.sections.push(Section::new(".data", addr, bytes.to_vec()));
        self
    }

    pub fn functional(mut self) -> Self {
        self.config.general.mode = ExecutionMode::Functional;
        self
    }

    pub fn silent(mut self) -> Self {
        self.config.general.silent = true;
        self
    }

    pub fn build(&self) -> Simulator {
        Simulator::new(self.config.clone(), &self.sections).expect("program loads")
    }

    /// Runs until `count` instructions retire; returns the simulator and its output.
    pub fn run(&self, count: u64) -> (Simulator, String, SimStats) {
        let mut sim = self.build();
        let mut out = Vec::new();
        let stats = sim.run(count, &mut out).expect("run succeeds");
        (sim, String::from_utf8(out).expect("utf-8 output"), stats)
    }

    /// Ticks the pipeline `cycles` times and collects every cycle dump.
    pub fn cycles(&self, cycles: u64) -> (Simulator, Vec<CycleDump>) {
        let mut sim = self.build();
        let dumps = (0..cycles)
            .map(|_| sim.tick().expect("cycle succeeds").clone())
            .collect();
        (sim, dumps)
    }
}

/// Register value in the simulator.
pub fn reg(sim: &Simulator, r: Register) -> u64 {
    sim.cpu.regs.read(r)
}

/// Lines of output, for silent-mode comparisons.
pub fn lines(out: &str) -> Vec<&str> {
    out.lines().collect()
}
