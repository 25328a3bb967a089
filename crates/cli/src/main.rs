//! MIPS simulator CLI.
//!
//! This binary runs a MIPS ELF executable for a given number of instructions. It performs:
//! 1. **Configuration:** Built-in defaults, optionally replaced by a JSON file and
//!    then overridden by command-line flags.
//! 2. **Loading:** Every allocatable section of the executable is placed in memory;
//!    execution starts at the code section.
//! 3. **Execution:** Pipelined (per-cycle stage dump) or functional, writing
//!    simulator output to stdout and logs to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mipsim_core::Simulator;
use mipsim_core::common::SimResult;
use mipsim_core::config::{Config, ExecutionMode};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS cycle-level simulator",
    long_about = "Run a MIPS ELF executable until the requested number of instructions retire.\n\nExamples:\n  sim prog.elf 100\n  sim prog.elf 100 --silent\n  sim prog.elf 100 --functional --config sim.json"
)]
struct Cli {
    /// ELF executable to run.
    file: PathBuf,

    /// Number of instructions to retire.
    count: u64,

    /// Print only retired instructions instead of the per-cycle dump.
    #[arg(short = 'd', long)]
    silent: bool,

    /// Run the functional interpreter instead of the pipeline.
    #[arg(long)]
    functional: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print run statistics to stderr when done.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> SimResult<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if cli.silent {
        config.general.silent = true;
    }
    if cli.functional {
        config.general.mode = ExecutionMode::Functional;
    }
    debug!(?config, file = %cli.file.display(), "configuration");

    let mut sim = Simulator::from_elf(config, &cli.file)?;
    let mut out = BufWriter::new(io::stdout().lock());
    let stats = sim.run(cli.count, &mut out)?;
    out.flush()?;

    if cli.stats {
        eprintln!("{stats}");
    }
    Ok(())
}
