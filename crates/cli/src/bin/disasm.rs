//! MIPS disassembler CLI.
//!
//! Prints one rendered instruction per 32-bit word of a named ELF section,
//! indented by four spaces. Words that match no instruction print as `unknown`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mipsim_core::common::SimResult;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::loader::load_elf_section;

#[derive(Parser, Debug)]
#[command(name = "disasm", author, version, about = "Disassemble a section of a MIPS ELF file")]
struct Cli {
    /// ELF executable.
    file: PathBuf,

    /// Section to disassemble, e.g. `.text`.
    section: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> SimResult<()> {
    let section = load_elf_section(&cli.file, &cli.section)?;
    for chunk in section.content.chunks_exact(4) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        println!("    {}", disassemble(word));
    }
    Ok(())
}
