//! MIPS cycle-level simulator library.
//!
//! This crate implements a simulator for a 32-bit MIPS subset with the following:
//! 1. **ISA:** Table-driven decoding and disassembly of R, I and J formats.
//! 2. **Core:** Register file with hazard tracking, execution units, a functional
//!    interpreter and a five-stage pipeline connected by handshake ports.
//! 3. **Memory:** Sparse segment/page/offset address space.
//! 4. **Simulation:** ELF loader, configuration, and statistics collection.

/// Common types and constants (address layout, register file, errors).
pub mod common;
/// Simulator configuration (defaults, execution mode, memory geometry).
pub mod config;
/// CPU core (pipeline, arch, execution units).
pub mod core;
/// Instruction set (decode, instruction, ABI names, disassembly).
pub mod isa;
/// ELF loader and simulation driver.
pub mod sim;
/// Address space and program sections.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Architectural CPU state; registers, PC and memory.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_elf`.
pub use crate::sim::Simulator;
