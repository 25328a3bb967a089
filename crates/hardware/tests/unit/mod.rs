//! # Unit Components
//!
//! This module organizes the component tests: ISA decoding, the address space,
//! the register file, both execution modes, configuration and loading.

/// Register file and address layout tests.
pub mod common;

/// Configuration parsing and validation.
pub mod config;

/// Pipeline, ports and functional interpreter.
pub mod core;

/// Decoder, renderer and disassembler.
pub mod isa;



/// Statistics reported by runs.
pub mod stats_verification;
