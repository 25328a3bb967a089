//! Core processor implementation.
//!
//! This module contains the CPU state, the five-stage pipeline, the execution
//! units shared by both execution modes, and the architectural register storage.

/// Architectural register storage.
pub mod arch;

/// CPU state and functional execution.
pub mod cpu;

/// Instruction pipeline implementation (ports, stages, engine).
pub mod pipeline;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::cpu::Cpu;
