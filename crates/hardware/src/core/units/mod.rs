//! Execution units and functional components.
//!
//! This module contains the units shared by the functional and pipelined
//! execution paths: the integer ALU, the branch resolution unit and the
//! load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for branches and jumps.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
