//! MIPS architectural state.
//!
//! This module contains the storage backing the architecturally visible registers.
//! It includes the following modules:
//! 1. **GPRs:** The 32 integer registers plus the HI/LO pseudo-register, each with a validity flag.

/// General-Purpose Register storage.
pub mod gpr;
