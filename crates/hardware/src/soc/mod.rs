//! System-on-Chip (SoC) Components.
//!
//! The simulated machine has a single flat memory; this module holds its
//! sparse address space and the section type used to populate it.

/// Sparse functional memory.
pub mod memory;

pub use memory::{AddressSpace, Section};
