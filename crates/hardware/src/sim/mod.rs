//! Simulation driver and program loading.
//!
//! Provides the ELF section loader and the `Simulator`, which ties the CPU
//! and the pipeline together and runs either execution mode.

pub mod loader;

pub mod simulator;

pub use simulator::Simulator;
