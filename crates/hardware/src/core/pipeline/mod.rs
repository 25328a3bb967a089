//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Ports:** Latency-delayed handshake channels between stages.
//! 2. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 3. **Engine:** The port set, control state and per-cycle driver.

/// Pipeline driver and per-cycle dump.
pub mod engine;

/// Inter-stage handshake ports.
pub mod port;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use engine::{CycleDump, Pipeline, StageDump};
