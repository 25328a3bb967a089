//! Simulator error definitions.
//!
//! This module defines the fatal conditions the simulator can run into. It provides:
//! 1. **Decode Faults:** An instruction word matched no entry of the ISA table.
//! 2. **Access Faults:** A read touched a segment or page that was never written.
//! 3. **Hazard Violations:** The register-file claim/commit protocol was broken.
//! 4. **Port Errors:** A handshake port was over-driven or an item was never consumed.
//! 5. **Setup Errors:** Configuration, I/O and ELF failures while preparing a run.
//!
//! None of these are recoverable within a run: the simulator executes a trusted,
//! pre-validated binary, so any of them terminates the simulation. They are still
//! returned as values so callers (and tests) decide how to report them.

use thiserror::Error;

use crate::isa::instruction::Format;
use crate::isa::Register;

/// Violations of the register-file hazard protocol.
///
/// Under correct pipeline operation these never occur; seeing one means the
/// decode stage admitted an instruction it should have stalled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HazardViolation {
    /// A register with an outstanding write was invalidated a second time.
    #[error("register {0} invalidated while a write to it is still in flight")]
    AlreadyInvalid(Register),

    /// A register was written back without having been claimed first.
    #[error("register {0} written back without a pending write")]
    NotInvalid(Register),
}

/// Ways a handshake port can be misused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PortError {
    /// More items were written in one cycle than the port bandwidth allows.
    #[error("bandwidth of {bandwidth} exceeded in cycle {cycle}")]
    BandwidthExceeded {
        /// Configured items per cycle.
        bandwidth: u32,
        /// Cycle of the offending write.
        cycle: u64,
    },

    /// An item became readable and was never read.
    #[error("item ready in cycle {ready} was never read (now cycle {cycle})")]
    DataLost {
        /// Cycle in which the item became readable.
        ready: u64,
        /// Cycle in which the loss was detected.
        cycle: u64,
    },
}

/// A fault raised by one instruction while it is still in flight.
///
/// The pipeline fetches and decodes ahead of retirement, so a fault found
/// early travels with its slot and only becomes a [`SimError`] if that slot
/// reaches writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The fetched word matched no ISA table entry.
    #[error("decode fault: no {format:?}-format instruction matches {word:#010x}")]
    Decode {
        /// The raw instruction word.
        word: u32,
        /// Format selected by the opcode.
        format: Format,
    },

    /// Fetch or load touched unallocated memory.
    #[error("access fault at {addr:#x}")]
    AccessFault {
        /// The first faulting byte address.
        addr: u64,
    },
}

/// Fatal simulator errors.
#[derive(Debug, Error)]
pub enum SimError {
    /// No ISA table entry matches the instruction word.
    #[error("decode fault: no {format:?}-format instruction matches {word:#010x}")]
    Decode {
        /// The raw instruction word.
        word: u32,
        /// Format selected by the opcode.
        format: Format,
    },

    /// Access to an address whose segment or page was never allocated, or that
    /// lies outside the configured address space.
    #[error("access fault at {addr:#x}")]
    AccessFault {
        /// The first faulting byte address.
        addr: u64,
    },

    /// Memory access width outside `1..=8` bytes.
    #[error("invalid access size {size} (expected 1..=8 bytes)")]
    InvalidAccessSize {
        /// The requested width in bytes.
        size: usize,
    },

    /// Register-file hazard protocol violation.
    #[error("hazard contract violation: {0}")]
    Hazard(#[from] HazardViolation),

    /// Handshake port misuse.
    #[error("port {name}: {source}")]
    Port {
        /// Port name.
        name: &'static str,
        /// What went wrong.
        #[source]
        source: PortError,
    },

    /// Invalid simulator configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Host I/O failure (reading the binary, writing diagnostics).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The executable could not be parsed.
    #[error("ELF error: {0}")]
    Elf(#[from] object::Error),

    /// A required section is absent from the executable.
    #[error("section {0:?} not found")]
    MissingSection(String),
}

impl From<Fault> for SimError {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::Decode { word, format } => Self::Decode { word, format },
            Fault::AccessFault { addr } => Self::AccessFault { addr },
        }
    }
}

impl TryFrom<SimError> for Fault {
    type Error = SimError;

    /// Keeps decode and access faults; every other error is returned as is.
    fn try_from(err: SimError) -> Result<Self, SimError> {
        match err {
            SimError::Decode { word, format } => Ok(Self::Decode { word, format }),
            SimError::AccessFault { addr } => Ok(Self::AccessFault { addr }),
            other => Err(other),
        }
    }
}

/// Result alias used throughout the simulator.
pub type SimResult<T> = Result<T, SimError>;
