//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Layout:** Segment/page/offset decomposition of memory addresses.
//! 2. **Constants:** Instruction geometry, register file size and port parameters.
//! 3. **Error Handling:** The fatal `SimError` type and its hazard/port sub-kinds.
//! 4. **Register Management:** The register file with in-flight write tracking.

/// Address decomposition for the sparse memory.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::AddrLayout;
pub use error::{Fault, HazardViolation, PortError, SimError, SimResult};
pub use reg::RegisterFile;
