//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction size and program-counter arithmetic.
//! 2. **Register Constants:** Register file geometry.
//! 3. **Port Constants:** Handshake parameters of the five-stage pipeline.

/// Size of every MIPS instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Upper PC bits preserved by J-format jumps (the 256 MiB region).
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Number of architectural general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Register file entries: the GPRs plus the HI/LO pseudo-register.
pub const REG_FILE_SIZE: usize = GPR_COUNT + 1;

/// Largest single memory access in bytes.
pub const MAX_ACCESS_SIZE: usize = 8;

/// Items a pipeline port accepts per cycle (single-issue core).
pub const PORT_BANDWIDTH: u32 = 1;

/// Readers of each item written to a pipeline port.
pub const PORT_FANOUT: u32 = 1;

/// Cycles between a port write and the matching read.
pub const PORT_LATENCY: u64 = 1;

/// Default name of the section holding executable code.
pub const CODE_SECTION: &str = ".text";
