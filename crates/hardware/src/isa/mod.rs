//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MIPS I integer subset understood by the simulator: field
//! extraction, the ISA table, decoding and rendering.
//!
//! # Modules
//!
//! * `abi`: Register numbering and names.
//! * `instruction`: Field extraction and the decoded `Instruction`.
//! * `table`: The static ISA table.
//! * `decode`: Word-to-`Instruction` decoding and operand rendering.
//! * `disasm`: Convenience disassembler.

/// Register numbering and ABI names.
pub mod abi;

/// Instruction decoding logic for the R, I and J formats.
pub mod decode;

/// Instruction disassembler for tools and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// The ISA table driving decode and rendering.
pub mod table;

pub use abi::Register;
pub use instruction::{Format, Instruction, Operation};
