//! Instruction Disassembler for the MIPS integer subset.
//!
//! Converts a 32-bit instruction word into the assembly text produced by the
//! ISA table, for the `disasm` tool, trace output and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0022_1820), "add  $v1, $at, $v0");
//! ```

use crate::isa::decode::decode;

/// Text returned for words that match no ISA table entry.
pub const UNKNOWN: &str = "unknown";

/// Disassembles a 32-bit MIPS instruction into a human-readable string.
///
/// Returns the rendered instruction like `"addiu  $t0, $zero, 0x1"`, or
/// `"unknown"` for unrecognised encodings.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| UNKNOWN.to_owned(), |i| i.text().to_owned())
}
