//! Pipeline stage implementations.
//!
//! Each stage is a free function over the pipeline's ports and the CPU state,
//! called once per cycle by the engine:
//! 1. **Fetch:** Reads the word at PC unless stalled or the PC is unresolved.
//! 2. **Decode:** Decodes, checks register validity, reads operands, advances PC.
//! 3. **Execute:** Computes results, effective addresses and branch targets.
//! 4. **Memory:** Performs loads; stores pass through.
//! 5. **Writeback:** Commits stores and results, retires, and redirects the PC
//!    on jumps. Faults carried by a slot are raised here.

/// ID: decode and hazard check.
pub mod decode;

/// EX: ALU and branch resolution.
pub mod execute;

/// IF: instruction word fetch.
pub mod fetch;

/// MEM: data memory access.
pub mod memory;

/// WB: register commit and retirement.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
