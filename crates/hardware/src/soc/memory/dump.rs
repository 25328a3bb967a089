//! Memory dump.
//!
//! Lists allocated memory as 4-byte windows in address order. Windows that
//! are entirely zero are not printed; a stretch of zero windows or
//! unallocated space following printed data collapses into one `...` line.
//!
//! ```text
//! Dump memory:
//!  Content:
//!     0x400000:    20182200
//!  ...
//! ```

use std::fmt::Write as _;

use super::AddressSpace;

/// Width of one dump window in bytes.
const WINDOW: usize = 4;

impl AddressSpace {
    /// Renders the non-zero contents of memory.
    ///
    /// # Arguments
    ///
    /// * `indent` - Prefix for every line.
    ///
    /// # Returns
    ///
    /// The listing, one line per non-zero window with bytes shown in memory order.
    pub fn dump(&self, indent: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{indent}Dump memory:");
        let _ = writeln!(out, "{indent} Content:");

        let layout = self.layout;
        let page_size = layout.page_size() as u64;
        // Printing starts in the "zero seen" state so leading gaps are silent.
        let mut collapsed = true;
        let mut next_addr = 0u64;

        for (&segment, table) in &self.segments {
            for (page_idx, page) in table.iter().enumerate() {
                let Some(page) = page else { continue };
                let base = layout.compose(segment, page_idx, 0);
                if base != next_addr && !collapsed {
                    let _ = writeln!(out, "{indent} ...");
                    collapsed = true;
                }
                for (i, window) in page.chunks(WINDOW).enumerate() {
                    if window.iter().all(|&b| b == 0) {
                        if !collapsed {
                            let _ = writeln!(out, "{indent} ...");
                            collapsed = true;
                        }
                        continue;
                    }
                    let addr = base + (i * WINDOW) as u64;
                    let _ = write!(out, "{indent}    {addr:#x}:    ");
                    for b in window {
                        let _ = write!(out, "{b:02x}");
                    }
                    out.push('\n');
                    collapsed = false;
                }
                next_addr = base.wrapping_add(page_size);
            }
        }

        // Unallocated space after the last page.
        let at_end = next_addr == 0 || !layout.contains(next_addr);
        if !collapsed && !at_end {
            let _ = writeln!(out, "{indent} ...");
        }
        out
    }
}
