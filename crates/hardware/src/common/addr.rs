//! Address decomposition for the sparse functional memory.
//!
//! An address is split into three components, most significant first:
//! 1. **Segment index:** selects a lazily allocated page table.
//! 2. **Page index:** selects a lazily allocated page within that table.
//! 3. **Offset:** selects the byte within the page.

use crate::common::error::{SimError, SimResult};

/// Bit widths of the three address components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrLayout {
    addr_bits: u32,
    page_bits: u32,
    offset_bits: u32,
}

impl AddrLayout {
    /// Creates a layout after checking that the components fit the address width.
    ///
    /// # Arguments
    ///
    /// * `addr_bits` - Total address width (at most 64).
    /// * `page_bits` - Width of the page index.
    /// * `offset_bits` - Width of the in-page offset (at least 1).
    pub fn new(addr_bits: u32, page_bits: u32, offset_bits: u32) -> SimResult<Self> {
        if addr_bits == 0 || addr_bits > 64 {
            return Err(SimError::Config(format!(
                "address width must be within 1..=64 bits, got {addr_bits}"
            )));
        }
        if offset_bits == 0 {
            return Err(SimError::Config("page offset needs at least one bit".into()));
        }
        if page_bits + offset_bits > addr_bits {
            return Err(SimError::Config(format!(
                "page ({page_bits}) + offset ({offset_bits}) bits exceed address width ({addr_bits})"
            )));
        }
        // A single page must be addressable on the host.
        if offset_bits >= usize::BITS || page_bits >= usize::BITS {
            return Err(SimError::Config("page geometry too large for host".into()));
        }
        Ok(Self {
            addr_bits,
            page_bits,
            offset_bits,
        })
    }

    /// Total address width in bits.
    pub const fn addr_bits(&self) -> u32 {
        self.addr_bits
    }

    /// Width of the segment index in bits.
    pub const fn segment_bits(&self) -> u32 {
        self.addr_bits - self.page_bits - self.offset_bits
    }

    /// Number of pages in one segment's page table.
    pub const fn pages_per_segment(&self) -> usize {
        1 << self.page_bits
    }

    /// Number of bytes in one page.
    pub const fn page_size(&self) -> usize {
        1 << self.offset_bits
    }

    /// Returns `true` if `addr` lies inside the address space.
    pub const fn contains(&self, addr: u64) -> bool {
        self.addr_bits == 64 || addr >> self.addr_bits == 0
    }

    /// Segment component of `addr`.
    pub const fn segment_index(&self, addr: u64) -> u64 {
        let shift = self.page_bits + self.offset_bits;
        if shift == 64 { 0 } else { addr >> shift }
    }

    /// Page component of `addr`.
    pub const fn page_index(&self, addr: u64) -> usize {
        ((addr >> self.offset_bits) & ((1 << self.page_bits) - 1)) as usize
    }

    /// Offset component of `addr`.
    pub const fn offset(&self, addr: u64) -> usize {
        (addr & ((1 << self.offset_bits) - 1)) as usize
    }

    /// Reassembles an address from its three components.
    pub const fn compose(&self, segment: u64, page: usize, offset: usize) -> u64 {
        let seg = if self.page_bits + self.offset_bits == 64 {
            0
        } else {
            segment << (self.page_bits + self.offset_bits)
        };
        seg | ((page as u64) << self.offset_bits) | offset as u64
    }
}

impl Default for AddrLayout {
    /// 32-bit addresses, 1024 pages per segment, 4 KiB pages.
    fn default() -> Self {
        Self {
            addr_bits: 32,
            page_bits: 10,
            offset_bits: 12,
        }
    }
}
