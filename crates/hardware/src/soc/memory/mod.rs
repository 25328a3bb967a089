//! Sparse Functional Memory.
//!
//! This module implements the simulated address space. It provides:
//! 1. **Sparse Storage:** A segment table of lazily allocated page tables of
//!    lazily allocated pages, so only touched memory costs host memory.
//! 2. **Program Loading:** Copying of loadable sections and entry-point discovery.
//! 3. **Byte Access:** Little-endian reads and writes of 1-8 bytes that may
//!    straddle page and segment boundaries.
//! 4. **Dump:** A textual listing of non-zero memory (see [`dump`]).

/// Textual memory listing.
pub mod dump;

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::addr::AddrLayout;
use crate::common::constants::MAX_ACCESS_SIZE;
use crate::common::error::{SimError, SimResult};
use crate::config::MemoryConfig;

/// A named, contiguous block of program bytes to place in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Section name, e.g. `.text`.
    pub name: String,
    /// Address of the first byte.
    pub start_addr: u64,
    /// Number of bytes.
    pub size: u64,
    /// Section bytes; `content.len() == size`.
    pub content: Vec<u8>,
}

impl Section {
    /// Creates a section whose size is the content length.
    pub fn new(name: impl Into<String>, start_addr: u64, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            start_addr,
            size: content.len() as u64,
            content,
        }
    }
}

/// One segment's page table.
type PageTable = Vec<Option<Box<[u8]>>>;

/// The simulated address space.
///
/// Reads of never-written pages fault; writes allocate zero-filled pages.
#[derive(Clone, Debug)]
pub struct AddressSpace {
    layout: AddrLayout,
    segments: BTreeMap<u64, PageTable>,
    entry_point: u64,
}

impl AddressSpace {
    /// Creates an empty address space.
    ///
    /// # Arguments
    ///
    /// * `layout` - Segment/page/offset split of addresses.
    pub fn new(layout: AddrLayout) -> Self {
        Self {
            layout,
            segments: BTreeMap::new(),
            entry_point: 0,
        }
    }

    /// Creates an empty address space from the memory configuration section.
    ///
    /// # Returns
    ///
    /// `SimError::Config` if the bit widths are inconsistent.
    pub fn with_config(config: &MemoryConfig) -> SimResult<Self> {
        Ok(Self::new(config.layout()?))
    }

    /// Address decomposition in use.
    pub const fn layout(&self) -> &AddrLayout {
        &self.layout
    }

    /// Copies every section into memory and records the entry point.
    ///
    /// # Arguments
    ///
    /// * `sections` - Sections to load, in any order.
    /// * `code_section` - Name of the section whose start becomes the entry point.
    ///
    /// # Returns
    ///
    /// `SimError::MissingSection` if no section carries `code_section`, or an
    /// access fault if a section does not fit the address space.
    pub fn load(&mut self, sections: &[Section], code_section: &str) -> SimResult<()> {
        let mut entry = None;
        for section in sections {
            debug!(
                name = %section.name,
                start = section.start_addr,
                size = section.size,
                "loading section"
            );
            self.write_bytes(section.start_addr, &section.content)?;
            if section.name == code_section {
                entry = Some(section.start_addr);
            }
        }
        self.entry_point =
            entry.ok_or_else(|| SimError::MissingSection(code_section.to_owned()))?;
        Ok(())
    }

    /// Address of the first instruction to execute.
    pub const fn entry_point(&self) -> u64 {
        self.entry_point
    }

    /// Returns `true` if the page holding `addr` has been allocated.
    pub fn is_mapped(&self, addr: u64) -> bool {
        self.page(addr).is_some()
    }

    /// Reads `size` bytes starting at `addr` as a little-endian value.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the least significant byte.
    /// * `size` - Access width, 1 to 8 bytes.
    ///
    /// # Returns
    ///
    /// The assembled value, or an access fault naming the first byte whose
    /// page was never allocated.
    pub fn read(&self, addr: u64, size: usize) -> SimResult<u64> {
        self.check_access(addr, size)?;
        let mut buf = [0u8; MAX_ACCESS_SIZE];
        let mut done = 0;
        while done < size {
            let a = addr + done as u64;
            let page = self.page(a).ok_or(SimError::AccessFault { addr: a })?;
            let off = self.layout.offset(a);
            let n = (size - done).min(page.len() - off);
            buf[done..done + n].copy_from_slice(&page[off..off + n]);
            done += n;
        }
        Ok(u64::from_le_bytes(buf))
    }

    /// Writes the low `size` bytes of `value` starting at `addr`, little-endian.
    ///
    /// Pages and page tables are allocated on first touch.
    pub fn write(&mut self, value: u64, addr: u64, size: usize) -> SimResult<()> {
        self.check_access(addr, size)?;
        let bytes = value.to_le_bytes();
        self.write_bytes(addr, &bytes[..size])
    }

    /// Copies a byte slice into memory starting at `addr`.
    pub fn write_bytes(&mut self, addr: u64, data: &[u8]) -> SimResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        self.check_range(addr, data.len())?;

        let mut done = 0;
        while done < data.len() {
            let a = addr + done as u64;
            let off = self.layout.offset(a);
            let page = self.page_mut(a);
            let n = (data.len() - done).min(page.len() - off);
            page[off..off + n].copy_from_slice(&data[done..done + n]);
            done += n;
        }
        Ok(())
    }

    /// Rejects widths outside `1..=8` and accesses leaving the address space.
    fn check_access(&self, addr: u64, size: usize) -> SimResult<()> {
        if size == 0 || size > MAX_ACCESS_SIZE {
            return Err(SimError::InvalidAccessSize { size });
        }
        self.check_range(addr, size)
    }

    /// Rejects byte ranges that leave the address space.
    fn check_range(&self, addr: u64, len: usize) -> SimResult<()> {
        match addr.checked_add(len as u64 - 1) {
            Some(last) if self.layout.contains(addr) && self.layout.contains(last) => Ok(()),
            _ => Err(SimError::AccessFault { addr }),
        }
    }

    /// Page holding `addr`, if allocated.
    fn page(&self, addr: u64) -> Option<&[u8]> {
        self.segments
            .get(&self.layout.segment_index(addr))?
            .get(self.layout.page_index(addr))?
            .as_deref()
    }

    /// Page holding `addr`, allocating the page table and page if needed.
    fn page_mut(&mut self, addr: u64) -> &mut [u8] {
        let layout = self.layout;
        let table = self
            .segments
            .entry(layout.segment_index(addr))
            .or_insert_with(|| vec![None; layout.pages_per_segment()]);
        table[layout.page_index(addr)]
            .get_or_insert_with(|| vec![0u8; layout.page_size()].into_boxed_slice())
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new(AddrLayout::default())
    }
}
