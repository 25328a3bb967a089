//! ELF Loader.
//!
//! This module extracts the loadable sections of a MIPS executable. It performs:
//! 1. **Parsing:** Reads the file from disk and parses it with the `object` crate.
//! 2. **Selection:** Keeps every allocatable (`SHF_ALLOC`) section that has
//!    file-backed content; `.bss`-style sections are skipped.
//! 3. **Lookup:** Finds a single named section, for the disassembler.

use std::fs;
use std::path::Path;

use object::{Object, ObjectSection, SectionFlags};
use tracing::debug;

use crate::common::error::{SimError, SimResult};
use crate::soc::Section;

/// Loads every allocatable section with content from an ELF file.
///
/// # Arguments
///
/// * `path` - Path to the executable.
///
/// # Returns
///
/// The sections in file order, or an I/O or ELF error.
pub fn load_elf_sections(path: impl AsRef<Path>) -> SimResult<Vec<Section>> {
    let data = fs::read(path.as_ref())?;
    parse_elf_sections(&data)
}

/// Same as [`load_elf_sections`] for an image already in memory.
pub fn parse_elf_sections(data: &[u8]) -> SimResult<Vec<Section>> {
    let file = object::File::parse(data)?;
    let mut sections = Vec::new();
    for section in file.sections() {
        if !is_alloc(section.flags()) {
            continue;
        }
        let content = section.data()?;
        if content.is_empty() {
            continue;
        }
        let name = section.name()?;
        debug!(name, addr = section.address(), size = content.len(), "elf section");
        sections.push(Section::new(name, section.address(), content.to_vec()));
    }
    Ok(sections)
}

/// Loads one named section from an ELF file.
///
/// # Returns
///
/// `SimError::MissingSection` if no allocatable section has that name.
pub fn load_elf_section(path: impl AsRef<Path>, name: &str) -> SimResult<Section> {
    load_elf_sections(path)?
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| SimError::MissingSection(name.to_string()))
}

const fn is_alloc(flags: SectionFlags) -> bool {
    match flags {
        SectionFlags::Elf { sh_flags } => (sh_flags & object::elf::SHF_ALLOC as u64) != 0,
        _ => false,
    }
}
