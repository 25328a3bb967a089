use mipsim_core::common::{AddrLayout, SimError};
use mipsim_core::config::MemoryConfig;
use mipsim_core::soc::{AddressSpace, Section};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_access_crossing_page_boundary() {
    let mut mem = AddressSpace::default();
    mem.write(0x1122_3344_5566_7788, 0xFFC, 8).unwrap();
    assert!(mem.is_mapped(0xFFC));
    assert!(mem.is_mapped(0x1000));
    assert_eq!(mem.read(0xFFC, 8).unwrap(), 0x1122_3344_5566_7788);
    assert_eq!(mem.read(0x1000, 4).unwrap(), 0x1122_3344);
}

#[test]
fn test_access_crossing_segment_boundary() {
    let mut mem = AddressSpace::default();
    // Segments are 4 MiB with the default geometry.
    mem.write(0xAABB_CCDD, 0x3F_FFFE, 4).unwrap();
    assert_eq!(mem.read(0x3F_FFFE, 4).unwrap(), 0xAABB_CCDD);
    assert_eq!(mem.read(0x40_0000, 2).unwrap(), 0xAABB);
}

#[test]
fn test_fault_reports_first_missing_byte() {
    let mut mem = AddressSpace::default();
    mem.write(0xFF, 0x1FFF, 1).unwrap();
    assert!(matches!(
        mem.read(0x1FFE, 4),
        Err(SimError::AccessFault { addr: 0x2000 })
    ));
    assert!(!mem.is_mapped(0x2000));
}

#[test]
fn test_access_beyond_address_space() {
    let mut mem = AddressSpace::default();
    assert!(matches!(
        mem.write(1, 0xFFFF_FFFE, 4),
        Err(SimError::AccessFault { addr: 0xFFFF_FFFE })
    ));
    assert!(matches!(
        mem.read(0x1_0000_0000, 1),
        Err(SimError::AccessFault { .. })
    ));
}

#[test]
fn test_small_layout() {
    let config = MemoryConfig {
        addr_bits: 16,
        page_bits: 4,
        offset_bits: 8,
    };
    let mut mem = AddressSpace::with_config(&config).unwrap();
    assert_eq!(*mem.layout(), AddrLayout::new(16, 4, 8).unwrap());
    mem.write(0xBEEF, 0xFFFE, 2).unwrap();
    assert_eq!(mem.read(0xFFFE, 2).unwrap(), 0xBEEF);
    assert!(mem.write(0, 0x1_0000, 1).is_err());
}

#[test]
fn test_load_sets_entry_point() {
    let mut mem = AddressSpace::default();
    let sections = [
        Section::new(".data", 0x1000_0000, vec![1, 2, 3, 4]),
        Section::new(".text", 0x40_0000, vec![0x20, 0x18, 0x22, 0x00]),
    ];
    mem.load(&sections, ".text").unwrap();
    assert_eq!(mem.entry_point(), 0x40_0000);
    assert_eq!(mem.read(0x40_0000, 4).unwrap(), 0x0022_1820);
    assert_eq!(mem.read(0x1000_0000, 4).unwrap(), 0x0403_0201);
}

#[test]
fn test_load_without_code_section() {
    let mut mem = AddressSpace::default();
    let sections = [Section::new(".data", 0x1000_0000, vec![1])];
    assert!(matches!(
        mem.load(&sections, ".text"),
        Err(SimError::MissingSection(name)) if name == ".text"
    ));
}

#[test]
fn test_dump_lists_sections() {
    let mut mem = AddressSpace::default();
    let sections = [
        Section::new(".text", 0x40_0000, vec![0x20, 0x18, 0x22, 0x00, 0x01, 0, 0, 0]),
        Section::new(".data", 0x1000_0000, vec![0, 0, 0, 0, 0xAB, 0, 0, 0]),
    ];
    mem.load(&sections, ".text").unwrap();
    let expected = concat!(
        "Dump memory:\n",
        " Content:\n",
        "    0x400000:    20182200\n",
        "    0x400004:    01000000\n",
        " ...\n",
        "    0x10000004:    ab000000\n",
        " ...\n",
    );
    assert_eq!(mem.dump(""), expected);
}

proptest! {
    #[test]
    fn test_write_read_round_trip(
        addr in 0u64..0xFFFF_FFF0,
        value in any::<u64>(),
        size in 1usize..=8,
    ) {
        let mut mem = AddressSpace::default();
        mem.write(value, addr, size).unwrap();
        let mask = if size == 8 { u64::MAX } else { (1u64 << (size * 8)) - 1 };
        prop_assert_eq!(mem.read(addr, size).unwrap(), value & mask);
    }
}
