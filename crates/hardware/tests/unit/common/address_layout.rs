use mipsim_core::common::{AddrLayout, SimError};
use proptest::prelude::*;

#[test]
fn test_default_geometry() {
    let layout = AddrLayout::default();
    assert_eq!(layout.segment_bits(), 10);
    assert_eq!(layout.pages_per_segment(), 1024);
    assert_eq!(layout.page_size(), 4096);
    assert!(layout.contains(0xFFFF_FFFF));
    assert!(!layout.contains(0x1_0000_0000));
}

#[test]
fn test_rejects_inconsistent_widths() {
    assert!(matches!(AddrLayout::new(16, 10, 12), Err(SimError::Config(_))));
    assert!(matches!(AddrLayout::new(32, 10, 0), Err(SimError::Config(_))));
    assert!(matches!(AddrLayout::new(65, 10, 12), Err(SimError::Config(_))));
    assert!(AddrLayout::new(64, 10, 12).is_ok());
}

proptest! {
    #[test]
    fn test_split_and_compose(addr in 0u64..(1 << 32)) {
        let layout = AddrLayout::default();
        let rebuilt = layout.compose(
            layout.segment_index(addr),
            layout.page_index(addr),
            layout.offset(addr),
        );
        prop_assert_eq!(rebuilt, addr);
    }
}
