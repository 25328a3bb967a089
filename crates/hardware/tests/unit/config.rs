use mipsim_core::common::SimError;
use mipsim_core::config::{Config, ExecutionMode, MemoryConfig};
use rstest::rstest;

#[test]
fn test_full_document() {
    let json = r#"{
        "general": { "mode": "Functional", "silent": true, "code_section": ".init" },
        "memory": { "addr_bits": 24, "page_bits": 6, "offset_bits": 10 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.mode, ExecutionMode::Functional);
    assert!(config.general.silent);
    assert_eq!(config.general.code_section, ".init");
    assert_eq!(
        config.memory,
        MemoryConfig {
            addr_bits: 24,
            page_bits: 6,
            offset_bits: 10
        }
    );
    assert_eq!(config.memory.layout().unwrap().segment_bits(), 8);
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.general.mode, ExecutionMode::Pipelined);
    assert!(!config.general.silent);
    assert_eq!(config.general.code_section, ".text");
    assert_eq!(config.memory, MemoryConfig::default());
    config.validate().unwrap();
}

#[rstest]
#[case::empty_code_section(r#"{ "general": { "code_section": "" } }"#)]
#[case::no_offset(r#"{ "memory": { "offset_bits": 0 } }"#)]
#[case::too_wide(r#"{ "memory": { "addr_bits": 65 } }"#)]
#[case::pages_exceed_width(r#"{ "memory": { "addr_bits": 20, "page_bits": 10 } }"#)]
fn test_invalid_values(#[case] json: &str) {
    assert!(matches!(Config::from_json(json), Err(SimError::Config(_))));
}

#[rstest]
#[case::not_json("mode = pipelined")]
#[case::wrong_type(r#"{ "general": { "silent": "yes" } }"#)]
#[case::unknown_mode(r#"{ "general": { "mode": "pipelined" } }"#)]
fn test_malformed(#[case] json: &str) {
    assert!(matches!(Config::from_json(json), Err(SimError::ConfigParse(_))));
}
