//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline address-space geometry and code section name.
//! 2. **Structures:** Hierarchical config for general settings and memory.
//! 3. **Enums:** The execution mode (functional or pipelined).
//!
//! Configuration is supplied as JSON (`Config::from_json`) or taken from
//! `Config::default()`.

use serde::Deserialize;

use crate::common::addr::AddrLayout;
use crate::common::constants::CODE_SECTION;
use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    /// Width of a simulated address.
    pub const ADDR_BITS: u32 = 32;

    /// Width of the page index (1024 pages per segment).
    pub const PAGE_BITS: u32 = 10;

    /// Width of the in-page offset (4 KiB pages).
    pub const OFFSET_BITS: u32 = 12;
}

/// How instructions are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ExecutionMode {
    /// One instruction per step, no timing.
    Functional,
    /// Five-stage pipeline with handshaking ports and per-cycle state.
    #[default]
    Pipelined,
}

/// Root configuration structure.
///
/// Every section and field is optional in JSON.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, ExecutionMode};
///
/// let json = r#"{
///     "general": { "mode": "Functional", "silent": true },
///     "memory": { "page_bits": 8 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.mode, ExecutionMode::Functional);
/// assert!(config.general.silent);
/// assert_eq!(config.general.code_section, ".text");
/// assert_eq!(config.memory.page_bits, 8);
/// assert_eq!(config.memory.offset_bits, 12);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Address-space geometry
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Returns
    ///
    /// `SimError::ConfigParse` for malformed JSON, `SimError::Config` for
    /// inconsistent values.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> SimResult<()> {
        if self.general.code_section.is_empty() {
            return Err(SimError::Config("code section name is empty".into()));
        }
        let _ = self.memory.layout()?;
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Functional or pipelined execution
    #[serde(default)]
    pub mode: ExecutionMode,

    /// Print only retired instructions instead of the per-cycle stage dump
    #[serde(default)]
    pub silent: bool,

    /// Section whose start address is the entry point
    #[serde(default = "GeneralConfig::default_code_section")]
    pub code_section: String,
}

impl GeneralConfig {
    /// Returns the default code section name.
    fn default_code_section() -> String {
        CODE_SECTION.to_owned()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            silent: false,
            code_section: CODE_SECTION.to_owned(),
        }
    }
}

/// Address-space geometry.
///
/// An address splits into `addr_bits - page_bits - offset_bits` segment bits,
/// `page_bits` page bits and `offset_bits` offset bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Total address width
    #[serde(default = "MemoryConfig::default_addr_bits")]
    pub addr_bits: u32,

    /// Page index width
    #[serde(default = "MemoryConfig::default_page_bits")]
    pub page_bits: u32,

    /// In-page offset width
    #[serde(default = "MemoryConfig::default_offset_bits")]
    pub offset_bits: u32,
}

impl MemoryConfig {
    /// Returns the default address width.
    fn default_addr_bits() -> u32 {
        defaults::ADDR_BITS
    }

    /// Returns the default page index width.
    fn default_page_bits() -> u32 {
        defaults::PAGE_BITS
    }

    /// Returns the default offset width.
    fn default_offset_bits() -> u32 {
        defaults::OFFSET_BITS
    }

    /// Builds the validated address layout.
    pub fn layout(&self) -> SimResult<AddrLayout> {
        AddrLayout::new(self.addr_bits, self.page_bits, self.offset_bits)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            addr_bits: defaults::ADDR_BITS,
            page_bits: defaults::PAGE_BITS,
            offset_bits: defaults::OFFSET_BITS,
        }
    }
}
