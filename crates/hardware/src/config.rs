//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (start pc, memory size, watchdog).
//! 2. **Structures:** Hierarchical config for general options and memory.
//!
//! Configuration is supplied as JSON (for example via the CLI's `--config`
//! flag) or built with `Config::default()`.

use serde::{Deserialize, Serialize};

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden.
mod defaults {
    /// Initial program counter after reset.
    ///
    /// Program images are conventionally loaded at address zero; the fetch
    /// stage starts here unless the configuration says otherwise.
    pub const START_PC: u32 = 0;

    /// Total size of the flat memory image (64 KiB).
    ///
    /// Word accesses beyond this boundary fault. Generous for the intended
    /// workloads, which are small bare-metal programs.
    pub const MEMORY_SIZE: usize = 64 * 1024;

    /// Watchdog limit on simulated cycles (1M).
    ///
    /// A run that has not drained by this point is assumed stuck in a
    /// control-flow loop and is terminated by the driver.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Top-level simulator configuration.
///
/// # Examples
///
/// Build the default configuration:
///
/// ```
/// use mips_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.size, 64 * 1024);
/// ```
///
/// Or deserialize a partial override from JSON:
///
/// ```
/// use mips_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace": true,
///         "max_cycles": 5000
///     },
///     "memory": {
///         "size": 4096
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.size, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory image settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace lines and the per-tick pipeline diagram to
    /// stderr.
    #[serde(default)]
    pub trace: bool,

    /// Initial program counter.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Watchdog limit on simulated cycles before the driver gives up.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    /// Returns the default watchdog cycle limit.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            start_pc: defaults::START_PC,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Memory image settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Size of the flat memory image in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory image size.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}
