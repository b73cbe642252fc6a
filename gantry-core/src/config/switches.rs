//! Switch configuration
//!
//! Mode and wiring for each switch slot. Loading and storing this is left
//! to the firmware; the core only validates and applies it.

use heapless::Vec;

use crate::switch::{SwitchId, SwitchMode, Tick, WiringType, DEFAULT_LOCKOUT_TICKS, SWITCH_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More entries than switch slots
    TooManySwitches,
    /// Same switch configured twice
    DuplicateSwitch(SwitchId),
}

/// Configuration for a single switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchConfig {
    /// Switch slot
    pub id: SwitchId,
    /// Homing/limit usage
    pub mode: SwitchMode,
    /// Wiring override (None = use the default wiring)
    pub wiring: Option<WiringType>,
}

impl SwitchConfig {
    /// Create an entry using the default wiring
    pub const fn new(id: SwitchId, mode: SwitchMode) -> Self {
        Self {
            id,
            mode,
            wiring: None,
        }
    }

    /// Override the wiring type for this switch
    pub const fn with_wiring(mut self, wiring: WiringType) -> Self {
        self.wiring = Some(wiring);
        self
    }
}

/// Configuration for the whole switch table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchesConfig {
    /// Wiring type for switches without an override
    pub default_wiring: WiringType,
    /// Debounce lockout after each transition
    pub lockout_ticks: Tick,
    /// Enabled switches (unlisted switches stay disabled)
    pub switches: Vec<SwitchConfig, SWITCH_COUNT>,
}

impl Default for SwitchesConfig {
    fn default() -> Self {
        Self::new(WiringType::NormallyOpen)
    }
}

impl SwitchesConfig {
    /// Create an empty configuration
    pub fn new(default_wiring: WiringType) -> Self {
        Self {
            default_wiring,
            lockout_ticks: DEFAULT_LOCKOUT_TICKS,
            switches: Vec::new(),
        }
    }

    /// Add a switch entry
    pub fn push(&mut self, entry: SwitchConfig) -> Result<(), ConfigError> {
        if self.find(entry.id).is_some() {
            return Err(ConfigError::DuplicateSwitch(entry.id));
        }
        self.switches
            .push(entry)
            .map_err(|_| ConfigError::TooManySwitches)
    }

    /// Find the entry for a switch
    pub fn find(&self, id: SwitchId) -> Option<&SwitchConfig> {
        self.switches.iter().find(|s| s.id == id)
    }

    /// Check a configuration that was not built through `push`
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.switches.iter().enumerate() {
            if self.switches[..i].iter().any(|s| s.id == entry.id) {
                return Err(ConfigError::DuplicateSwitch(entry.id));
            }
        }
        Ok(())
    }
}
