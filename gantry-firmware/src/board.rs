//! Board switch layout
//!
//! Raspberry Pi Pico wiring. Endstops are normally-open switches to ground
//! with the internal pull-up enabled:
//!
//! | Switch | GPIO |
//! |--------|------|
//! | X min  | 2    |
//! | X max  | 3    |
//! | Y min  | 4    |
//! | Y max  | 5    |
//! | Z min  | 6    |
//! | Z max  | 7    |
//! | LED    | 25   |

use defmt::*;

use gantry_core::config::{SwitchConfig, SwitchesConfig};
use gantry_core::switch::{Axis, Position, SwitchId, SwitchMode, WiringType};

/// Switch modes for the wired endstops
///
/// Min switches home the axis and double as limits; max switches are
/// limits only.
const SWITCHES: [SwitchConfig; 6] = [
    SwitchConfig::new(SwitchId::new(Axis::X, Position::Min), SwitchMode::HomingLimit),
    SwitchConfig::new(SwitchId::new(Axis::X, Position::Max), SwitchMode::Limit),
    SwitchConfig::new(SwitchId::new(Axis::Y, Position::Min), SwitchMode::HomingLimit),
    SwitchConfig::new(SwitchId::new(Axis::Y, Position::Max), SwitchMode::Limit),
    SwitchConfig::new(SwitchId::new(Axis::Z, Position::Min), SwitchMode::HomingLimit),
    SwitchConfig::new(SwitchId::new(Axis::Z, Position::Max), SwitchMode::Limit),
];

/// Build the switch configuration for this board
pub fn switch_config() -> SwitchesConfig {
    let mut config = SwitchesConfig::new(WiringType::NormallyOpen);
    for entry in SWITCHES {
        if let Err(e) = config.push(entry) {
            warn!("Skipping switch {}: {}", entry.id, e);
        }
    }
    config
}
