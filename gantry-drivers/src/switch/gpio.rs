//! GPIO switch inputs
//!
//! Maps switch slots to `embedded-hal` input pins. Switches are expected to
//! be wired with a pull-up, so a released normally-open switch reads high.

use embedded_hal::digital::InputPin;
use gantry_core::switch::{SwitchId, AXES, POSITIONS, SWITCH_COUNT};
use gantry_core::traits::SwitchInputs;

/// Bank of switch input pins
///
/// Slots without a pin read high (physically open). If a pin read fails,
/// the last good level for that slot is repeated so the switch logic never
/// sees an invalid sample.
pub struct GpioSwitchBank<P> {
    pins: [[Option<P>; POSITIONS]; AXES],
    /// Last good level per switch number
    last_high: [bool; SWITCH_COUNT],
}

impl<P: InputPin> Default for GpioSwitchBank<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin> GpioSwitchBank<P> {
    /// Create a bank with no pins attached
    pub fn new() -> Self {
        Self {
            pins: core::array::from_fn(|_| core::array::from_fn(|_| None)),
            last_high: [true; SWITCH_COUNT],
        }
    }

    /// Attach a pin to a switch slot
    ///
    /// Returns the pin previously attached to the slot, if any.
    pub fn attach(&mut self, id: SwitchId, pin: P) -> Option<P> {
        self.slot(id).replace(pin)
    }

    /// Builder form of [`GpioSwitchBank::attach`]
    pub fn with(mut self, id: SwitchId, pin: P) -> Self {
        self.attach(id, pin);
        self
    }

    /// Remove the pin from a switch slot
    pub fn detach(&mut self, id: SwitchId) -> Option<P> {
        self.last_high[id.number() as usize] = true;
        self.slot(id).take()
    }

    /// Check if a pin is attached to a slot
    pub fn is_attached(&self, id: SwitchId) -> bool {
        self.pins[id.axis.index()][id.position.index()].is_some()
    }

    fn slot(&mut self, id: SwitchId) -> &mut Option<P> {
        &mut self.pins[id.axis.index()][id.position.index()]
    }
}

impl<P: InputPin> SwitchInputs for GpioSwitchBank<P> {
    fn is_high(&mut self, id: SwitchId) -> bool {
        let index = id.number() as usize;
        let Some(pin) = self.pins[id.axis.index()][id.position.index()].as_mut() else {
            return true;
        };

        match pin.is_high() {
            Ok(high) => {
                self.last_high[index] = high;
                high
            }
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Pin read failed for switch {}, holding last level", id);
                self.last_high[index]
            }
        }
    }
}
