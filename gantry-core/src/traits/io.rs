//! Switch input and indicator traits

use crate::switch::SwitchId;

/// Raw pin sampling for the switch table
///
/// Implementations read the electrical level of the pin wired to each
/// switch slot. No debouncing is expected here.
pub trait SwitchInputs {
    /// Sample the pin for `id`
    ///
    /// Returns `true` when the pin reads high, which means the circuit is
    /// physically open. Slots with no pin attached should read high.
    fn is_high(&mut self, id: SwitchId) -> bool;
}

/// Indicator light toggled on switch activity
pub trait Indicator {
    /// Flip the indicator state
    fn toggle(&mut self);
}
