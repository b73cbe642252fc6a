//! Motion-cycle state access

use crate::switch::SwitchId;

/// Motion-cycle state as seen by the switch actions
///
/// The switch logic only ever raises requests. Clearing them is up to
/// whoever owns the motion cycle.
pub trait MotionCycle {
    /// Check if a homing cycle is in progress
    fn is_homing(&self) -> bool;

    /// Ask the planner to pause motion (feedhold)
    fn request_feedhold(&mut self, switch: SwitchId);

    /// Flag that a limit switch was struck (lockdown)
    fn trigger_limit(&mut self, switch: SwitchId);
}
