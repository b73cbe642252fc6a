//! Motion request flags

use super::cycle::CycleState;
use crate::switch::SwitchId;
use crate::traits::MotionCycle;

/// Cycle state plus the feedhold and limit requests raised by switches
///
/// Switch actions only set the requests, naming the switch that raised them.
/// The first switch to raise a request is kept until the controller consumes
/// it with [`MotionRequests::take_feedhold`] or releases the lockdown with
/// [`MotionRequests::release_limit`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionRequests {
    cycle_state: CycleState,
    feedhold: Option<SwitchId>,
    limit: Option<SwitchId>,
}

impl MotionRequests {
    pub const fn new() -> Self {
        Self {
            cycle_state: CycleState::Off,
            feedhold: None,
            limit: None,
        }
    }

    pub fn cycle_state(&self) -> CycleState {
        self.cycle_state
    }

    pub fn set_cycle_state(&mut self, state: CycleState) {
        self.cycle_state = state;
    }

    /// Enter a homing cycle
    ///
    /// Refused while a limit lockdown is latched.
    pub fn start_homing(&mut self) -> bool {
        if self.limit.is_some() {
            return false;
        }
        self.cycle_state = CycleState::Homing;
        true
    }

    /// End a homing cycle, leaving the machine idle
    pub fn finish_homing(&mut self) -> bool {
        if !self.cycle_state.is_homing() {
            return false;
        }
        self.cycle_state = CycleState::Off;
        true
    }

    pub fn feedhold_requested(&self) -> bool {
        self.feedhold.is_some()
    }

    /// Switch that raised the pending feedhold
    pub fn feedhold_switch(&self) -> Option<SwitchId> {
        self.feedhold
    }

    /// Consume a pending feedhold request
    pub fn take_feedhold(&mut self) -> Option<SwitchId> {
        self.feedhold.take()
    }

    pub fn limit_triggered(&self) -> bool {
        self.limit.is_some()
    }

    /// Switch that tripped the lockdown
    pub fn limit_switch(&self) -> Option<SwitchId> {
        self.limit
    }

    /// Enter lockdown: the cycle stops and the limit stays latched
    pub fn lock_down(&mut self) {
        self.cycle_state = CycleState::Off;
    }

    /// Release a limit lockdown once no limit switch is still closed
    ///
    /// Returns the switch that had tripped it.
    pub fn release_limit(&mut self, limit_thrown: bool) -> Option<SwitchId> {
        if limit_thrown {
            return None;
        }
        self.clear_limit()
    }

    /// Release a limit lockdown unconditionally
    pub fn clear_limit(&mut self) -> Option<SwitchId> {
        self.limit.take()
    }
}

impl MotionCycle for MotionRequests {
    fn is_homing(&self) -> bool {
        self.cycle_state.is_homing()
    }

    fn request_feedhold(&mut self, switch: SwitchId) {
        self.feedhold.get_or_insert(switch);
    }

    fn trigger_limit(&mut self, switch: SwitchId) {
        self.limit.get_or_insert(switch);
    }
}
