//! Switch actions
//!
//! Each switch carries four action slots. An action is either one of the
//! built-in kinds or a plain function bound at configuration time.

use core::fmt;

use super::record::Switch;
use crate::traits::{Indicator, MotionCycle};

/// Function signature for custom switch actions
pub type ActionFn = fn(&Switch, &mut ActionContext<'_>);

/// External state an action may touch
pub struct ActionContext<'a> {
    /// Motion-cycle flags
    pub cycle: &'a mut dyn MotionCycle,
    /// Indicator light
    pub indicator: &'a mut dyn Indicator,
}

impl<'a> ActionContext<'a> {
    /// Bundle the motion cycle and indicator for one poll
    pub fn new(cycle: &'a mut dyn MotionCycle, indicator: &'a mut dyn Indicator) -> Self {
        Self { cycle, indicator }
    }
}

/// Action slot on a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionSlot {
    /// Every poll while settled open
    OpenSteady,
    /// Every poll while settled closed
    ClosedSteady,
    /// Once on open to closed
    LeadingEdge,
    /// Once on closed to open
    TrailingEdge,
}

/// Action bound to a switch slot
#[derive(Clone, Copy, Default)]
pub enum SwitchAction {
    /// Do nothing
    #[default]
    NoAction,
    /// Toggle the indicator and escalate to feedhold or limit lockdown
    Feedhold,
    /// Call a custom function
    Call(ActionFn),
}

impl SwitchAction {
    /// Run the action for `switch`
    pub fn invoke(self, switch: &Switch, ctx: &mut ActionContext<'_>) {
        match self {
            SwitchAction::NoAction => {}
            SwitchAction::Feedhold => escalate(switch, ctx),
            SwitchAction::Call(f) => f(switch, ctx),
        }
    }

    /// Check if this is the no-op action
    pub fn is_no_action(&self) -> bool {
        matches!(self, SwitchAction::NoAction)
    }

    /// Check if this is the built-in escalation action
    pub fn is_feedhold(&self) -> bool {
        matches!(self, SwitchAction::Feedhold)
    }
}

impl fmt::Debug for SwitchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchAction::NoAction => f.write_str("NoAction"),
            SwitchAction::Feedhold => f.write_str("Feedhold"),
            SwitchAction::Call(_) => f.write_str("Call(..)"),
        }
    }
}

/// Escalate a switch closure to the motion system
///
/// While homing, any switch contact requests a feedhold regardless of the
/// switch mode. Outside homing only limit switches trigger a lockdown.
pub fn escalate(switch: &Switch, ctx: &mut ActionContext<'_>) {
    ctx.indicator.toggle();

    if ctx.cycle.is_homing() {
        #[cfg(feature = "defmt")]
        defmt::warn!("Switch {} hit while homing, requesting feedhold", switch.id());
        ctx.cycle.request_feedhold(switch.id());
    } else if switch.mode().has_limit() {
        #[cfg(feature = "defmt")]
        defmt::warn!("Limit switch {} tripped", switch.id());
        ctx.cycle.trigger_limit(switch.id());
    }
}
