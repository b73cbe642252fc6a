//! Homing and limit switches
//!
//! Polarity correction, lockout debounce, edge detection, and per-switch
//! action dispatch for the axis switch table.

pub mod action;
pub mod record;
pub mod registry;
pub mod types;

pub use action::{escalate, ActionContext, ActionFn, ActionSlot, SwitchAction};
pub use record::Switch;
pub use registry::Switches;
pub use types::{
    Axis, Edge, Position, SwitchError, SwitchId, SwitchMode, SwitchState, Tick, WiringType,
    AXES, DEFAULT_LOCKOUT_TICKS, POSITIONS, SWITCH_COUNT,
};
