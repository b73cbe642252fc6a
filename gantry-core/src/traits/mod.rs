//! Hardware abstraction traits
//!
//! These traits define the interface between the switch logic and the
//! board: pin sampling, the indicator light, and the motion-cycle state
//! owned by the rest of the controller.

pub mod cycle;
pub mod io;

pub use cycle::MotionCycle;
pub use io::{Indicator, SwitchInputs};
