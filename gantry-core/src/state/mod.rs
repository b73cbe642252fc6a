//! Motion-cycle state
//!
//! Holder for the cycle state and the sticky request flags written by the
//! switch actions.

pub mod cycle;
pub mod requests;

pub use cycle::CycleState;
pub use requests::MotionRequests;
