//! Configuration types
//!
//! Board-agnostic switch configuration, supplied by the firmware before the
//! first poll.

pub mod switches;

pub use switches::*;
