//! Board-agnostic switch logic for the motion controller firmware
//!
//! This crate contains everything about homing and limit switches that
//! does not depend on specific hardware:
//!
//! - Switch registry (axis × min/max table)
//! - Polarity correction, lockout debounce and edge detection
//! - Feedhold / limit escalation on switch closure
//! - Motion-cycle request flags
//! - Switch configuration types
//! - Hardware abstraction traits (pin sampling, indicator)

#![no_std]
#![deny(unsafe_code)]

// proptest assertions expand to `format!`
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod state;
pub mod switch;
pub mod traits;
