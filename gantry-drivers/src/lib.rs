//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in gantry-core on top of `embedded-hal` 1.0 pins:
//!
//! - Switch pin bank (homing/limit switch inputs)
//! - Indicator LED

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod switch;
