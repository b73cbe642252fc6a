//! Indicator implementations

pub mod led;

pub use led::LedIndicator;
