//! Switch input implementations

pub mod gpio;

pub use gpio::GpioSwitchBank;
