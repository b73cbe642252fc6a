//! Gantry - Motion Controller Switch Monitor
//!
//! Firmware binary for RP2040-based motion controllers. Polls the homing
//! and limit switches, debounces them, and raises feedhold / limit
//! lockdown requests for the motion controller.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use gantry_core::switch::{Axis, Position, SwitchId};
use gantry_drivers::indicator::LedIndicator;
use gantry_drivers::switch::GpioSwitchBank;

mod board;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Gantry firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Endstop inputs; pin assignments are board-specific (see board.rs)
    let bank = GpioSwitchBank::new()
        .with(SwitchId::new(Axis::X, Position::Min), Input::new(p.PIN_2, Pull::Up))
        .with(SwitchId::new(Axis::X, Position::Max), Input::new(p.PIN_3, Pull::Up))
        .with(SwitchId::new(Axis::Y, Position::Min), Input::new(p.PIN_4, Pull::Up))
        .with(SwitchId::new(Axis::Y, Position::Max), Input::new(p.PIN_5, Pull::Up))
        .with(SwitchId::new(Axis::Z, Position::Min), Input::new(p.PIN_6, Pull::Up))
        .with(SwitchId::new(Axis::Z, Position::Max), Input::new(p.PIN_7, Pull::Up));

    // On-board LED as the switch activity indicator
    let led = LedIndicator::new_active_high(Output::new(p.PIN_25, Level::Low));

    let config = board::switch_config();
    info!("Switch configuration: {}", config);

    info!("Switch inputs initialized");

    // Spawn tasks
    spawner.spawn(tasks::controller_task()).unwrap();
    spawner.spawn(tasks::switch_task(bank, led, config)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
