//! Switch polling task
//!
//! Polls every homing/limit switch on a fixed cadence and forwards the
//! resulting feedhold/limit requests to the controller.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant, Ticker};

use gantry_core::config::SwitchesConfig;
use gantry_core::switch::{ActionContext, Switches};
use gantry_drivers::indicator::LedIndicator;
use gantry_drivers::switch::GpioSwitchBank;

use crate::channels::{FEEDHOLD, LIMIT, LIMIT_RELEASED, MOTION};

/// Poll interval in milliseconds (one tick = 1 ms)
pub const SWITCH_POLL_INTERVAL_MS: u64 = 1;

/// Switch task - runs the switch poll every tick
#[embassy_executor::task]
pub async fn switch_task(
    mut bank: GpioSwitchBank<Input<'static>>,
    mut led: LedIndicator<Output<'static>>,
    config: SwitchesConfig,
) {
    info!("Switch task started");

    let mut switches = Switches::new();
    match switches.configure(&config) {
        Ok(()) => info!(
            "{} switches enabled, lockout {} ms",
            config.switches.len(),
            config.lockout_ticks
        ),
        Err(e) => error!("Switch config rejected: {} - all switches disabled", e),
    }

    let mut ticker = Ticker::every(Duration::from_millis(SWITCH_POLL_INTERVAL_MS));
    let mut limit_reported = false;

    loop {
        ticker.next().await;

        let now = Instant::now().as_millis();

        let (feedhold, limit, released) = MOTION.lock(|motion| {
            let mut motion = motion.borrow_mut();
            let mut ctx = ActionContext::new(&mut *motion, &mut led);
            switches.poll(&mut bank, now, &mut ctx);

            // Same critical section, so a switch closing again can't slip
            // between the check and the release
            let released = if limit_reported {
                motion.release_limit(switches.limit_thrown())
            } else {
                None
            };
            (motion.feedhold_switch(), motion.limit_switch(), released)
        });

        if let Some(switch) = feedhold {
            FEEDHOLD.signal(switch);
        }

        if let Some(switch) = released {
            limit_reported = false;
            LIMIT_RELEASED.signal(switch);
        }

        // Limit stays latched until released; report once
        if let Some(switch) = limit {
            if !limit_reported {
                limit_reported = true;
                LIMIT.signal(switch);
            }
        }
    }
}
