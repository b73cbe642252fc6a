//! Motion controller task
//!
//! Owns the motion-cycle state. Starts a homing cycle at boot and after a
//! lockdown is released. A feedhold is consumed and ends homing; a limit
//! ends the current cycle and leaves the machine locked down until every
//! limit switch has opened again.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use crate::channels::{FEEDHOLD, LIMIT, LIMIT_RELEASED, MOTION};

/// Controller task
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    start_homing();

    loop {
        match select3(FEEDHOLD.wait(), LIMIT.wait(), LIMIT_RELEASED.wait()).await {
            Either3::First(_) => {
                let (taken, homed) = MOTION.lock(|motion| {
                    let mut motion = motion.borrow_mut();
                    let taken = motion.take_feedhold();
                    (taken, taken.is_some() && motion.finish_homing())
                });
                if let Some(switch) = taken {
                    warn!("Feedhold requested by switch {}", switch);
                }
                if homed {
                    info!("Homing cycle complete");
                }
            }
            Either3::Second(switch) => {
                error!("Limit switch {} tripped - machine locked down", switch);
                MOTION.lock(|motion| motion.borrow_mut().lock_down());
            }
            Either3::Third(switch) => {
                info!("Limit switch {} released - lockdown cleared", switch);
                start_homing();
            }
        }
    }
}

fn start_homing() {
    if MOTION.lock(|motion| motion.borrow_mut().start_homing()) {
        info!("Homing cycle started");
    } else {
        warn!("Homing refused - limit lockdown active");
    }
}
