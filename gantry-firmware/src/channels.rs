//! Inter-task communication
//!
//! Shared motion-cycle state and the signals raised by the switch task.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use gantry_core::state::MotionRequests;
use gantry_core::switch::SwitchId;

/// Motion-cycle state shared by the switch and controller tasks
///
/// Switch actions only raise requests. The controller owns the cycle state
/// and consumes feedholds; the switch task releases a lockdown once every
/// limit switch has opened again, since only it sees the switch table.
pub static MOTION: Mutex<CriticalSectionRawMutex, RefCell<MotionRequests>> =
    Mutex::new(RefCell::new(MotionRequests::new()));

/// Feedhold requested (value is the switch that caused it)
pub static FEEDHOLD: Signal<CriticalSectionRawMutex, SwitchId> = Signal::new();

/// Limit switch tripped (value is the switch that caused it)
pub static LIMIT: Signal<CriticalSectionRawMutex, SwitchId> = Signal::new();

/// Lockdown released (value is the switch that had tripped it)
pub static LIMIT_RELEASED: Signal<CriticalSectionRawMutex, SwitchId> = Signal::new();
