//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod switches;

pub use controller::controller_task;
pub use switches::switch_task;
