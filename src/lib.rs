//! Watchface core for a wrist-worn device: time, date and battery display
//! strings, refreshed once per minute and on battery-state change.
//!
//! The formatting core is executor-free `no_std`. Enable the `task` feature
//! for the Embassy-based clock source, event wiring and run loop.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod battery;
pub mod clock;
pub mod event;
#[cfg(feature = "task")]
pub mod task;
pub mod text;
pub mod ui;

pub use battery::BatteryInfo;
pub use clock::{HourFormat, TimeSnapshot};
pub use event::{Event, EventSource};
pub use ui::{FaceConfig, WatchFace, Watchface};
