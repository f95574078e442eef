//! Refresh events delivered to the watchface.

use crate::battery::BatteryInfo;
use crate::clock::TimeSnapshot;

/// One refresh trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Once-per-minute tick carrying a fresh time snapshot.
    Minute(TimeSnapshot),
    /// Battery-state change notification.
    Battery(BatteryInfo),
}

/// Abstract source of refresh events.
///
/// The run loop awaits events from whatever the host wires up; tests skip
/// the source entirely and feed the face synthetic snapshots.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    /// Wait for the next event.
    async fn next(&mut self) -> Event;
}
