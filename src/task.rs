//! Embassy integration layer: clock source, event wiring, face run loop.
//!
//! Everything here sits behind the `task` cargo feature so the formatting
//! core stays free of executor dependencies.

use chrono::NaiveDateTime;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::battery::BatteryInfo;
use crate::clock::TimeSnapshot;
use crate::event::{Event, EventSource};
use crate::ui::WatchFace;

/// Wall-clock source anchored to the monotonic timer.
pub struct Clock {
    /// Wall time at the anchor instant.
    reference: NaiveDateTime,
    /// Monotonic anchor.
    anchor: Instant,
}

impl Clock {
    /// Anchor the clock to a known wall time.
    pub fn new(reference: NaiveDateTime) -> Self {
        Self {
            reference,
            anchor: Instant::now(),
        }
    }

    /// Re-anchor the clock, e.g. after a time sync from the host.
    pub fn set(&mut self, reference: NaiveDateTime) {
        self.reference = reference;
        self.anchor = Instant::now();
    }

    /// Current wall time.
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.anchor);
        self.reference + chrono::Duration::seconds(elapsed.as_secs() as i64)
    }
}

/// Event source marrying minute rollovers with battery-change signals.
///
/// Polls once per second: a pending battery signal wins, otherwise a minute
/// rollover emits a tick carrying a fresh time snapshot. The first call
/// always yields a minute event so the face starts with real time on it.
pub struct SignalEvents<'a, M: RawMutex> {
    clock: Clock,
    poll: Ticker,
    battery: &'a Signal<M, BatteryInfo>,
    last_minute: Option<(u8, u8)>,
}

impl<'a, M: RawMutex> SignalEvents<'a, M> {
    /// Wire the clock and the battery-change signal together.
    pub fn new(clock: Clock, battery: &'a Signal<M, BatteryInfo>) -> Self {
        Self {
            clock,
            poll: Ticker::every(Duration::from_secs(1)),
            battery,
            last_minute: None,
        }
    }

    /// Re-anchor the wall clock.
    pub fn set_time(&mut self, reference: NaiveDateTime) {
        self.clock.set(reference);
    }
}

impl<M: RawMutex> EventSource for SignalEvents<'_, M> {
    async fn next(&mut self) -> Event {
        loop {
            if self.battery.signaled() {
                return Event::Battery(self.battery.wait().await);
            }

            let snapshot = TimeSnapshot::from_datetime(&self.clock.now());
            let minute = (snapshot.hour, snapshot.minute);
            if self.last_minute != Some(minute) {
                self.last_minute = Some(minute);
                return Event::Minute(snapshot);
            }

            self.poll.next().await;
        }
    }
}

/// Watchface run loop: initial refresh, then handle and draw every event.
///
/// This is a regular `async fn`, not an Embassy `#[task]` — callers wrap it
/// in a thin concrete task, since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn face_task(
///     face: Watchface,
///     events: SignalEvents<'static, ThreadModeRawMutex>,
///     display: LcdTarget,
///     startup_time: TimeSnapshot,
///     startup_battery: BatteryInfo,
/// ) {
///     watchface_task(face, events, display, startup_time, startup_battery).await;
/// }
/// ```
pub async fn watchface_task<F, S, D>(
    mut face: F,
    mut events: S,
    mut target: D,
    startup_time: TimeSnapshot,
    startup_battery: BatteryInfo,
) where
    F: WatchFace,
    S: EventSource,
    D: DrawTarget<Color = Rgb565>,
{
    face.refresh(&startup_time, &startup_battery);
    if let Err(_e) = face.draw(&mut target) {
        #[cfg(feature = "defmt")]
        defmt::error!("Draw failed");
    }

    loop {
        let event = events.next().await;
        log_event(&event);

        face.handle_event(&event);
        if let Err(_e) = face.draw(&mut target) {
            #[cfg(feature = "defmt")]
            defmt::error!("Draw failed");
        }
    }
}

fn log_event(_event: &Event) {
    #[cfg(feature = "defmt")]
    match _event {
        Event::Minute(time) => defmt::info!("Time updated: {}:{}", time.hour, time.minute),
        Event::Battery(battery) => defmt::info!(
            "Battery status: {} ({})",
            battery.percent,
            if battery.charging {
                "charging"
            } else {
                "discharging"
            }
        ),
    }
}
