//! UI definitions module

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::battery::BatteryInfo;
use crate::clock::TimeSnapshot;
use crate::event::Event;

mod watchface;

pub use watchface::{FaceConfig, Watchface};

/// A watchface screen.
pub trait WatchFace {
    /// Reformat every display string from fresh snapshots.
    ///
    /// Called once at startup so the face never shows placeholder text.
    fn refresh(&mut self, time: &TimeSnapshot, battery: &BatteryInfo);

    /// Apply one refresh event to the display strings.
    fn handle_event(&mut self, event: &Event);

    /// Draw the face onto the rendering surface.
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}
