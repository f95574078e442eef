//! Default time/date/battery watchface

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_10X20, MonoTextStyleBuilder},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Alignment, Text},
};
use profont::PROFONT_24_POINT;

use super::WatchFace;
use crate::battery::BatteryInfo;
use crate::clock::{HourFormat, TimeSnapshot};
use crate::event::Event;
use crate::text::TextField;

/// Capacity of the time field ("HH:MM").
pub const TIME_FIELD_LEN: usize = 8;
/// Capacity of the date field ("Www DD Mon").
pub const DATE_FIELD_LEN: usize = 16;
/// Capacity of the battery field ("Charging" at most).
pub const BATTERY_FIELD_LEN: usize = 12;

/// Appearance and layout settings, fixed at construction.
pub struct FaceConfig {
    /// Hour convention for the time field.
    pub hour_format: HourFormat,
    /// Screen width in pixels.
    pub width: u16,
    /// Screen height in pixels.
    pub height: u16,
    /// Inset of the battery status from the screen edges.
    pub margin: u16,
    /// Background fill color.
    pub background: Rgb565,
    /// Time and date text color.
    pub text_color: Rgb565,
    /// Battery status text color.
    pub battery_color: Rgb565,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            hour_format: HourFormat::H24,
            width: 240,
            height: 240,
            margin: 20,
            background: Rgb565::BLACK,
            text_color: Rgb565::WHITE,
            battery_color: Rgb565::BLUE,
        }
    }
}

/// Watchface context: the three owned display fields plus configuration.
///
/// Fields are overwritten in place on every refresh; borrows returned by the
/// accessors stay valid until the next refresh.
pub struct Watchface {
    config: FaceConfig,
    time_field: TextField<TIME_FIELD_LEN>,
    date_field: TextField<DATE_FIELD_LEN>,
    battery_field: TextField<BATTERY_FIELD_LEN>,
}

impl Watchface {
    /// Create a face with empty display fields.
    pub fn new(config: FaceConfig) -> Self {
        Self {
            config,
            time_field: TextField::new(),
            date_field: TextField::new(),
            battery_field: TextField::new(),
        }
    }

    /// Write the current time into the time field.
    ///
    /// 24-hour mode zero-pads the hour; 12-hour mode maps 0→12 and 13→1 and
    /// prints the hour without a leading zero. Neither mode appends an
    /// AM/PM suffix.
    pub fn update_time(&mut self, time: &TimeSnapshot) {
        match self.config.hour_format {
            HourFormat::H24 => self
                .time_field
                .format_into(format_args!("{:02}:{:02}", time.hour, time.minute)),
            HourFormat::H12 => self.time_field.format_into(format_args!(
                "{}:{:02}",
                HourFormat::H12.display_hour(time.hour),
                time.minute
            )),
        }
    }

    /// Write the current date into the date field as "Www DD Mon".
    pub fn update_date(&mut self, time: &TimeSnapshot) {
        self.date_field.format_into(format_args!(
            "{} {:02} {}",
            time.weekday,
            time.day,
            month_abbrev(time.month0)
        ));
    }

    /// Write the battery status into the battery field.
    ///
    /// A charging battery always reads "Charging", whatever the percentage.
    pub fn update_battery(&mut self, battery: &BatteryInfo) {
        if battery.charging {
            self.battery_field.format_into(format_args!("Charging"));
        } else {
            self.battery_field
                .format_into(format_args!("{}%", battery.percent));
        }
    }

    /// Current time string.
    pub fn time_text(&self) -> &str {
        self.time_field.as_str()
    }

    /// Current date string.
    pub fn date_text(&self) -> &str {
        self.date_field.as_str()
    }

    /// Current battery status string.
    pub fn battery_text(&self) -> &str {
        self.battery_field.as_str()
    }

    /// Face configuration.
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }
}

impl WatchFace for Watchface {
    fn refresh(&mut self, time: &TimeSnapshot, battery: &BatteryInfo) {
        self.update_time(time);
        self.update_date(time);
        self.update_battery(battery);
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Minute(time) => {
                self.update_time(time);
                self.update_date(time);
            }
            Event::Battery(battery) => self.update_battery(battery),
        }
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let time_style = MonoTextStyleBuilder::new()
            .font(&PROFONT_24_POINT)
            .text_color(self.config.text_color)
            .background_color(self.config.background)
            .build();
        let date_style = MonoTextStyleBuilder::new()
            .font(&FONT_10X20)
            .text_color(self.config.text_color)
            .background_color(self.config.background)
            .build();
        let battery_style = MonoTextStyleBuilder::new()
            .font(&FONT_10X20)
            .text_color(self.config.battery_color)
            .background_color(self.config.background)
            .build();

        target.clear(self.config.background)?;

        let center_x = self.config.width as i32 / 2;

        // Time in the center
        Text::with_alignment(
            self.time_text(),
            Point::new(center_x, self.config.height as i32 / 2 + 10),
            time_style,
            Alignment::Center,
        )
        .draw(target)?;

        // Date below the time
        Text::with_alignment(
            self.date_text(),
            Point::new(center_x, self.config.height as i32 * 3 / 4),
            date_style,
            Alignment::Center,
        )
        .draw(target)?;

        // Battery status in the top right corner
        Text::with_alignment(
            self.battery_text(),
            Point::new(
                (self.config.width - self.config.margin) as i32,
                self.config.margin as i32,
            ),
            battery_style,
            Alignment::Right,
        )
        .draw(target)?;

        Ok(())
    }
}

fn month_abbrev(month0: u8) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        11 => "Dec",
        _ => "",
    }
}
