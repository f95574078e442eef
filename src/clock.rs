//! Calendar-time snapshots for the watchface.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Hour convention used by the time field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// Zero-padded 0–23 hours.
    H24,
    /// 1–12 hours, no leading zero and no AM/PM suffix.
    H12,
}

impl HourFormat {
    /// Hour value as shown on the face.
    ///
    /// In 12-hour mode 0 maps to 12 and 13 to 1.
    pub fn display_hour(self, hour: u8) -> u8 {
        match self {
            HourFormat::H24 => hour,
            HourFormat::H12 => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// Point-in-time capture of the calendar fields the face displays.
///
/// Read once from the host clock, formatted without re-querying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSnapshot {
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Minute of hour, 0–59.
    pub minute: u8,
    /// Day of the week.
    pub weekday: Weekday,
    /// Day of the month, 1–31.
    pub day: u8,
    /// Zero-based month index, 0–11.
    pub month0: u8,
}

impl TimeSnapshot {
    /// Capture the displayed fields from a full timestamp.
    pub fn from_datetime(time: &NaiveDateTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            weekday: time.weekday(),
            day: time.day() as u8,
            month0: time.month0() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn snapshot_captures_calendar_fields() {
        let time = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(14, 5, 33)
            .unwrap();
        let snapshot = TimeSnapshot::from_datetime(&time);
        assert_eq!(snapshot.hour, 14);
        assert_eq!(snapshot.minute, 5);
        assert_eq!(snapshot.weekday, Weekday::Mon);
        assert_eq!(snapshot.day, 5);
        assert_eq!(snapshot.month0, 0);
    }

    #[test]
    fn display_hour_24h_is_identity() {
        for hour in 0..24 {
            assert_eq!(HourFormat::H24.display_hour(hour), hour);
        }
    }

    #[test]
    fn display_hour_12h_wraps_midnight_and_noon() {
        assert_eq!(HourFormat::H12.display_hour(0), 12);
        assert_eq!(HourFormat::H12.display_hour(1), 1);
        assert_eq!(HourFormat::H12.display_hour(11), 11);
        assert_eq!(HourFormat::H12.display_hour(12), 12);
        assert_eq!(HourFormat::H12.display_hour(13), 1);
        assert_eq!(HourFormat::H12.display_hour(23), 11);
    }
}
