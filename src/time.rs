//! Wall-clock time as seen by the clock face.
//!
//! Local system time is used as-is; there is no timezone conversion.

use chrono::{Local, Timelike};

/// Hour, minute and second of the local day.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl ClockTime {
    /// Build a time, wrapping out-of-range fields (25 h becomes 1 h).
    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Read hour/minute/second from any chrono time value.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }

    /// Current local time from the system clock.
    pub fn now() -> Self { Self::from_timelike(&Local::now()) }

    /// Hour on a 12-hour dial (0-11).
    #[inline]
    pub const fn hour12(self) -> u8 { self.hour % 12 }

    /// Hour on a 12-hour dial including the minute fraction (e.g. 3:30 -> 3.5).
    #[inline]
    pub fn fractional_hour(self) -> f32 { f32::from(self.hour12()) + f32::from(self.minute) / 60.0 }
}
