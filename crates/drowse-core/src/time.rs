#![forbid(unsafe_code)]

//! Wall-clock time of day.
//!
//! Only hour and minute are semantically meaningful for bedtime estimation;
//! there is no date component. Arithmetic wraps across midnight, so
//! subtracting 7.5 hours of sleep from a 07:00 wake time lands on 23:30 of
//! the (conceptual) previous day.
//!
//! # Example
//! ```
//! use drowse_core::time::{ClockFormat, TimeOfDay};
//!
//! let wake = TimeOfDay::new(7, 0).unwrap();
//! assert_eq!(wake.seconds_since_midnight(), 25_200);
//!
//! let bedtime = wake.minus_seconds(27_000.0);
//! assert_eq!(bedtime.format(ClockFormat::TwelveHour), "11:30 PM");
//! ```

use std::fmt;

use crate::error::InputError;

/// Seconds in a full day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Display style for a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockFormat {
    /// "11:30 PM", "12:05 AM"
    #[default]
    TwelveHour,
    /// "23:30", "00:05"
    TwentyFourHour,
}

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// The default wake time, 07:00.
    ///
    /// A frozen constant: it depends on nothing else in the system.
    pub const DEFAULT_WAKE: Self = Self { hour: 7, minute: 0 };

    /// Create a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InputError> {
        if hour > 23 {
            return Err(InputError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(InputError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// The hour component (0–23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute component (0–59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Elapsed seconds since midnight: `hour*3600 + minute*60`, exact.
    #[must_use]
    pub const fn seconds_since_midnight(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60
    }

    /// Build a time of day from seconds since midnight.
    ///
    /// Wraps modulo a day and floors to whole minutes (the display has
    /// minute precision; a sub-minute remainder is not representable).
    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds % 3600 / 60) as u8,
        }
    }

    /// Subtract a duration in seconds, wrapping across midnight.
    ///
    /// The amount is rounded to the nearest whole second before the
    /// subtraction; the result floors to minute precision.
    #[must_use]
    pub fn minus_seconds(&self, seconds: f64) -> Self {
        let wrapped = wrapped_sub(self.seconds_since_midnight(), seconds.round() as i64);
        Self::from_seconds(wrapped)
    }

    /// Shift by whole minutes, wrapping across midnight in both directions.
    #[must_use]
    pub fn add_minutes(&self, delta: i32) -> Self {
        let wrapped = wrapped_sub(self.seconds_since_midnight(), -i64::from(delta) * 60);
        Self::from_seconds(wrapped)
    }

    /// Shift by whole hours, wrapping across midnight in both directions.
    #[must_use]
    pub fn add_hours(&self, delta: i32) -> Self {
        self.add_minutes(delta.saturating_mul(60))
    }

    /// Render as a short time string.
    #[must_use]
    pub fn format(&self, format: ClockFormat) -> String {
        match format {
            ClockFormat::TwelveHour => {
                let half = if self.hour < 12 { "AM" } else { "PM" };
                let hour12 = match self.hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{hour12}:{:02} {half}", self.minute)
            }
            ClockFormat::TwentyFourHour => format!("{:02}:{:02}", self.hour, self.minute),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(ClockFormat::TwentyFourHour))
    }
}

/// Subtract `amount` seconds from a seconds-since-midnight value, wrapping
/// modulo a day. Exact for any `i64` amount.
#[must_use]
pub fn wrapped_sub(seconds_since_midnight: u32, amount: i64) -> u32 {
    // i128 keeps the subtraction total even at the i64 extremes.
    let wrapped = (i128::from(seconds_since_midnight) - i128::from(amount))
        .rem_euclid(i128::from(SECONDS_PER_DAY));
    // rem_euclid with a positive modulus is always in 0..SECONDS_PER_DAY
    wrapped as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_bounds() {
        assert!(TimeOfDay::new(0, 0).is_ok());
        assert!(TimeOfDay::new(23, 59).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(matches!(
            TimeOfDay::new(24, 0),
            Err(InputError::HourOutOfRange(24))
        ));
        assert!(matches!(
            TimeOfDay::new(7, 60),
            Err(InputError::MinuteOutOfRange(60))
        ));
    }

    #[test]
    fn default_wake_is_seven() {
        assert_eq!(TimeOfDay::DEFAULT_WAKE.hour(), 7);
        assert_eq!(TimeOfDay::DEFAULT_WAKE.minute(), 0);
    }

    #[test]
    fn seconds_conversion_exact() {
        assert_eq!(TimeOfDay::new(0, 0).unwrap().seconds_since_midnight(), 0);
        assert_eq!(
            TimeOfDay::new(7, 0).unwrap().seconds_since_midnight(),
            25_200
        );
        assert_eq!(
            TimeOfDay::new(23, 59).unwrap().seconds_since_midnight(),
            86_340
        );
    }

    #[test]
    fn from_seconds_round_trip() {
        for (hour, minute) in [(0u8, 0u8), (7, 0), (12, 30), (23, 59)] {
            let t = TimeOfDay::new(hour, minute).unwrap();
            assert_eq!(TimeOfDay::from_seconds(t.seconds_since_midnight()), t);
        }
    }

    #[test]
    fn from_seconds_floors_to_minute() {
        let t = TimeOfDay::from_seconds(25_259); // 07:00:59
        assert_eq!(t, TimeOfDay::new(7, 0).unwrap());
    }

    #[test]
    fn minus_seconds_wraps_across_midnight() {
        let wake = TimeOfDay::new(7, 0).unwrap();
        let bedtime = wake.minus_seconds(27_000.0); // 7.5 hours
        assert_eq!(bedtime, TimeOfDay::new(23, 30).unwrap());
    }

    #[test]
    fn minus_seconds_without_wrap() {
        let wake = TimeOfDay::new(12, 0).unwrap();
        assert_eq!(
            wake.minus_seconds(3_600.0),
            TimeOfDay::new(11, 0).unwrap()
        );
    }

    #[test]
    fn minus_zero_is_identity() {
        let wake = TimeOfDay::new(6, 45).unwrap();
        assert_eq!(wake.minus_seconds(0.0), wake);
    }

    #[test]
    fn minus_full_day_is_identity() {
        let wake = TimeOfDay::new(6, 45).unwrap();
        assert_eq!(wake.minus_seconds(f64::from(SECONDS_PER_DAY)), wake);
    }

    #[test]
    fn add_minutes_wraps_both_directions() {
        let t = TimeOfDay::new(23, 50).unwrap();
        assert_eq!(t.add_minutes(15), TimeOfDay::new(0, 5).unwrap());

        let t = TimeOfDay::new(0, 5).unwrap();
        assert_eq!(t.add_minutes(-15), TimeOfDay::new(23, 50).unwrap());
    }

    #[test]
    fn add_hours_wraps() {
        let t = TimeOfDay::new(23, 0).unwrap();
        assert_eq!(t.add_hours(2), TimeOfDay::new(1, 0).unwrap());
        assert_eq!(t.add_hours(-24), t);
    }

    #[test]
    fn wrapped_sub_exact() {
        assert_eq!(wrapped_sub(25_200, 27_000), 84_600); // 23:30
        assert_eq!(wrapped_sub(0, 1), 86_399);
        assert_eq!(wrapped_sub(86_399, -1), 0);
        assert_eq!(wrapped_sub(25_200, 0), 25_200);
    }

    // Formatting

    #[test]
    fn twelve_hour_afternoon() {
        let t = TimeOfDay::new(23, 30).unwrap();
        assert_eq!(t.format(ClockFormat::TwelveHour), "11:30 PM");
    }

    #[test]
    fn twelve_hour_morning() {
        let t = TimeOfDay::new(7, 5).unwrap();
        assert_eq!(t.format(ClockFormat::TwelveHour), "7:05 AM");
    }

    #[test]
    fn twelve_hour_midnight_and_noon() {
        assert_eq!(
            TimeOfDay::new(0, 0).unwrap().format(ClockFormat::TwelveHour),
            "12:00 AM"
        );
        assert_eq!(
            TimeOfDay::new(12, 0)
                .unwrap()
                .format(ClockFormat::TwelveHour),
            "12:00 PM"
        );
    }

    #[test]
    fn twenty_four_hour_pads() {
        let t = TimeOfDay::new(6, 5).unwrap();
        assert_eq!(t.format(ClockFormat::TwentyFourHour), "06:05");
        assert_eq!(t.to_string(), "06:05");
    }
}
