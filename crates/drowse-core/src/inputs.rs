#![forbid(unsafe_code)]

//! Bounded user inputs.
//!
//! Validation lives here, at the input layer: the estimator assumes values
//! it receives are already in range. The stepper methods clamp at the
//! bounds instead of failing, which is what the UI wants.

use std::fmt;

use crate::error::InputError;

/// Desired hours of sleep per night, in `4.0..=12.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SleepAmount(f64);

impl SleepAmount {
    /// Minimum accepted hours.
    pub const MIN: f64 = 4.0;
    /// Maximum accepted hours.
    pub const MAX: f64 = 12.0;
    /// Stepper granularity in hours.
    pub const STEP: f64 = 0.25;

    /// Create a sleep amount, rejecting non-finite or out-of-range values.
    pub fn new(hours: f64) -> Result<Self, InputError> {
        if !hours.is_finite() || !(Self::MIN..=Self::MAX).contains(&hours) {
            return Err(InputError::SleepAmountOutOfRange(hours));
        }
        Ok(Self(hours))
    }

    /// The value in hours.
    #[must_use]
    pub const fn hours(self) -> f64 {
        self.0
    }

    /// One step up, clamped at [`Self::MAX`].
    #[must_use]
    pub fn increment(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// One step down, clamped at [`Self::MIN`].
    #[must_use]
    pub fn decrement(self) -> Self {
        Self((self.0 - Self::STEP).max(Self::MIN))
    }

    /// Human-readable label, e.g. "8 hours" or "7.25 hours".
    #[must_use]
    pub fn label(self) -> String {
        format!("{self} hours")
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(8.0)
    }
}

impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display already prints the shortest form: 8, 7.25, 11.5
        write!(f, "{}", self.0)
    }
}

/// Daily cups of coffee, in `1..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoffeeIntake(u8);

impl CoffeeIntake {
    /// Minimum accepted cups.
    pub const MIN: u8 = 1;
    /// Maximum accepted cups.
    pub const MAX: u8 = 20;

    /// Create a coffee intake, rejecting out-of-range values.
    pub fn new(cups: u8) -> Result<Self, InputError> {
        if !(Self::MIN..=Self::MAX).contains(&cups) {
            return Err(InputError::CoffeeOutOfRange(cups));
        }
        Ok(Self(cups))
    }

    /// The value in cups.
    #[must_use]
    pub const fn cups(self) -> u8 {
        self.0
    }

    /// One cup more, clamped at [`Self::MAX`].
    #[must_use]
    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// One cup fewer, clamped at [`Self::MIN`].
    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// Human-readable label: "1 cup", "2 cups".
    #[must_use]
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

impl Default for CoffeeIntake {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for CoffeeIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
