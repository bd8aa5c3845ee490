#![forbid(unsafe_code)]

//! The bedtime estimator.
//!
//! A single-shot pure transformation: convert the wake time to seconds
//! since midnight, ask the regression model for the predicted restorative
//! sleep, subtract it from the wake instant, and format the result. Model
//! failures never escape as errors; [`advise`] translates them into a fixed
//! failure advice the UI can show as-is.

use crate::error::ModelError;
use crate::inputs::{CoffeeIntake, SleepAmount};
use crate::model::SleepModel;
use crate::time::{ClockFormat, TimeOfDay};

/// Title shown with a successful estimate.
pub const SUCCESS_TITLE: &str = "Your ideal bedtime is…";
/// Title shown when the model fails.
pub const ERROR_TITLE: &str = "Error";
/// Fixed, non-diagnostic message shown when the model fails.
pub const ERROR_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

/// The alert payload handed back to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub title: String,
    pub message: String,
    /// Whether this advice reports a failure.
    pub is_error: bool,
}

impl Advice {
    /// Advice for a successful estimate.
    #[must_use]
    pub fn success(bedtime: TimeOfDay, clock: ClockFormat) -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            message: bedtime.format(clock),
            is_error: false,
        }
    }

    /// The fixed failure advice.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: ERROR_MESSAGE.to_string(),
            is_error: true,
        }
    }
}

/// Compute the ideal bedtime for the given inputs.
///
/// Returns the raw time of day; fails only if the model does.
pub fn estimate_bedtime(
    model: &SleepModel,
    wake: TimeOfDay,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
) -> Result<TimeOfDay, ModelError> {
    let wake_seconds = f64::from(wake.seconds_since_midnight());
    let prediction = model.predict(wake_seconds, sleep.hours(), f64::from(coffee.cups()))?;
    Ok(wake.minus_seconds(prediction.actual_sleep))
}

/// Run the estimator and translate the outcome into an [`Advice`].
///
/// This is the error boundary: a model failure becomes the fixed failure
/// advice, never an error value crossing into the UI.
#[must_use]
pub fn advise(
    model: &SleepModel,
    wake: TimeOfDay,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
    clock: ClockFormat,
) -> Advice {
    match estimate_bedtime(model, wake, sleep, coffee) {
        Ok(bedtime) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%bedtime, "estimated bedtime");
            Advice::success(bedtime, clock)
        }
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "bedtime estimation failed");
            Advice::failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> (TimeOfDay, SleepAmount, CoffeeIntake) {
        (
            TimeOfDay::new(7, 0).unwrap(),
            SleepAmount::new(8.0).unwrap(),
            CoffeeIntake::new(1).unwrap(),
        )
    }

    #[test]
    fn reference_scenario() {
        // Wake 07:00, 8 h desired, 1 cup; the bundled model predicts
        // 27000 s (7.5 h), so bedtime is 23:30 the previous day.
        let model = SleepModel::bundled().unwrap();
        let (wake, sleep, coffee) = inputs();

        let bedtime = estimate_bedtime(&model, wake, sleep, coffee).unwrap();
        assert_eq!(bedtime, TimeOfDay::new(23, 30).unwrap());

        let advice = advise(&model, wake, sleep, coffee, ClockFormat::TwelveHour);
        assert_eq!(advice.title, SUCCESS_TITLE);
        assert_eq!(advice.message, "11:30 PM");
        assert!(!advice.is_error);
    }

    #[test]
    fn twenty_four_hour_message() {
        let model = SleepModel::bundled().unwrap();
        let (wake, sleep, coffee) = inputs();
        let advice = advise(&model, wake, sleep, coffee, ClockFormat::TwentyFourHour);
        assert_eq!(advice.message, "23:30");
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let model = SleepModel::bundled().unwrap();
        let (wake, sleep, coffee) = inputs();
        let a = advise(&model, wake, sleep, coffee, ClockFormat::TwelveHour);
        let b = advise(&model, wake, sleep, coffee, ClockFormat::TwelveHour);
        assert_eq!(a, b);
    }

    #[test]
    fn model_failure_becomes_fixed_advice() {
        let json = r#"{
            "name": "broken",
            "intercept": -1000.0,
            "coefficients": { "wake": 0.0, "estimated_sleep": 0.0, "coffee": 0.0 }
        }"#;
        let model = SleepModel::from_json(json).unwrap();
        let (wake, sleep, coffee) = inputs();

        let advice = advise(&model, wake, sleep, coffee, ClockFormat::TwelveHour);
        assert_eq!(advice.title, ERROR_TITLE);
        assert_eq!(advice.message, ERROR_MESSAGE);
        assert!(advice.is_error);
    }

    #[test]
    fn failure_advice_constant() {
        let advice = Advice::failure();
        assert_eq!(advice.title, "Error");
        assert_eq!(
            advice.message,
            "Sorry, there was a problem calculating your bedtime."
        );
    }
}
