#![forbid(unsafe_code)]

//! Error model for the estimation core.
//!
//! Two failure domains exist: the input layer rejects out-of-range values at
//! construction, and the regression model can fail to produce a prediction.
//! Model failures never cross the estimator boundary as errors — the
//! estimator translates them into a fixed failure advice — but they stay
//! typed up to that point so tests and logging can see what went wrong.

use std::fmt;

/// Input-layer validation errors.
///
/// Raised only by the bounded constructors in [`crate::inputs`] and
/// [`crate::time`]; the estimator itself assumes validated values.
#[derive(Debug)]
pub enum InputError {
    /// Hour outside `0..=23`.
    HourOutOfRange(u8),
    /// Minute outside `0..=59`.
    MinuteOutOfRange(u8),
    /// Desired sleep outside `4.0..=12.0` hours (or not finite).
    SleepAmountOutOfRange(f64),
    /// Coffee intake outside `1..=20` cups.
    CoffeeOutOfRange(u8),
}

/// Regression model errors.
#[derive(Debug)]
pub enum ModelError {
    /// The model artifact could not be parsed.
    Artifact(serde_json::Error),
    /// An input feature was NaN or infinite.
    NonFiniteInput { feature: &'static str, value: f64 },
    /// The model produced a sleep duration that is not a plausible amount
    /// of sleep (non-finite, non-positive, or longer than a day).
    ImplausiblePrediction(f64),
}

/// Unified error type for the crate.
#[derive(Debug)]
pub enum Error {
    /// Input-layer validation failure.
    Input(InputError),
    /// Regression model failure.
    Model(ModelError),
}

/// Standard result type for drowse-core APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HourOutOfRange(hour) => write!(f, "hour out of range: {hour}"),
            Self::MinuteOutOfRange(minute) => write!(f, "minute out of range: {minute}"),
            Self::SleepAmountOutOfRange(hours) => {
                write!(f, "sleep amount out of range: {hours}")
            }
            Self::CoffeeOutOfRange(cups) => write!(f, "coffee intake out of range: {cups}"),
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact(err) => write!(f, "model artifact: {err}"),
            Self::NonFiniteInput { feature, value } => {
                write!(f, "non-finite input for '{feature}': {value}")
            }
            Self::ImplausiblePrediction(seconds) => {
                write!(f, "implausible prediction: {seconds} seconds")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Artifact(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Model(err) => Some(err),
        }
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    #[test]
    fn input_error_display() {
        assert!(format!("{}", InputError::HourOutOfRange(24)).contains("24"));
        assert!(format!("{}", InputError::MinuteOutOfRange(60)).contains("60"));
        assert!(format!("{}", InputError::SleepAmountOutOfRange(3.5)).contains("3.5"));
        assert!(format!("{}", InputError::CoffeeOutOfRange(21)).contains("21"));
    }

    #[test]
    fn model_error_display() {
        let err = ModelError::NonFiniteInput {
            feature: "wake",
            value: f64::NAN,
        };
        assert!(format!("{err}").contains("wake"));

        let err = ModelError::ImplausiblePrediction(-1.0);
        assert!(format!("{err}").contains("-1"));
    }

    #[test]
    fn artifact_error_chains_source() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err = ModelError::Artifact(json_err);
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn non_finite_input_has_no_source() {
        let err = ModelError::NonFiniteInput {
            feature: "coffee",
            value: f64::INFINITY,
        };
        assert!(StdError::source(&err).is_none());
    }

    #[test]
    fn error_from_input() {
        let err: Error = InputError::HourOutOfRange(99).into();
        assert!(matches!(err, Error::Input(_)));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn error_from_model() {
        let err: Error = ModelError::ImplausiblePrediction(0.0).into();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn question_mark_propagation() {
        fn reject() -> Result<()> {
            Err(InputError::CoffeeOutOfRange(0))?;
            Ok(())
        }
        assert!(reject().is_err());
    }
}
