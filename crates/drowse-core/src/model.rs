#![forbid(unsafe_code)]

//! The pre-trained sleep regression model.
//!
//! The model is an externally-trained artifact consumed as an opaque
//! predictor: three features in, one predicted sleep duration out. The
//! bundled artifact is a linear regression whose coefficients ship as JSON
//! embedded in the crate; nothing here trains or updates it.
//!
//! Feature order and units follow the artifact: `wake` in seconds since
//! midnight, `estimated_sleep` in hours, `coffee` in cups per day. The
//! output is predicted restorative sleep in seconds.

use serde::Deserialize;

use crate::error::ModelError;

const BUNDLED_ARTIFACT: &str = include_str!("../artifacts/sleep_calculator.json");

/// Upper bound on a believable prediction: one full day of sleep.
pub const MAX_PLAUSIBLE_SLEEP: f64 = 86_400.0;

#[derive(Debug, Deserialize)]
struct Artifact {
    name: String,
    intercept: f64,
    coefficients: Coefficients,
}

#[derive(Debug, Deserialize)]
struct Coefficients {
    wake: f64,
    estimated_sleep: f64,
    coffee: f64,
}

/// A single model prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted restorative sleep in seconds.
    pub actual_sleep: f64,
}

/// A loaded regression model.
#[derive(Debug, Clone)]
pub struct SleepModel {
    name: String,
    intercept: f64,
    wake_coef: f64,
    sleep_coef: f64,
    coffee_coef: f64,
}

impl SleepModel {
    /// Load the artifact bundled with the crate.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_json(BUNDLED_ARTIFACT)
    }

    /// Parse a model artifact from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: Artifact = serde_json::from_str(json).map_err(ModelError::Artifact)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %artifact.name, "loaded sleep model artifact");
        Ok(Self {
            name: artifact.name,
            intercept: artifact.intercept,
            wake_coef: artifact.coefficients.wake,
            sleep_coef: artifact.coefficients.estimated_sleep,
            coffee_coef: artifact.coefficients.coffee,
        })
    }

    /// The artifact's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predict restorative sleep in seconds for the given features.
    ///
    /// Inputs must be finite; the prediction must land in
    /// `(0, MAX_PLAUSIBLE_SLEEP]` or the call fails.
    pub fn predict(
        &self,
        wake: f64,
        estimated_sleep: f64,
        coffee: f64,
    ) -> Result<Prediction, ModelError> {
        for (feature, value) in [
            ("wake", wake),
            ("estimated_sleep", estimated_sleep),
            ("coffee", coffee),
        ] {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteInput { feature, value });
            }
        }

        let actual_sleep = self.intercept
            + self.wake_coef * wake
            + self.sleep_coef * estimated_sleep
            + self.coffee_coef * coffee;

        if !actual_sleep.is_finite() || actual_sleep <= 0.0 || actual_sleep > MAX_PLAUSIBLE_SLEEP {
            return Err(ModelError::ImplausiblePrediction(actual_sleep));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(wake, estimated_sleep, coffee, actual_sleep, "predicted");

        Ok(Prediction { actual_sleep })
    }
}
