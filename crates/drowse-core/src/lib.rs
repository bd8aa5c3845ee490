#![forbid(unsafe_code)]

//! Bedtime estimation core for Drowse.
//!
//! Everything here is a pure, synchronous transformation: the UI layer hands
//! over three validated inputs (wake time, desired sleep, coffee intake) and
//! gets back either a formatted bedtime or a fixed failure advice. No state
//! survives a call; the whole pipeline is recomputed on every request.
//!
//! # Example
//! ```
//! use drowse_core::{CoffeeIntake, SleepAmount, SleepModel, TimeOfDay, advise};
//!
//! let model = SleepModel::bundled().expect("bundled artifact parses");
//! let advice = advise(
//!     &model,
//!     TimeOfDay::DEFAULT_WAKE,
//!     SleepAmount::default(),
//!     CoffeeIntake::default(),
//!     Default::default(),
//! );
//! assert_eq!(advice.message, "11:30 PM");
//! ```

pub mod error;
pub mod estimator;
pub mod inputs;
pub mod model;
pub mod time;

pub use error::{Error, InputError, ModelError, Result};
pub use estimator::{Advice, advise, estimate_bedtime};
pub use inputs::{CoffeeIntake, SleepAmount};
pub use model::{Prediction, SleepModel};
pub use time::{ClockFormat, TimeOfDay};
