//! Error types for steppers and the driver.

use thiserror::Error;

/// Input rejected by a stepper at `init`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Counting sort indexes its frequency table from zero.
    #[error("negative value {value} at index {index} cannot be counting-sorted")]
    NegativeValue { index: usize, value: i64 },

    /// The frequency table would be larger than the configured limit.
    #[error("value {value} at index {index} exceeds the counting sort limit of {limit}")]
    ValueTooLarge { index: usize, value: i64, limit: i64 },
}

/// Errors reported by the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// `tick` or `run` was called before a stepper was installed.
    #[error("no stepper installed")]
    NoStepper,

    /// The installed stepper rejected the driver's array.
    #[error("stepper rejected input: {0}")]
    Init(#[from] StepError),

    /// The background stepping thread panicked.
    #[error("background driver thread panicked")]
    WorkerPanicked,
}

/// An algorithm name that did not match any stepper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sorting algorithm: {0:?}")]
pub struct ParseAlgorithmError(pub String);
