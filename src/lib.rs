//! Stepsort - classic sorting algorithms as observable, replayable steps.
//!
//! Each algorithm is a `Stepper`: a state machine that can be advanced one
//! comparison, write, or phase change at a time, producing a
//! `SortingEvent` snapshot after every operation. A `Driver` steps a
//! stepper on a cadence and publishes each event to its `Observer`s, so a
//! console printer or a canvas can animate a sort without knowing how the
//! algorithm works.
//!
//! # Quick Start
//!
//! ```
//! use stepsort::stepper::Algorithm;
//! use stepsort::stepper::Stepper;
//!
//! let mut stepper = Algorithm::Merge.stepper();
//! stepper.init(&[5, 1, 4, 2, 8]).unwrap();
//!
//! while !stepper.is_complete() {
//!     let event = stepper.step();
//!     assert!(event.highlights().len() <= 3);
//! }
//! assert_eq!(stepper.array(), &[1, 2, 4, 5, 8]);
//! ```
//!
//! Running the same algorithm with `sort()` instead reaches the same array
//! with the same comparison and swap counts.

pub mod driver;
pub mod error;
pub mod event;
pub mod observer;
pub mod stepper;
pub mod trace;

pub use driver::Driver;
pub use driver::DriverConfig;
pub use error::DriverError;
pub use error::StepError;
pub use event::SortingEvent;
pub use observer::Observer;
pub use stepper::Algorithm;
pub use stepper::Stepper;
