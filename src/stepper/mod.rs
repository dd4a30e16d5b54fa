//! The stepper contract and the six algorithms that implement it.
//!
//! A stepper is a sorting algorithm turned inside out: instead of running
//! to completion, it keeps its progress in explicit fields and advances by
//! one elementary operation (a comparison, a write, or a phase change) per
//! call. Recursive algorithms replace their call stack with a stack of
//! pending index ranges.
//!
//! All implementations must satisfy:
//!
//! - **Equivalence**: `sort()` and a `step()` loop on fresh instances reach
//!   the same array with the same comparison and swap totals.
//! - **Idempotent completion**: once `is_complete()` is true, `step()`
//!   changes nothing.
//! - **Monotonicity**: totals never decrease.
//!
//! # Implementations
//!
//! | Stepper | Progress state |
//! |---------|----------------|
//! | `BubbleStepper` | pass, cursor, swapped-this-pass |
//! | `SelectionStepper` | pass, cursor, current minimum |
//! | `InsertionStepper` | next key, key value, hole |
//! | `QuickStepper` | pending `(low, high)` stack, partition boundary |
//! | `MergeStepper` | post-order `(left, mid, right)` stack, scratch buffer |
//! | `CountingStepper` | phase, frequency table |

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAlgorithmError;
use crate::error::StepError;
use crate::event::Highlights;
use crate::event::SortingEvent;
use crate::event::Tally;

pub mod bubble;
pub mod counting;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleStepper;
pub use counting::CountingStepper;
pub use insertion::InsertionStepper;
pub use merge::MergeStepper;
pub use quick::QuickStepper;
pub use selection::SelectionStepper;

/// Static description of an algorithm, for display next to a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub worst_case: &'static str,
    pub average_case: &'static str,
    pub best_case: &'static str,
    pub space: &'static str,
}

/// A sorting algorithm that can be advanced one elementary operation at a
/// time.
///
/// A stepper is created, initialised once with `init`, then driven with
/// `step` (or `sort`) until `is_complete`. A stepper that was never
/// initialised behaves as if it held an empty array.
pub trait Stepper {
    /// Load a copy of `array`, resetting counters, phase state and the
    /// clock.
    ///
    /// Arrays of length 0 or 1 are complete immediately. Only input the
    /// algorithm cannot represent is rejected, and a rejected `init` leaves
    /// the stepper as it was.
    fn init(&mut self, array: &[i64]) -> Result<(), StepError>;

    /// Perform one elementary operation without building a snapshot.
    ///
    /// Returns the indices touched. Does nothing and returns no indices
    /// once the sort is complete.
    fn advance(&mut self) -> Highlights;

    /// True once the array is ordered and no operation remains.
    fn is_complete(&self) -> bool;

    /// The working array.
    fn array(&self) -> &[i64];

    /// Running totals.
    fn tally(&self) -> &Tally;

    /// Static metadata for this algorithm.
    fn info(&self) -> &'static AlgorithmInfo;

    /// Perform one elementary operation and describe it.
    fn step(&mut self) -> SortingEvent {
        let highlights = self.advance();
        return self.tally().event(self.array(), highlights);
    }

    /// Run to completion and return the final state with no highlights.
    fn sort(&mut self) -> SortingEvent {
        while !self.is_complete() {
            self.advance();
        }
        return self.snapshot();
    }

    /// The current state, without advancing.
    fn snapshot(&self) -> SortingEvent {
        return self.tally().event(self.array(), Highlights::new());
    }

    fn comparisons(&self) -> u64 {
        return self.tally().comparisons();
    }

    fn swaps(&self) -> u64 {
        return self.tally().swaps();
    }

    fn name(&self) -> &'static str {
        return self.info().name;
    }

    fn description(&self) -> &'static str {
        return self.info().description;
    }

    fn worst_case(&self) -> &'static str {
        return self.info().worst_case;
    }

    fn average_case(&self) -> &'static str {
        return self.info().average_case;
    }

    fn best_case(&self) -> &'static str {
        return self.info().best_case;
    }

    fn space(&self) -> &'static str {
        return self.info().space;
    }
}

/// The available algorithms, for choosing one by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Counting,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Counting,
    ];

    /// A fresh, uninitialised stepper for this algorithm.
    pub fn stepper(self) -> Box<dyn Stepper + Send> {
        return match self {
            Algorithm::Bubble => Box::new(BubbleStepper::new()),
            Algorithm::Selection => Box::new(SelectionStepper::new()),
            Algorithm::Insertion => Box::new(InsertionStepper::new()),
            Algorithm::Quick => Box::new(QuickStepper::new()),
            Algorithm::Merge => Box::new(MergeStepper::new()),
            Algorithm::Counting => Box::new(CountingStepper::new()),
        };
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        return match self {
            Algorithm::Bubble => &bubble::INFO,
            Algorithm::Selection => &selection::INFO,
            Algorithm::Insertion => &insertion::INFO,
            Algorithm::Quick => &quick::INFO,
            Algorithm::Merge => &merge::INFO,
            Algorithm::Counting => &counting::INFO,
        };
    }

    pub fn name(self) -> &'static str {
        return self.info().name;
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the short name (`quick`) or the full name (`quicksort`,
    /// `quick sort`, `quick_sort`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key);
        return match key {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            "counting" => Ok(Algorithm::Counting),
            _ => Err(ParseAlgorithmError(s.to_string())),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("QuickSort".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("merge sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!("counting_sort".parse::<Algorithm>(), Ok(Algorithm::Counting));
        assert!("bogo".parse::<Algorithm>().is_err());
        assert!("sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn stepper_metadata_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            let stepper = algorithm.stepper();
            assert_eq!(stepper.info(), algorithm.info());
            assert!(!stepper.description().is_empty());
        }
    }

    #[test]
    fn uninitialised_stepper_is_complete() {
        for algorithm in Algorithm::ALL {
            let mut stepper = algorithm.stepper();
            assert!(stepper.is_complete(), "{algorithm} should start complete");
            let event = stepper.step();
            assert!(event.array().is_empty());
            assert_eq!(event.comparisons(), 0);
            std::thread::sleep(std::time::Duration::from_millis(2));
            assert_eq!(stepper.step(), event, "{algorithm} clock kept running");
        }
    }

    #[test]
    fn uninitialised_matches_empty_init() {
        for algorithm in Algorithm::ALL {
            let fresh = algorithm.stepper();
            let mut empty = algorithm.stepper();
            empty.init(&[]).unwrap();
            assert!(fresh.snapshot().same_state(&empty.snapshot()));
            assert_eq!(fresh.is_complete(), empty.is_complete());
        }
    }

    #[test]
    fn highlights_never_repeat() {
        for algorithm in Algorithm::ALL {
            let mut stepper = algorithm.stepper();
            stepper.init(&[2, 2, 1, 0, 2, 1]).unwrap();
            while !stepper.is_complete() {
                let event = stepper.step();
                let highlights = event.highlights();
                for (at, index) in highlights.iter().enumerate() {
                    assert!(!highlights[at + 1..].contains(index), "{algorithm}: {highlights:?}");
                }
            }
        }
    }
}
