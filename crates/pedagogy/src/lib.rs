//! Textbook sorting algorithms, run to completion, with operation counts.
//!
//! Every algorithm here is written the way it appears in a lecture: nested
//! loops for the quadratic sorts, plain recursion for quicksort and
//! mergesort. They exist to be obviously correct, so that incremental
//! implementations can be checked against them.
//!
//! # Implementations
//!
//! | Function | Algorithm | Counting rule |
//! |----------|-----------|---------------|
//! | `bubble` | Bubble sort, early exit | one swap per exchange |
//! | `selection` | Selection sort | one swap per pass that moves |
//! | `insertion` | Insertion sort | one swap per shift |
//! | `quick` | Recursive Lomuto quicksort | self-exchanges are free, pivot placement always counts |
//! | `merge` | Recursive top-down mergesort | one swap per write back |
//! | `counting` | Counting sort | comparisons only while finding the max |
//!
//! # Example
//!
//! ```
//! use pedagogy::merge;
//!
//! let outcome = merge(&[5, 1, 4, 2, 8]);
//! assert_eq!(outcome.array, vec![1, 2, 4, 5, 8]);
//! assert!(outcome.comparisons > 0);
//! ```

pub mod counting;
pub mod merge;
pub mod multiset;
pub mod quadratic;
pub mod quick;

pub use counting::counting;
pub use merge::merge;
pub use quadratic::bubble;
pub use quadratic::insertion;
pub use quadratic::selection;
pub use quick::quick;

/// The result of sorting an array to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The sorted array.
    pub array: Vec<i64>,
    /// Number of element comparisons performed.
    pub comparisons: u64,
    /// Number of swaps or element writes performed.
    pub swaps: u64,
}

impl Outcome {
    /// Start counting against a copy of `input`.
    pub fn start(input: &[i64]) -> Outcome {
        return Outcome {
            array: input.to_vec(),
            comparisons: 0,
            swaps: 0,
        };
    }
}
