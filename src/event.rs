//! Snapshots of a sort in progress.
//!
//! A `SortingEvent` is what a stepper hands back after every elementary
//! operation: the whole array as it stands, the indices that operation
//! touched, and the running totals. Events are plain values; holding on to
//! one never observes later mutations of the stepper.

use std::time::Duration;
use std::time::Instant;

use smallvec::SmallVec;

/// Indices touched by one step. No step touches more than three, and an
/// event lists each index once.
pub type Highlights = SmallVec<[usize; 3]>;

/// An immutable snapshot of a sort after one elementary operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortingEvent {
    array: Vec<i64>,
    highlights: Highlights,
    comparisons: u64,
    swaps: u64,
    elapsed: Duration,
}

impl SortingEvent {
    /// Build an event from its parts. Repeated highlight indices are
    /// collapsed, keeping the first occurrence.
    pub fn new(
        array: Vec<i64>,
        highlights: Highlights,
        comparisons: u64,
        swaps: u64,
        elapsed: Duration,
    ) -> SortingEvent {
        let mut distinct = Highlights::new();
        for index in highlights {
            if !distinct.contains(&index) {
                distinct.push(index);
            }
        }
        return SortingEvent {
            array,
            highlights: distinct,
            comparisons,
            swaps,
            elapsed,
        };
    }

    /// The array contents at the time of the event.
    pub fn array(&self) -> &[i64] {
        return &self.array;
    }

    /// Consume the event, keeping only the array.
    pub fn into_array(self) -> Vec<i64> {
        return self.array;
    }

    /// Indices touched by the operation that produced this event.
    pub fn highlights(&self) -> &[usize] {
        return &self.highlights;
    }

    /// True if `index` was touched by the operation.
    pub fn is_highlighted(&self, index: usize) -> bool {
        return self.highlights.contains(&index);
    }

    /// Comparisons performed since `init`.
    pub fn comparisons(&self) -> u64 {
        return self.comparisons;
    }

    /// Swaps and element writes performed since `init`.
    pub fn swaps(&self) -> u64 {
        return self.swaps;
    }

    /// Time since `init`, frozen once the sort completes.
    pub fn elapsed(&self) -> Duration {
        return self.elapsed;
    }

    /// True if both events describe the same state, ignoring elapsed time.
    pub fn same_state(&self, other: &SortingEvent) -> bool {
        return self.array == other.array
            && self.highlights == other.highlights
            && self.comparisons == other.comparisons
            && self.swaps == other.swaps;
    }
}

/// Running totals shared by every stepper.
///
/// The clock starts when the tally is created and stops the first time
/// `finish` is called, so events produced after completion are identical.
#[derive(Clone, Debug)]
pub struct Tally {
    comparisons: u64,
    swaps: u64,
    started: Instant,
    finished: Option<Duration>,
}

impl Default for Tally {
    fn default() -> Self {
        return Self::start();
    }
}

impl Tally {
    /// Zeroed counters with the clock running from now.
    pub fn start() -> Tally {
        return Tally {
            comparisons: 0,
            swaps: 0,
            started: Instant::now(),
            finished: None,
        };
    }

    /// Record one comparison.
    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    /// Record one swap or element write.
    #[inline]
    pub fn swap(&mut self) {
        self.swaps += 1;
    }

    /// Zeroed counters with the clock already stopped, for a stepper that
    /// has nothing to sort.
    pub fn finished() -> Tally {
        let mut tally = Tally::start();
        tally.finish();
        return tally;
    }

    /// Stop the clock. Later calls keep the first reading.
    pub fn finish(&mut self) {
        if self.finished.is_none() {
            self.finished = Some(self.started.elapsed());
        }
    }

    pub fn comparisons(&self) -> u64 {
        return self.comparisons;
    }

    pub fn swaps(&self) -> u64 {
        return self.swaps;
    }

    pub fn elapsed(&self) -> Duration {
        return self.finished.unwrap_or_else(|| self.started.elapsed());
    }

    /// Snapshot `array` with the current totals.
    pub fn event(&self, array: &[i64], highlights: Highlights) -> SortingEvent {
        return SortingEvent::new(
            array.to_vec(),
            highlights,
            self.comparisons,
            self.swaps,
            self.elapsed(),
        );
    }
}
