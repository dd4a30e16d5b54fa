//! Quicksort with an explicit stack of pending ranges.
//!
//! The recursive formulation partitions `[low, high]` and then recurses on
//! both sides. Here the recursion is a `Vec<(usize, usize)>` of ranges still
//! to be partitioned, and partitioning itself is broken into three phases
//! so each step does one unit of work:
//!
//! ```text
//! Seek ──pop──▶ Scan ──j == high──▶ Place ──push sides──▶ Seek
//!  │              ▲ │
//!  │              └─┘ one comparison per step
//!  └── stack empty: complete
//! ```
//!
//! The pivot is always the rightmost element of the range. This makes
//! counts reproducible and makes sorted or reverse-sorted input cost
//! n(n-1)/2 comparisons, which is the behaviour being demonstrated.

use smallvec::smallvec;

use crate::error::StepError;
use crate::event::Highlights;
use crate::event::Tally;
use crate::stepper::AlgorithmInfo;
use crate::stepper::Stepper;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "Quick Sort is a divide-and-conquer algorithm that selects a pivot element \
        and partitions the array around it, so that smaller elements end up on its left and \
        greater elements on its right. The process then repeats for both sides. Quick Sort \
        is among the fastest sorts on average but degrades on already-sorted input when the \
        pivot is always the last element.",
    worst_case: "O(n²)",
    average_case: "O(n log n)",
    best_case: "O(n log n)",
    space: "O(log n)",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Pop the next pending range.
    Seek,
    /// Compare `array[scan]` with the pivot.
    Scan,
    /// Swap the pivot into its final position and push both sides.
    Place,
}

/// Quicksort (Lomuto partition), one comparison or pivot placement per step.
#[derive(Clone, Debug)]
pub struct QuickStepper {
    array: Vec<i64>,
    pending: Vec<(usize, usize)>,
    low: usize,
    high: usize,
    /// Next slot for an element `<=` the pivot. The partition boundary is
    /// `store - 1` once `store > low`.
    store: usize,
    scan: usize,
    phase: Phase,
    complete: bool,
    tally: Tally,
}

impl Default for QuickStepper {
    fn default() -> Self {
        return Self::new();
    }
}

impl QuickStepper {
    pub fn new() -> QuickStepper {
        return QuickStepper {
            array: Vec::new(),
            pending: Vec::new(),
            low: 0,
            high: 0,
            store: 0,
            scan: 0,
            phase: Phase::Seek,
            complete: true,
            tally: Tally::finished(),
        };
    }

    /// Ranges waiting to be partitioned, most recent last.
    pub fn pending(&self) -> &[(usize, usize)] {
        return &self.pending;
    }

    fn seek(&mut self) -> Highlights {
        let Some((low, high)) = self.pending.pop() else {
            self.complete = true;
            self.tally.finish();
            return Highlights::new();
        };
        self.low = low;
        self.high = high;
        self.store = low;
        self.scan = low;
        self.phase = Phase::Scan;
        return smallvec![low, high];
    }

    fn scan(&mut self) -> Highlights {
        let j = self.scan;
        if j >= self.high {
            self.phase = Phase::Place;
            return smallvec![self.store, self.high];
        }

        let pivot = self.array[self.high];
        self.tally.compare();
        if self.array[j] <= pivot {
            if self.store != j {
                self.array.swap(self.store, j);
                self.tally.swap();
            }
            self.store += 1;
        }
        self.scan += 1;

        let mut highlights = Highlights::new();
        if self.store > self.low {
            highlights.push(self.store - 1);
        }
        highlights.push(j);
        highlights.push(self.high);
        return highlights;
    }

    fn place(&mut self) -> Highlights {
        let (low, high, pivot) = (self.low, self.high, self.store);
        self.array.swap(pivot, high);
        self.tally.swap();

        // Ranges of zero or one element are already sorted.
        if pivot - low > 1 {
            self.pending.push((low, pivot - 1));
        }
        if high - pivot > 1 {
            self.pending.push((pivot + 1, high));
        }
        self.phase = Phase::Seek;
        return smallvec![pivot];
    }
}

impl Stepper for QuickStepper {
    fn init(&mut self, array: &[i64]) -> Result<(), StepError> {
        self.array = array.to_vec();
        self.pending.clear();
        self.phase = Phase::Seek;
        self.tally = Tally::start();
        self.complete = array.len() <= 1;
        if self.complete {
            self.tally.finish();
        } else {
            self.pending.push((0, array.len() - 1));
        }
        return Ok(());
    }

    fn advance(&mut self) -> Highlights {
        if self.complete {
            return Highlights::new();
        }
        return match self.phase {
            Phase::Seek => self.seek(),
            Phase::Scan => self.scan(),
            Phase::Place => self.place(),
        };
    }

    fn is_complete(&self) -> bool {
        return self.complete;
    }

    fn array(&self) -> &[i64] {
        return &self.array;
    }

    fn tally(&self) -> &Tally {
        return &self.tally;
    }

    fn info(&self) -> &'static AlgorithmInfo {
        return &INFO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[i64]) -> QuickStepper {
        let mut stepper = QuickStepper::new();
        stepper.init(input).unwrap();
        while !stepper.is_complete() {
            stepper.step();
        }
        return stepper;
    }

    #[test]
    fn duplicates_only_swap_pivots() {
        let stepper = run(&[3, 3, 3]);
        assert_eq!(stepper.array(), &[3, 3, 3]);
        assert_eq!(stepper.comparisons(), 3);
        // One pivot placement for [0, 2] and one for [0, 1].
        assert_eq!(stepper.swaps(), 2);
        assert!(stepper.pending().is_empty());
    }

    #[test]
    fn descending_input_is_quadratic() {
        let n = 32;
        let input: Vec<i64> = (0..n).rev().collect();
        let stepper = run(&input);
        assert_eq!(stepper.array(), (0..n).collect::<Vec<i64>>().as_slice());
        assert_eq!(stepper.comparisons(), (n * (n - 1) / 2) as u64);
    }

    #[test]
    fn first_steps_follow_phases() {
        let mut stepper = QuickStepper::new();
        stepper.init(&[1, 5, 2, 4]).unwrap();

        let seek = stepper.step();
        assert_eq!(seek.highlights(), &[0, 3]);

        // 1 <= 4: boundary moves onto index 0, no swap needed.
        let first = stepper.step();
        assert_eq!(first.highlights(), &[0, 3]);
        assert_eq!(first.swaps(), 0);

        // 5 > 4: boundary stays.
        let second = stepper.step();
        assert_eq!(second.highlights(), &[0, 1, 3]);

        // 2 <= 4: swapped into slot 1.
        let third = stepper.step();
        assert_eq!(third.array(), &[1, 2, 5, 4]);
        assert_eq!(third.highlights(), &[1, 2, 3]);
        assert_eq!(third.swaps(), 1);

        let end_of_scan = stepper.step();
        assert_eq!(end_of_scan.highlights(), &[2, 3]);

        let place = stepper.step();
        assert_eq!(place.array(), &[1, 2, 4, 5]);
        assert_eq!(place.highlights(), &[2]);
        // Left side [0, 1] has two elements; right side [3, 3] is pruned.
        assert_eq!(stepper.pending(), &[(0, 1)]);
    }

    #[test]
    fn sort_matches_reference() {
        let input = [7, -2, 9, 4, 4, 0, 13, -6, 1, 8];
        let mut stepper = QuickStepper::new();
        stepper.init(&input).unwrap();
        let event = stepper.sort();
        let reference = pedagogy::quick(&input);
        assert_eq!(event.array(), reference.array.as_slice());
        assert_eq!(event.comparisons(), reference.comparisons);
        assert_eq!(event.swaps(), reference.swaps);
    }
}
