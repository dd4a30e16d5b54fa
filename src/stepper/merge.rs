//! Mergesort with a precomputed merge schedule.
//!
//! Recursive mergesort does all of its work on the way back up the call
//! tree: a range is merged only after both of its halves have been. The
//! order of merges is therefore a post-order traversal of the split tree,
//! and it depends only on the array length. `init` computes that traversal
//! once and stores it reversed, so `Vec::pop` hands out ranges leaves first
//! and the root last, exactly as the recursion would reach them.
//!
//! Each merge then runs as a small state machine:
//!
//! ```text
//! Start ──▶ Merge ──one half empty──▶ DrainLeft / DrainRight ──▶ Finish
//!   ▲                                                              │
//!   └──────────────────────── pop next range ──────────────────────┘
//! ```

use smallvec::smallvec;

use crate::error::StepError;
use crate::event::Highlights;
use crate::event::Tally;
use crate::stepper::AlgorithmInfo;
use crate::stepper::Stepper;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "Merge Sort is a divide-and-conquer algorithm that splits the array into \
        halves, sorts each half, and merges the sorted halves back together. It runs in \
        O(n log n) time regardless of the input but needs extra space proportional to the \
        size of the array.",
    worst_case: "O(n log n)",
    average_case: "O(n log n)",
    best_case: "O(n log n)",
    space: "O(n)",
};

/// One merge of `[left, mid]` with `[mid + 1, right]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeRange {
    pub left: usize,
    pub mid: usize,
    pub right: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Copy the current range into scratch.
    Start,
    /// Both halves have elements: compare and write the smaller.
    Merge,
    /// Only the left half has elements left.
    DrainLeft,
    /// Only the right half has elements left.
    DrainRight,
    /// The range is merged: move to the next one.
    Finish,
}

/// Mergesort, one comparison or one write per step.
#[derive(Clone, Debug)]
pub struct MergeStepper {
    array: Vec<i64>,
    /// Allocated once at `init` and reused for every range.
    scratch: Vec<i64>,
    /// Merge schedule in reverse post-order; `pop` yields the next merge.
    schedule: Vec<MergeRange>,
    current: MergeRange,
    read_left: usize,
    read_right: usize,
    write: usize,
    phase: Phase,
    complete: bool,
    tally: Tally,
}

impl Default for MergeStepper {
    fn default() -> Self {
        return Self::new();
    }
}

/// Every merge recursive mergesort performs on `[left, right]`, in the
/// order it performs them.
pub fn merge_schedule(left: usize, right: usize, out: &mut Vec<MergeRange>) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_schedule(left, mid, out);
    merge_schedule(mid + 1, right, out);
    out.push(MergeRange { left, mid, right });
}

impl MergeStepper {
    pub fn new() -> MergeStepper {
        return MergeStepper {
            array: Vec::new(),
            scratch: Vec::new(),
            schedule: Vec::new(),
            current: MergeRange { left: 0, mid: 0, right: 0 },
            read_left: 0,
            read_right: 0,
            write: 0,
            phase: Phase::Start,
            complete: true,
            tally: Tally::finished(),
        };
    }

    /// Merges not yet started, next one last.
    pub fn remaining(&self) -> &[MergeRange] {
        return &self.schedule;
    }

    /// The merge in progress, if any.
    pub fn current(&self) -> Option<MergeRange> {
        if self.complete {
            return None;
        }
        return Some(self.current);
    }

    fn settle_phase(&mut self) {
        let left_open = self.read_left <= self.current.mid;
        let right_open = self.read_right <= self.current.right;
        self.phase = match (left_open, right_open) {
            (true, true) => Phase::Merge,
            (true, false) => Phase::DrainLeft,
            (false, true) => Phase::DrainRight,
            (false, false) => Phase::Finish,
        };
    }

    fn start(&mut self) -> Highlights {
        let MergeRange { left, mid, right } = self.current;
        self.scratch[left..=right].copy_from_slice(&self.array[left..=right]);
        self.read_left = left;
        self.read_right = mid + 1;
        self.write = left;
        self.settle_phase();
        return smallvec![left, mid, right];
    }

    fn merge(&mut self) -> Highlights {
        let (i, j, k) = (self.read_left, self.read_right, self.write);
        self.tally.compare();
        if self.scratch[i] <= self.scratch[j] {
            self.array[k] = self.scratch[i];
            self.read_left += 1;
        } else {
            self.array[k] = self.scratch[j];
            self.read_right += 1;
        }
        self.tally.swap();
        self.write += 1;
        self.settle_phase();
        return smallvec![k, i, j];
    }

    fn drain_left(&mut self) -> Highlights {
        let (i, k) = (self.read_left, self.write);
        self.array[k] = self.scratch[i];
        self.tally.swap();
        self.read_left += 1;
        self.write += 1;
        self.settle_phase();
        return smallvec![k, i];
    }

    fn drain_right(&mut self) -> Highlights {
        let (j, k) = (self.read_right, self.write);
        self.array[k] = self.scratch[j];
        self.tally.swap();
        self.read_right += 1;
        self.write += 1;
        self.settle_phase();
        return smallvec![k, j];
    }

    fn finish(&mut self) -> Highlights {
        let MergeRange { left, right, .. } = self.current;
        match self.schedule.pop() {
            Some(next) => {
                self.current = next;
                self.phase = Phase::Start;
                return smallvec![left, right];
            }
            None => {
                self.complete = true;
                self.tally.finish();
                return Highlights::new();
            }
        }
    }
}

impl Stepper for MergeStepper {
    fn init(&mut self, array: &[i64]) -> Result<(), StepError> {
        self.array = array.to_vec();
        self.scratch = vec![0; array.len()];
        self.schedule.clear();
        if array.len() > 1 {
            merge_schedule(0, array.len() - 1, &mut self.schedule);
            self.schedule.reverse();
        }
        self.phase = Phase::Start;
        self.tally = Tally::start();
        match self.schedule.pop() {
            Some(first) => {
                self.current = first;
                self.complete = false;
            }
            None => {
                self.complete = true;
                self.tally.finish();
            }
        }
        return Ok(());
    }

    fn advance(&mut self) -> Highlights {
        if self.complete {
            return Highlights::new();
        }
        return match self.phase {
            Phase::Start => self.start(),
            Phase::Merge => self.merge(),
            Phase::DrainLeft => self.drain_left(),
            Phase::DrainRight => self.drain_right(),
            Phase::Finish => self.finish(),
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

    #[test]
    fn schedule_is_post_order() {
        let mut schedule = Vec::new();
        merge_schedule(0, 3, &mut schedule);
        assert_eq!(
            schedule,
            vec![
                MergeRange { left: 0, mid: 0, right: 1 },
                MergeRange { left: 2, mid: 2, right: 3 },
                MergeRange { left: 0, mid: 1, right: 3 },
            ]
        );
    }

    #[test]
    fn pops_leaves_before_root() {
        let mut stepper = MergeStepper::new();
        stepper.init(&[5, 4, 3, 2, 1]).unwrap();
        // [0,4] splits into [0,2] and [3,4]; [0,2] into [0,1] and [2,2].
        assert_eq!(stepper.current(), Some(MergeRange { left: 0, mid: 0, right: 1 }));
        let order: Vec<MergeRange> = stepper.remaining().iter().rev().copied().collect();
        assert_eq!(
            order,
            vec![
                MergeRange { left: 0, mid: 1, right: 2 },
                MergeRange { left: 3, mid: 3, right: 4 },
                MergeRange { left: 0, mid: 2, right: 4 },
            ]
        );
    }

    #[test]
    fn empty_and_single_are_complete_at_init() {
        let inputs: [&[i64]; 2] = [&[], &[7]];
        for input in inputs {
            let mut stepper = MergeStepper::new();
            stepper.init(input).unwrap();
            assert!(stepper.is_complete());
            assert_eq!(stepper.comparisons(), 0);
            assert_eq!(stepper.current(), None);
        }
    }

    #[test]
    fn two_element_merge_steps() {
        let mut stepper = MergeStepper::new();
        stepper.init(&[2, 1]).unwrap();

        let start = stepper.step();
        assert_eq!(start.highlights(), &[0, 1]);

        let compare = stepper.step();
        assert_eq!(compare.array(), &[1, 1]);
        assert_eq!(compare.highlights(), &[0, 1]);
        assert_eq!(compare.comparisons(), 1);

        let drain = stepper.step();
        assert_eq!(drain.array(), &[1, 2]);
        assert_eq!(drain.highlights(), &[1, 0]);
        assert_eq!(drain.comparisons(), 1);
        assert_eq!(drain.swaps(), 2);

        assert!(!stepper.is_complete());
        stepper.step();
        assert!(stepper.is_complete());
    }

    #[test]
    fn ties_take_the_left_half() {
        let mut stepper = MergeStepper::new();
        stepper.init(&[1, 1]).unwrap();
        stepper.step();
        let compare = stepper.step();
        assert_eq!(compare.highlights(), &[0, 1]);
        // The left read cursor advanced, so the right half drains into slot 1.
        let drain = stepper.step();
        assert_eq!(drain.highlights(), &[1]);
    }

    #[test]
    fn sort_matches_reference() {
        let input = [3, 17, -5, 0, 0, 9, 2, 11, -5, 6, 1];
        let mut stepper = MergeStepper::new();
        stepper.init(&input).unwrap();
        let event = stepper.sort();
        let reference = pedagogy::merge(&input);
        assert_eq!(event.array(), reference.array.as_slice());
        assert_eq!(event.comparisons(), reference.comparisons);
        assert_eq!(event.swaps(), reference.swaps);
    }
}
