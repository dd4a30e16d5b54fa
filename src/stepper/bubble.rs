//! Bubble sort with early exit.

use smallvec::smallvec;

use crate::error::StepError;
use crate::event::Highlights;
use crate::event::Tally;
use crate::stepper::AlgorithmInfo;
use crate::stepper::Stepper;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "Bubble Sort repeatedly steps through the list, comparing each pair of \
        adjacent items and swapping them if they are in the wrong order. The pass through \
        the list is repeated until a pass needs no swaps, which means the list is sorted.",
    worst_case: "O(n²)",
    average_case: "O(n²)",
    best_case: "O(n)",
    space: "O(1)",
};

/// Bubble sort, one adjacent comparison per step.
///
/// Pass `p` compares `array[j]` with `array[j + 1]` for `j` in
/// `0..n - 1 - p`, after which the largest remaining value has settled at
/// `n - 1 - p`. The step that ends a pass either starts the next one or,
/// if the pass made no swaps, completes the sort.
#[derive(Clone, Debug)]
pub struct BubbleStepper {
    array: Vec<i64>,
    pass: usize,
    cursor: usize,
    swapped_this_pass: bool,
    complete: bool,
    tally: Tally,
}

impl Default for BubbleStepper {
    fn default() -> Self {
        return Self::new();
    }
}

impl BubbleStepper {
    pub fn new() -> BubbleStepper {
        return BubbleStepper {
            array: Vec::new(),
            pass: 0,
            cursor: 0,
            swapped_this_pass: false,
            complete: true,
            tally: Tally::finished(),
        };
    }

    /// Zero-based index of the pass in progress.
    pub fn pass(&self) -> usize {
        return self.pass;
    }

    fn end_pass(&mut self) -> Highlights {
        let n = self.array.len();
        let settled = n - 1 - self.pass;
        if !self.swapped_this_pass || self.pass + 2 >= n {
            self.complete = true;
            self.tally.finish();
            return Highlights::new();
        }
        self.pass += 1;
        self.cursor = 0;
        self.swapped_this_pass = false;
        return smallvec![settled];
    }
}

impl Stepper for BubbleStepper {
    fn init(&mut self, array: &[i64]) -> Result<(), StepError> {
        self.array = array.to_vec();
        self.pass = 0;
        self.cursor = 0;
        self.swapped_this_pass = false;
        self.tally = Tally::start();
        self.complete = array.len() <= 1;
        if self.complete {
            self.tally.finish();
        }
        return Ok(());
    }

    fn advance(&mut self) -> Highlights {
        if self.complete {
            return Highlights::new();
        }

        let j = self.cursor;
        if j + 1 >= self.array.len() - self.pass {
            return self.end_pass();
        }

        self.tally.compare();
        if self.array[j] > self.array[j + 1] {
            self.array.swap(j, j + 1);
            self.tally.swap();
            self.swapped_this_pass = true;
        }
        self.cursor += 1;
        return smallvec![j, j + 1];
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

    fn stepped(input: &[i64]) -> (BubbleStepper, usize) {
        let mut stepper = BubbleStepper::new();
        stepper.init(input).unwrap();
        let mut steps = 0;
        while !stepper.is_complete() {
            stepper.step();
            steps += 1;
        }
        return (stepper, steps);
    }

    #[test]
    fn known_case_exits_early() {
        let (stepper, steps) = stepped(&[5, 1, 4, 2, 8]);
        assert_eq!(stepper.array(), &[1, 2, 4, 5, 8]);
        // Passes of 4, 3 and 2 comparisons; the third pass is clean.
        assert_eq!(stepper.comparisons(), 9);
        assert_eq!(stepper.swaps(), 4);
        // One step per comparison plus one per pass boundary.
        assert_eq!(steps, 9 + 3);
        assert_eq!(stepper.pass(), 2);
    }

    #[test]
    fn sorted_input_takes_one_pass() {
        let (stepper, _) = stepped(&[1, 2, 3, 4, 5]);
        assert_eq!(stepper.comparisons(), 4);
        assert_eq!(stepper.swaps(), 0);
    }

    #[test]
    fn step_highlights_adjacent_pair() {
        let mut stepper = BubbleStepper::new();
        stepper.init(&[2, 1, 3]).unwrap();
        let event = stepper.step();
        assert_eq!(event.highlights(), &[0, 1]);
        assert_eq!(event.array(), &[1, 2, 3]);
        assert_eq!(event.swaps(), 1);
    }

    #[test]
    fn pass_boundary_highlights_settled_index() {
        let mut stepper = BubbleStepper::new();
        stepper.init(&[3, 2, 1]).unwrap();
        stepper.step();
        stepper.step();
        let boundary = stepper.step();
        assert_eq!(boundary.highlights(), &[2]);
        assert_eq!(boundary.comparisons(), 2);
    }

    #[test]
    fn sort_matches_reference() {
        let input = [9, -3, 7, 7, 0, 12, -8, 4];
        let mut stepper = BubbleStepper::new();
        stepper.init(&input).unwrap();
        let event = stepper.sort();
        let reference = pedagogy::bubble(&input);
        assert_eq!(event.array(), reference.array.as_slice());
        assert_eq!(event.comparisons(), reference.comparisons);
        assert_eq!(event.swaps(), reference.swaps);
        assert!(event.highlights().is_empty());
    }
}
