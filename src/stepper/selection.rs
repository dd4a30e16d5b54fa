//! Selection sort.

use smallvec::smallvec;

use crate::error::StepError;
use crate::event::Highlights;
use crate::event::Tally;
use crate::stepper::AlgorithmInfo;
use crate::stepper::Stepper;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    description: "Selection Sort divides the array into a sorted and an unsorted region. \
        It repeatedly finds the minimum element of the unsorted region and moves it to the \
        end of the sorted region. It performs poorly on large lists but is simple and makes \
        at most n - 1 swaps.",
    worst_case: "O(n²)",
    average_case: "O(n²)",
    best_case: "O(n²)",
    space: "O(1)",
};

/// Selection sort, one comparison against the running minimum per step.
///
/// The step that ends a pass moves the minimum into place (if it is not
/// already there) and starts the next pass.
#[derive(Clone, Debug)]
pub struct SelectionStepper {
    array: Vec<i64>,
    pass: usize,
    cursor: usize,
    current_minimum: usize,
    complete: bool,
    tally: Tally,
}

impl Default for SelectionStepper {
    fn default() -> Self {
        return Self::new();
    }
}

impl SelectionStepper {
    pub fn new() -> SelectionStepper {
        return SelectionStepper {
            array: Vec::new(),
            pass: 0,
            cursor: 1,
            current_minimum: 0,
            complete: true,
            tally: Tally::finished(),
        };
    }

    /// Index of the smallest value seen so far in this pass.
    pub fn current_minimum(&self) -> usize {
        return self.current_minimum;
    }

    fn end_pass(&mut self) -> Highlights {
        let target = self.pass;
        if self.current_minimum != target {
            self.array.swap(target, self.current_minimum);
            self.tally.swap();
        }

        self.pass += 1;
        if self.pass + 1 >= self.array.len() {
            self.complete = true;
            self.tally.finish();
            return Highlights::new();
        }
        self.current_minimum = self.pass;
        self.cursor = self.pass + 1;
        return smallvec![target];
    }
}

impl Stepper for SelectionStepper {
    fn init(&mut self, array: &[i64]) -> Result<(), StepError> {
        self.array = array.to_vec();
        self.pass = 0;
        self.cursor = 1;
        self.current_minimum = 0;
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
        if self.cursor >= self.array.len() {
            return self.end_pass();
        }

        let j = self.cursor;
        let highlights = smallvec![self.pass, j, self.current_minimum];
        self.tally.compare();
        if self.array[j] < self.array[self.current_minimum] {
            self.current_minimum = j;
        }
        self.cursor += 1;
        return highlights;
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
