//! Counting sort in four coarse phases.
//!
//! Counting sort has no pairwise comparisons in its core loop, so stepping
//! it element by element would show nothing interesting. Instead each
//! phase is a single step: find the maximum, count, accumulate, place.
//! The maximum search is the only place comparisons are counted.

use crate::error::StepError;
use crate::event::Highlights;
use crate::event::Tally;
use crate::stepper::AlgorithmInfo;
use crate::stepper::Stepper;

/// Largest value accepted, bounding the frequency table to 2^24 + 1 slots.
pub const MAX_COUNTING_VALUE: i64 = 1 << 24;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Counting Sort",
    description: "Counting Sort counts how many times each value occurs, turns the counts \
        into positions with a running sum, and then places every element directly at its \
        position. It is efficient when the range of values is small compared to the number \
        of elements, and only works on non-negative integers.",
    worst_case: "O(n + k)",
    average_case: "O(n + k)",
    best_case: "O(n + k)",
    space: "O(n + k)",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountingPhase {
    FindMax,
    Count,
    Accumulate,
    Place,
}

/// Counting sort over non-negative integers, one phase per step.
#[derive(Clone, Debug)]
pub struct CountingStepper {
    array: Vec<i64>,
    max: i64,
    counts: Vec<usize>,
    phase: CountingPhase,
    complete: bool,
    tally: Tally,
}

impl Default for CountingStepper {
    fn default() -> Self {
        return Self::new();
    }
}

/// Reject values the frequency table cannot index.
fn validate(array: &[i64]) -> Result<(), StepError> {
    for (index, &value) in array.iter().enumerate() {
        if value < 0 {
            return Err(StepError::NegativeValue { index, value });
        }
        if value > MAX_COUNTING_VALUE {
            return Err(StepError::ValueTooLarge {
                index,
                value,
                limit: MAX_COUNTING_VALUE,
            });
        }
    }
    return Ok(());
}

impl CountingStepper {
    pub fn new() -> CountingStepper {
        return CountingStepper {
            array: Vec::new(),
            max: 0,
            counts: Vec::new(),
            phase: CountingPhase::FindMax,
            complete: true,
            tally: Tally::finished(),
        };
    }

    /// The phase the next step will run.
    pub fn phase(&self) -> CountingPhase {
        return self.phase;
    }

    /// The frequency table: counts after `Count`, end positions after
    /// `Accumulate`.
    pub fn counts(&self) -> &[usize] {
        return &self.counts;
    }

    fn find_max(&mut self) -> Highlights {
        let mut at = 0;
        for i in 1..self.array.len() {
            self.tally.compare();
            if self.array[i] > self.array[at] {
                at = i;
            }
        }
        self.max = self.array[at];
        self.phase = CountingPhase::Count;
        let mut highlights = Highlights::new();
        highlights.push(at);
        return highlights;
    }

    fn count(&mut self) {
        self.counts = vec![0; self.max as usize + 1];
        for &value in &self.array {
            self.counts[value as usize] += 1;
        }
        self.phase = CountingPhase::Accumulate;
    }

    fn accumulate(&mut self) {
        for i in 1..self.counts.len() {
            self.counts[i] += self.counts[i - 1];
        }
        self.phase = CountingPhase::Place;
    }

    fn place(&mut self) {
        let mut output = vec![0; self.array.len()];
        for &value in self.array.iter().rev() {
            let slot = &mut self.counts[value as usize];
            *slot -= 1;
            output[*slot] = value;
            self.tally.swap();
        }
        self.array.copy_from_slice(&output);
        self.complete = true;
        self.tally.finish();
    }
}

impl Stepper for CountingStepper {
    fn init(&mut self, array: &[i64]) -> Result<(), StepError> {
        validate(array)?;
        self.array = array.to_vec();
        self.max = 0;
        self.counts = Vec::new();
        self.phase = CountingPhase::FindMax;
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
        match self.phase {
            CountingPhase::FindMax => return self.find_max(),
            CountingPhase::Count => self.count(),
            CountingPhase::Accumulate => self.accumulate(),
            CountingPhase::Place => self.place(),
        }
        return Highlights::new();
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
