//! Insertion sort.

use smallvec::smallvec;

use crate::error::StepError;
use crate::event::Highlights;
use crate::event::Tally;
use crate::stepper::AlgorithmInfo;
use crate::stepper::Stepper;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "Insertion Sort builds the sorted array one item at a time. It takes each \
        element from the unsorted part and shifts larger elements right until the element's \
        position in the sorted part is found. It is efficient for small and mostly-sorted \
        arrays.",
    worst_case: "O(n²)",
    average_case: "O(n²)",
    best_case: "O(n)",
    space: "O(1)",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Lift the next unsorted element out as the key.
    Pick,
    /// Compare the element left of the hole with the key, shifting it right
    /// if it is larger.
    Shift,
    /// Drop the key into the hole.
    Place,
}

/// Insertion sort, one comparison-and-shift per step.
///
/// The key's original slot becomes a hole that moves left as larger
/// elements shift right into it. Shifts count as swaps; dropping the key
/// into its final slot does not.
#[derive(Clone, Debug)]
pub struct InsertionStepper {
    array: Vec<i64>,
    next: usize,
    key_value: i64,
    insertion_cursor: usize,
    phase: Phase,
    complete: bool,
    tally: Tally,
}

impl Default for InsertionStepper {
    fn default() -> Self {
        return Self::new();
    }
}

impl InsertionStepper {
    pub fn new() -> InsertionStepper {
        return InsertionStepper {
            array: Vec::new(),
            next: 1,
            key_value: 0,
            insertion_cursor: 0,
            phase: Phase::Pick,
            complete: true,
            tally: Tally::finished(),
        };
    }

    /// The value being inserted, while one is in flight.
    pub fn key(&self) -> Option<i64> {
        if self.phase == Phase::Pick || self.complete {
            return None;
        }
        return Some(self.key_value);
    }
}

impl Stepper for InsertionStepper {
    fn init(&mut self, array: &[i64]) -> Result<(), StepError> {
        self.array = array.to_vec();
        self.next = 1;
        self.key_value = 0;
        self.insertion_cursor = 0;
        self.phase = Phase::Pick;
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
            Phase::Pick => {
                if self.next >= self.array.len() {
                    self.complete = true;
                    self.tally.finish();
                    return Highlights::new();
                }
                self.key_value = self.array[self.next];
                self.insertion_cursor = self.next;
                self.phase = Phase::Shift;
                return smallvec![self.next];
            }
            Phase::Shift => {
                let hole = self.insertion_cursor;
                if hole == 0 {
                    self.phase = Phase::Place;
                    return smallvec![0];
                }
                self.tally.compare();
                if self.array[hole - 1] > self.key_value {
                    self.array[hole] = self.array[hole - 1];
                    self.tally.swap();
                    self.insertion_cursor -= 1;
                } else {
                    self.phase = Phase::Place;
                }
                return smallvec![hole - 1, hole];
            }
            Phase::Place => {
                let hole = self.insertion_cursor;
                self.array[hole] = self.key_value;
                self.next += 1;
                self.phase = Phase::Pick;
                return smallvec![hole];
            }
        }
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
    fn walks_key_to_the_front() {
        let mut stepper = InsertionStepper::new();
        stepper.init(&[2, 1]).unwrap();

        let pick = stepper.step();
        assert_eq!(pick.highlights(), &[1]);
        assert_eq!(stepper.key(), Some(1));

        let shift = stepper.step();
        assert_eq!(shift.highlights(), &[0, 1]);
        assert_eq!(shift.array(), &[2, 2]);
        assert_eq!(shift.swaps(), 1);

        let front = stepper.step();
        assert_eq!(front.highlights(), &[0]);
        assert_eq!(front.comparisons(), 1);

        let place = stepper.step();
        assert_eq!(place.array(), &[1, 2]);
        assert!(!stepper.is_complete());

        stepper.step();
        assert!(stepper.is_complete());
        assert_eq!(stepper.key(), None);
    }

    #[test]
    fn stops_at_first_smaller_element() {
        let mut stepper = InsertionStepper::new();
        stepper.init(&[1, 3, 2]).unwrap();
        let event = stepper.sort();
        assert_eq!(event.array(), &[1, 2, 3]);
        // Key 3: one failed comparison. Key 2: one shift, then one failed
        // comparison against 1.
        assert_eq!(event.comparisons(), 3);
        assert_eq!(event.swaps(), 1);
    }

    #[test]
    fn sort_matches_reference() {
        let input = [0, -4, 8, 8, 3, -4, 11, 2, 6];
        let mut stepper = InsertionStepper::new();
        stepper.init(&input).unwrap();
        let event = stepper.sort();
        let reference = pedagogy::insertion(&input);
        assert_eq!(event.array(), reference.array.as_slice());
        assert_eq!(event.comparisons(), reference.comparisons);
        assert_eq!(event.swaps(), reference.swaps);
    }
}
