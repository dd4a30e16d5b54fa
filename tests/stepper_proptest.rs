//! Property-based tests: steppers against the textbook implementations.

use proptest::prelude::*;
use stepsort::Algorithm;
use stepsort::Stepper;

// =============================================================================
// Test helpers
// =============================================================================

/// Arrays with plenty of duplicates and negatives.
fn arbitrary_array() -> impl Strategy<Value = Vec<i64>> {
    return prop::collection::vec(-50i64..50, 0..64);
}

/// Arrays counting sort accepts.
fn arbitrary_counts() -> impl Strategy<Value = Vec<i64>> {
    return prop::collection::vec(0i64..200, 0..64);
}

fn reference(algorithm: Algorithm, input: &[i64]) -> pedagogy::Outcome {
    return match algorithm {
        Algorithm::Bubble => pedagogy::bubble(input),
        Algorithm::Selection => pedagogy::selection(input),
        Algorithm::Insertion => pedagogy::insertion(input),
        Algorithm::Quick => pedagogy::quick(input),
        Algorithm::Merge => pedagogy::merge(input),
        Algorithm::Counting => match pedagogy::counting(input) {
            Some(outcome) => outcome,
            None => panic!("counting reference rejected {input:?}"),
        },
    };
}

/// Step to completion and compare with the recursive version.
fn check_against_reference(algorithm: Algorithm, input: &[i64]) -> Result<(), TestCaseError> {
    let expected = reference(algorithm, input);

    let mut stepper = algorithm.stepper();
    stepper.init(input).unwrap();
    let mut steps = 0u64;
    while !stepper.is_complete() {
        stepper.step();
        steps += 1;
        prop_assert!(steps < 100_000, "{} never completed", algorithm);
    }

    prop_assert_eq!(stepper.array(), expected.array.as_slice(), "{} array", algorithm);
    prop_assert_eq!(stepper.comparisons(), expected.comparisons, "{} comparisons", algorithm);
    prop_assert_eq!(stepper.swaps(), expected.swaps, "{} swaps", algorithm);
    return Ok(());
}

/// `sort()` and a step loop agree.
fn check_sort_matches_steps(algorithm: Algorithm, input: &[i64]) -> Result<(), TestCaseError> {
    let mut whole = algorithm.stepper();
    whole.init(input).unwrap();
    let sorted = whole.sort();

    let mut stepped = algorithm.stepper();
    stepped.init(input).unwrap();
    while !stepped.is_complete() {
        stepped.step();
    }
    prop_assert!(stepped.snapshot().same_state(&sorted), "{} diverged", algorithm);
    prop_assert!(pedagogy::multiset::is_sorted_permutation(input, sorted.array()));
    return Ok(());
}

// =============================================================================
// Reference agreement
// =============================================================================

proptest! {
    #[test]
    fn bubble_matches_reference(input in arbitrary_array()) {
        check_against_reference(Algorithm::Bubble, &input)?;
    }

    #[test]
    fn selection_matches_reference(input in arbitrary_array()) {
        check_against_reference(Algorithm::Selection, &input)?;
    }

    #[test]
    fn insertion_matches_reference(input in arbitrary_array()) {
        check_against_reference(Algorithm::Insertion, &input)?;
    }

    #[test]
    fn quick_matches_reference(input in arbitrary_array()) {
        check_against_reference(Algorithm::Quick, &input)?;
    }

    #[test]
    fn merge_matches_reference(input in arbitrary_array()) {
        check_against_reference(Algorithm::Merge, &input)?;
    }

    #[test]
    fn counting_matches_reference(input in arbitrary_counts()) {
        check_against_reference(Algorithm::Counting, &input)?;
    }
}

// =============================================================================
// Contract properties
// =============================================================================

proptest! {
    #[test]
    fn sort_matches_steps(input in arbitrary_array()) {
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::Counting {
                continue;
            }
            check_sort_matches_steps(algorithm, &input)?;
        }
    }

    #[test]
    fn counting_sort_matches_steps(input in arbitrary_counts()) {
        check_sort_matches_steps(Algorithm::Counting, &input)?;
    }

    #[test]
    fn counting_rejects_any_negative(mut input in arbitrary_counts(), at in any::<prop::sample::Index>()) {
        input.push(0);
        let index = at.index(input.len());
        input[index] = -1 - input[index];
        let mut stepper = Algorithm::Counting.stepper();
        prop_assert!(stepper.init(&input).is_err());
    }

    #[test]
    fn quadratic_counts_are_bounded(input in arbitrary_array()) {
        let n = input.len() as u64;
        let bound = n * n.saturating_sub(1) / 2;
        for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
            let mut stepper = algorithm.stepper();
            stepper.init(&input).unwrap();
            let event = stepper.sort();
            prop_assert!(event.comparisons() <= bound, "{} comparisons", algorithm);
            prop_assert!(event.swaps() <= bound, "{} swaps", algorithm);
        }
    }
}
