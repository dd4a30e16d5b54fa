//! AFL fuzz harness for the steppers.
//!
//! Every input is decoded into an array and run through all six
//! algorithms twice, once with `sort()` and once one `step()` at a time.
//! The harness checks the properties a frontend relies on:
//! 1. Equivalence: both runs end in the same array with the same totals
//! 2. Correctness: the result is the input, sorted
//! 3. Monotonicity: totals never decrease between steps
//! 4. Idempotent completion: stepping a finished sort changes nothing
//!
//! Build with `cargo afl build --features afl --bin fuzz_steppers`.

use afl::fuzz;
use stepsort::Algorithm;
use stepsort::StepError;

/// Keep quadratic sorts fast enough for the fuzzer.
const MAX_LEN: usize = 256;

/// Two bytes per value, little-endian, so duplicates and negatives both
/// show up often. Counting sort gets the absolute values.
fn decode(data: &[u8]) -> Vec<i64> {
    return data
        .chunks_exact(2)
        .take(MAX_LEN)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as i64)
        .collect();
}

fn check(algorithm: Algorithm, input: &[i64]) -> Result<(), StepError> {
    let mut expected = input.to_vec();
    expected.sort_unstable();

    let mut whole = algorithm.stepper();
    whole.init(input)?;
    let sorted = whole.sort();
    assert_eq!(sorted.array(), expected.as_slice(), "{algorithm}: sort() result is wrong");

    let mut stepped = algorithm.stepper();
    stepped.init(input)?;
    let mut previous = (0, 0);
    while !stepped.is_complete() {
        let event = stepped.step();
        assert!(event.highlights().len() <= 3, "{algorithm}: too many highlights");
        for &index in event.highlights() {
            assert!(index < input.len(), "{algorithm}: highlight {index} out of bounds");
        }
        assert!(event.comparisons() >= previous.0, "{algorithm}: comparisons decreased");
        assert!(event.swaps() >= previous.1, "{algorithm}: swaps decreased");
        previous = (event.comparisons(), event.swaps());
    }

    let last = stepped.snapshot();
    assert!(
        last.same_state(&sorted),
        "{algorithm}: step loop and sort() disagree: {last:?} vs {sorted:?}"
    );

    let again = stepped.step();
    assert_eq!(again, last, "{algorithm}: step after completion changed state");
    return Ok(());
}

fn main() {
    fuzz!(|data: &[u8]| {
        let input = decode(data);
        let magnitudes: Vec<i64> = input.iter().map(|value| value.abs()).collect();

        for algorithm in Algorithm::ALL {
            let result = match algorithm {
                Algorithm::Counting => check(algorithm, &magnitudes),
                _ => check(algorithm, &input),
            };
            if let Err(err) = result {
                panic!("{algorithm} rejected valid input: {err}");
            }
        }

        // Negative input is the one thing counting sort refuses.
        if input.iter().any(|&value| value < 0) {
            let mut counting = Algorithm::Counting.stepper();
            assert!(counting.init(&input).is_err());
        }
    });
}
