//! Counting sort over non-negative integers.

use crate::Outcome;

/// Sort with counting sort.
///
/// Returns `None` if the input contains a negative value, since the
/// frequency table is indexed from zero. The only comparisons counted are
/// the n-1 made while finding the maximum; every placement into the output
/// counts as one swap.
pub fn counting(input: &[i64]) -> Option<Outcome> {
    let mut out = Outcome::start(input);
    if input.iter().any(|&v| v < 0) {
        return None;
    }
    if input.len() <= 1 {
        return Some(out);
    }

    let mut max = input[0];
    for &value in &input[1..] {
        out.comparisons += 1;
        if value > max {
            max = value;
        }
    }

    let mut counts = vec![0usize; max as usize + 1];
    for &value in input {
        counts[value as usize] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut output = vec![0; input.len()];
    for &value in input.iter().rev() {
        counts[value as usize] -= 1;
        output[counts[value as usize]] = value;
        out.swaps += 1;
    }
    out.array = output;
    return Some(out);
}
