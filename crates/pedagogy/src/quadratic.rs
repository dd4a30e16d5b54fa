//! The three O(n²) comparison sorts.

use crate::Outcome;

/// Bubble sort that stops after the first pass without exchanges.
pub fn bubble(input: &[i64]) -> Outcome {
    let mut out = Outcome::start(input);
    let n = out.array.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            out.comparisons += 1;
            if out.array[j] > out.array[j + 1] {
                out.array.swap(j, j + 1);
                out.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    return out;
}

/// Selection sort, exchanging only when the minimum is not already in place.
pub fn selection(input: &[i64]) -> Outcome {
    let mut out = Outcome::start(input);
    let n = out.array.len();
    for pass in 0..n.saturating_sub(1) {
        let mut min = pass;
        for j in pass + 1..n {
            out.comparisons += 1;
            if out.array[j] < out.array[min] {
                min = j;
            }
        }
        if min != pass {
            out.array.swap(pass, min);
            out.swaps += 1;
        }
    }
    return out;
}

/// Insertion sort. Each shift of a larger element counts as a swap; the
/// final write of the key does not.
pub fn insertion(input: &[i64]) -> Outcome {
    let mut out = Outcome::start(input);
    for i in 1..out.array.len() {
        let key = out.array[i];
        let mut hole = i;
        while hole > 0 {
            out.comparisons += 1;
            if out.array[hole - 1] <= key {
                break;
            }
            out.array[hole] = out.array[hole - 1];
            out.swaps += 1;
            hole -= 1;
        }
        out.array[hole] = key;
    }
    return out;
}
