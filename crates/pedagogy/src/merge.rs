//! Recursive top-down mergesort.

use crate::Outcome;

/// Sort with recursive mergesort.
///
/// Ranges are inclusive and split at `left + (right - left) / 2`. Every
/// element written back into the array counts as one swap; ties take the
/// left half first.
pub fn merge(input: &[i64]) -> Outcome {
    let mut out = Outcome::start(input);
    if out.array.len() > 1 {
        let right = out.array.len() - 1;
        sort_range(&mut out, 0, right);
    }
    return out;
}

fn sort_range(out: &mut Outcome, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(out, left, mid);
    sort_range(out, mid + 1, right);
    merge_halves(out, left, mid, right);
}

fn merge_halves(out: &mut Outcome, left: usize, mid: usize, right: usize) {
    let lower = out.array[left..=mid].to_vec();
    let upper = out.array[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lower.len() && j < upper.len() {
        out.comparisons += 1;
        if lower[i] <= upper[j] {
            out.array[k] = lower[i];
            i += 1;
        } else {
            out.array[k] = upper[j];
            j += 1;
        }
        out.swaps += 1;
        k += 1;
    }
    for &value in lower[i..].iter().chain(upper[j..].iter()) {
        out.array[k] = value;
        out.swaps += 1;
        k += 1;
    }
}
