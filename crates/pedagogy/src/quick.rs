//! Recursive quicksort with a Lomuto partition around the last element.

use crate::Outcome;

/// Sort with recursive quicksort.
///
/// The pivot is always the rightmost element of the range, so sorted and
/// reverse-sorted inputs take n(n-1)/2 comparisons. Exchanging an element
/// with itself is skipped and not counted; placing the pivot always is.
pub fn quick(input: &[i64]) -> Outcome {
    let mut out = Outcome::start(input);
    if out.array.len() > 1 {
        let high = out.array.len() - 1;
        sort_range(&mut out, 0, high);
    }
    return out;
}

fn sort_range(out: &mut Outcome, low: usize, high: usize) {
    let pivot = partition(out, low, high);
    if pivot - low > 1 {
        sort_range(out, low, pivot - 1);
    }
    if high - pivot > 1 {
        sort_range(out, pivot + 1, high);
    }
}

fn partition(out: &mut Outcome, low: usize, high: usize) -> usize {
    let pivot = out.array[high];
    // Next slot for an element <= pivot.
    let mut store = low;
    for j in low..high {
        out.comparisons += 1;
        if out.array[j] <= pivot {
            if store != j {
                out.array.swap(store, j);
                out.swaps += 1;
            }
            store += 1;
        }
    }
    out.array.swap(store, high);
    out.swaps += 1;
    return store;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_only_place_pivots() {
        let out = quick(&[3, 3, 3]);
        assert_eq!(out.array, vec![3, 3, 3]);
        assert_eq!(out.comparisons, 3);
        assert_eq!(out.swaps, 2);
    }

    #[test]
    fn descending_is_quadratic() {
        let input: Vec<i64> = (0..20).rev().collect();
        let out = quick(&input);
        assert_eq!(out.array, (0..20).collect::<Vec<i64>>());
        assert_eq!(out.comparisons, 20 * 19 / 2);
    }

    #[test]
    fn two_elements() {
        let out = quick(&[2, 1]);
        assert_eq!(out.array, vec![1, 2]);
        assert_eq!(out.comparisons, 1);
    }
}
