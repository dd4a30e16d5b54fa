//! Multiset helpers for checking that a sort neither invents nor loses
//! elements.

use rustc_hash::FxHashMap;

/// Count occurrences of each value.
pub fn counts(values: &[i64]) -> FxHashMap<i64, usize> {
    let mut map = FxHashMap::default();
    for &value in values {
        *map.entry(value).or_insert(0) += 1;
    }
    return map;
}

/// True if `a` and `b` hold the same values with the same multiplicities.
pub fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    return counts(a) == counts(b);
}

/// True if `values` is in non-decreasing order.
pub fn is_sorted(values: &[i64]) -> bool {
    return values.windows(2).all(|w| w[0] <= w[1]);
}

/// True if `sorted` is a non-decreasing permutation of `input`.
pub fn is_sorted_permutation(input: &[i64], sorted: &[i64]) -> bool {
    return is_sorted(sorted) && is_permutation(input, sorted);
}
