// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Small helpers over slices and separated strings.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns true if `y` is in `xs`
pub fn contains<T: PartialEq>(xs: &[T], y: &T) -> bool {
    xs.iter().any(|x| x == y)
}

/// Returns all elements of `xs` except `y`, in their original order
pub fn without<T: PartialEq + Clone>(xs: &[T], y: &T) -> Vec<T> {
    xs.iter().filter(|x| *x != y).cloned().collect()
}

/// Returns true if `xs` and `ys` have the same length and every element of
/// `ys` occurs in `xs`, regardless of order
pub fn equivalent<T: Eq + Hash>(xs: &[T], ys: &[T]) -> bool {
    if xs.len() != ys.len() {
        return false;
    }

    let seen: HashSet<&T> = xs.iter().collect();
    ys.iter().all(|y| seen.contains(y))
}

/// Splits `s` on `sep` and trims whitespace from each part.
/// An empty `sep` splits `s` into its characters.
pub fn split_trim(s: &str, sep: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    if sep.is_empty() {
        return s.chars().map(|c| c.to_string().trim().to_string()).collect();
    }
    s.split(sep).map(|part| part.trim().to_string()).collect()
}
