//! Fallible comparisons for partially ordered elements.
//!
//! Sorting only makes sense over a total order. These helpers surface a pair
//! with no defined ordering as [`Error::Internal`] rather than letting `>` or
//! `<` quietly return `false` and corrupt the result.

use std::cmp::Ordering;

use crate::Error;

/// Compares two elements, failing if they have no defined ordering.
///
/// # Errors
///
/// Returns [`Error::Internal`] if `a.partial_cmp(b)` is `None`.
pub fn compare<T: PartialOrd>(a: &T, b: &T) -> Result<Ordering, Error> {
    a.partial_cmp(b)
        .ok_or_else(|| Error::Internal("encountered elements with no defined ordering".into()))
}

/// Returns whether `a > b`.
///
/// # Errors
///
/// Returns [`Error::Internal`] if the elements cannot be compared.
pub fn greater<T: PartialOrd>(a: &T, b: &T) -> Result<bool, Error> {
    compare(a, b).map(Ordering::is_gt)
}

/// Returns whether `a < b`.
///
/// # Errors
///
/// Returns [`Error::Internal`] if the elements cannot be compared.
pub fn less<T: PartialOrd>(a: &T, b: &T) -> Result<bool, Error> {
    compare(a, b).map(Ordering::is_lt)
}

/// Returns whether `a <= b`.
///
/// # Errors
///
/// Returns [`Error::Internal`] if the elements cannot be compared.
pub fn less_or_equal<T: PartialOrd>(a: &T, b: &T) -> Result<bool, Error> {
    compare(a, b).map(Ordering::is_le)
}
