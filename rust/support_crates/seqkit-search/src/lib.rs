//! Index lookup over integer slices.
//!
//! Both searches report a miss as `None` rather than an error: not finding a value
//! is an ordinary outcome.

/// Scans `values` from the front and returns the index of the first element equal
/// to `target`.
///
/// No ordering is required. O(n).
pub fn linear_search(values: &[i32], target: i32) -> Option<usize> {
    values.iter().position(|&v| v == target)
}

/// Locates `target` in `values`, which must be sorted in ascending order.
///
/// Maintains an inclusive `[left, right]` window and probes its midpoint, computed
/// as `left + (right - left) / 2` so the sum never overflows. When `target` occurs
/// more than once, any one of the matching indices may be returned.
///
/// Sortedness is not verified. On unsorted input the result is unspecified, but
/// every probe stays in bounds and the call always terminates. O(log n).
///
/// # Examples
///
/// ```
/// use seqkit_search::binary_search;
///
/// let values = [11, 12, 22, 25, 34, 64, 90];
/// assert_eq!(binary_search(&values, 25), Some(3));
/// assert_eq!(binary_search(&values, 30), None);
/// ```
pub fn binary_search(values: &[i32], target: i32) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut left = 0usize;
    let mut right = values.len() - 1;
    while left <= right {
        let mid = left + (right - left) / 2;
        let probe = values[mid];
        if probe == target {
            return Some(mid);
        } else if probe < target {
            left = mid + 1;
        } else {
            // `right` is inclusive; below zero the window is empty.
            right = mid.checked_sub(1)?;
        }
    }
    None
}
