use std::collections::VecDeque;

use seqkit_common::{verify_arg, Result};

/// Which extreme of each window a [`SlidingWindow`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Returns `true` if a buffered value `older` can never again be the window
    /// extreme once `newer` (a later element) has entered the window.
    #[inline]
    fn is_dominated(self, older: i32, newer: i32) -> bool {
        match self {
            Extremum::Max => older < newer,
            Extremum::Min => older > newer,
        }
    }
}

/// Computes the maximum of every window of width `k` over `values`.
///
/// The result has `values.len() - k + 1` elements; element `i` is the maximum of
/// `values[i..i + k]`. Fails with `InvalidArgument` unless `1 <= k <= values.len()`.
///
/// # Examples
///
/// ```
/// use seqkit_window::sliding_window_max;
///
/// let maxima = sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
/// assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
/// ```
pub fn sliding_window_max(values: &[i32], k: usize) -> Result<Vec<i32>> {
    let result: Vec<i32> = sliding_max_iter(values, k)?.collect();
    log::trace!(
        "sliding_window_max: {} values, width {k}, {} windows",
        values.len(),
        result.len()
    );
    Ok(result)
}

/// Computes the minimum of every window of width `k` over `values`.
///
/// Same contract as [`sliding_window_max`].
pub fn sliding_window_min(values: &[i32], k: usize) -> Result<Vec<i32>> {
    let result: Vec<i32> = sliding_min_iter(values, k)?.collect();
    log::trace!(
        "sliding_window_min: {} values, width {k}, {} windows",
        values.len(),
        result.len()
    );
    Ok(result)
}

/// Returns a streaming iterator over the window maxima of `values`.
pub fn sliding_max_iter(values: &[i32], k: usize) -> Result<SlidingWindow<'_>> {
    SlidingWindow::new(values, k, Extremum::Max)
}

/// Returns a streaming iterator over the window minima of `values`.
pub fn sliding_min_iter(values: &[i32], k: usize) -> Result<SlidingWindow<'_>> {
    SlidingWindow::new(values, k, Extremum::Min)
}

/// Iterator yielding the extreme value of each width-`k` window over a slice, left
/// to right.
///
/// Internally it keeps a double-ended buffer of *indices* into the input. Indices
/// in the buffer are increasing, lie within the current window, and the values they
/// refer to are monotone (non-increasing for [`Extremum::Max`], non-decreasing for
/// [`Extremum::Min`]), so the front always holds the current extreme. Each input
/// index is pushed once and popped at most once, giving amortized O(1) per element.
///
/// The input slice is only read.
pub struct SlidingWindow<'a> {
    values: &'a [i32],
    width: usize,
    /// Next input index to feed into the buffer.
    next: usize,
    buffer: VecDeque<usize>,
    extremum: Extremum,
}

impl<'a> SlidingWindow<'a> {
    pub fn new(values: &'a [i32], k: usize, extremum: Extremum) -> Result<SlidingWindow<'a>> {
        verify_arg!(k, k >= 1);
        verify_arg!(k, k <= values.len());
        Ok(SlidingWindow {
            values,
            width: k,
            next: 0,
            buffer: VecDeque::with_capacity(k),
            extremum,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn extremum(&self) -> Extremum {
        self.extremum
    }

    /// Feeds index `i` into the buffer, restoring the monotone invariant.
    fn push(&mut self, i: usize) {
        // Drop indices that slid off the left edge: the window ending at `i`
        // starts at `i + 1 - width`.
        while let Some(&front) = self.buffer.front() {
            if front + self.width > i {
                break;
            }
            self.buffer.pop_front();
        }

        let value = self.values[i];
        while let Some(&back) = self.buffer.back() {
            if !self.extremum.is_dominated(self.values[back], value) {
                break;
            }
            self.buffer.pop_back();
        }

        self.buffer.push_back(i);
    }

    fn remaining(&self) -> usize {
        self.values.len() - self.next.max(self.width - 1)
    }
}

impl Iterator for SlidingWindow<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while self.next < self.values.len() {
            let i = self.next;
            self.next += 1;
            self.push(i);
            if i + 1 >= self.width {
                // The buffer always holds at least `i` itself here.
                return self.buffer.front().map(|&front| self.values[front]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlidingWindow<'_> {}

impl std::iter::FusedIterator for SlidingWindow<'_> {}
