//! Closed integer intervals and merging them into a minimal disjoint set.
//!
//! # Key Types
//!
//! - [`Interval`] - a closed `[start, end]` range of `i32` points
//! - [`merge_intervals`] - sorts a copy and coalesces overlapping or touching intervals
//! - [`merge_intervals_in_place`] - the same, reusing the caller's buffer

pub mod interval;
pub mod merge;

pub use interval::Interval;
pub use merge::{merge_intervals, merge_intervals_in_place};
