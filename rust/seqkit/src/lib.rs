//! # seqkit: index algorithms over integer sequences
//!
//! A small family of hand-rolled array algorithms, each kept in its own crate and
//! re-exported here so users can depend on a single crate.
//!
//! ## Module Organization
//!
//! * [`common`] - Error type and `Result` alias shared by every component
//! * [`bounded_seq`] - Fixed-capacity sequence with positional insert and remove
//! * [`search`] - Linear and binary search over integer slices
//! * [`window`] - Sliding window maximum (and minimum) with a monotonic index buffer
//! * [`ranges`] - Closed intervals and interval merging
//!
//! All components are synchronous and single-threaded. Algorithms over plain
//! slices never mutate their input; [`bounded_seq::BoundedSequence`] exclusively
//! owns its storage.
//!
//! ## Example
//!
//! ```
//! use seqkit::bounded_seq::BoundedSequence;
//! use seqkit::ranges::{merge_intervals, Interval};
//! use seqkit::window::sliding_window_max;
//!
//! let mut seq = BoundedSequence::new(8).unwrap();
//! for v in [1, 3, -1, -3, 5, 3, 6, 7] {
//!     seq.append(v).unwrap();
//! }
//! assert_eq!(
//!     sliding_window_max(seq.as_slice(), 3).unwrap(),
//!     vec![3, 3, 5, 5, 6, 7]
//! );
//!
//! let merged = merge_intervals(&[Interval::new(1, 3), Interval::new(3, 5)]);
//! assert_eq!(merged, vec![Interval::new(1, 5)]);
//! ```

pub use seqkit_bounded_seq as bounded_seq;
pub use seqkit_common as common;
pub use seqkit_ranges as ranges;
pub use seqkit_search as search;
pub use seqkit_window as window;
