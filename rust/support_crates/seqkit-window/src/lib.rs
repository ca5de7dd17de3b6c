//! Fixed-width sliding window extremes in a single pass.
//!
//! - [`sliding_window_max`] / [`sliding_window_min`] - collect every window's extreme
//! - [`SlidingWindow`] - the streaming iterator behind both

pub mod sliding_window;

pub use sliding_window::{
    sliding_max_iter, sliding_min_iter, sliding_window_max, sliding_window_min, Extremum,
    SlidingWindow,
};
