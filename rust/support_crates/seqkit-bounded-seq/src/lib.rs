//! Fixed-capacity, index-addressable integer sequence with positional insert and remove.
//!
//! - [`BoundedSequence`] - contiguous storage with an explicit logical length
//! - [`GrowthPolicy`] - what happens when a full sequence is asked to grow

pub mod bounded_sequence;
pub mod growth_policy;

pub use bounded_sequence::BoundedSequence;
pub use growth_policy::GrowthPolicy;
