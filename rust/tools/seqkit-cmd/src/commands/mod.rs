//! Command implementations for seqkit-cmd

pub mod demo;
pub mod merge;
pub mod search;
pub mod window;
