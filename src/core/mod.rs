//! Geographic primitives shared across the crate.

pub mod geo;
pub mod region;
