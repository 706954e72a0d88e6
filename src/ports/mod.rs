//! Ports - boundaries between the search core and its callers

pub mod decider;

pub use decider::Decider;
