//! Growable array with pluggable element lifecycle
//!
//! - `growth`: the geometric capacity schedule and its policy
//! - `lifecycle`: duplicate / destroy / default-construct strategies
//! - `container`: the `Vector` itself

pub mod container;
pub mod growth;
pub mod lifecycle;

pub use container::Vector;
pub use growth::{new_capacity, GrowthPolicy, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use lifecycle::{Callbacks, ElementOps, Shallow};
