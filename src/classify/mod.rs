//! Classification resolver
//!
//! Built-in tables per dimension, resolution of raw backend codes, rank ordering
//! and distribution tallies.

pub mod resolver;
pub mod sort;
pub mod tables;
pub mod tally;

pub use resolver::*;
pub use sort::*;
pub use tables::*;
pub use tally::*;
