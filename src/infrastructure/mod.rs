//! Infrastructure layer
//!
//! Concrete implementations of the domain ports.

pub mod fs;

pub use fs::LocalFs;
