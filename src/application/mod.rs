//! Application layer
//!
//! Use cases orchestrating domain logic over the infrastructure ports.

pub mod clean;
