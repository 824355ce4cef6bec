//! Terminal UI for the sweep binary.
//!
//! Layered the same way throughout: `theme` holds the design tokens,
//! `primitives` render single elements, `blocks` compose primitives,
//! `views` produce the final command output.

pub mod blocks;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
