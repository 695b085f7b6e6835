//! Core data structures for the Genetica organism decoder.

pub mod cell_part;
pub mod genome;
pub mod grn;
pub mod lifeform;
