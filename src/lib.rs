//! Genetica: genome decoding for artificial organisms.
//!
//! The heavy lifting lives in `genetica_core` and `genetica_data`; this crate
//! re-exports them under [`model`] and adds the report printed by the CLI.

pub mod model;
pub mod report;
