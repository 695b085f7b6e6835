//! # Genetica Core
//!
//! Decoding of string genomes into artificial organisms.
//!
//! This crate contains the deterministic decoding logic, including:
//! - Base decoding primitives over a chromosome cursor
//! - The sequencer: header traits, cell part types, attachment trees with symmetry
//! - Gene regulatory network decoding, affinities and per-tick dynamics
//! - A graph view of the decoded body plan
//!
//! Decoding the same genome with the same configuration always yields the
//! same organism, bit for bit.
//!
//! ## Example
//!
//! ```
//! use genetica_core::config::AppConfig;
//! use genetica_core::grn::GrnLogic;
//! use genetica_core::sequencer::sequence;
//! use genetica_data::Genome;
//!
//! let header = "2000000000000000000";
//! let body = "0".repeat(34);
//! let genome = Genome::parse([(0, header), (1, body.as_str())]).unwrap();
//!
//! let mut lifeform = sequence(&genome, &AppConfig::default()).unwrap();
//! assert_eq!(lifeform.head.map(|h| h.part), Some(1));
//! lifeform.grn.update();
//! ```

/// Graph view of the decoded body plan
pub mod body_plan;
/// Configuration management for decoding parameters
pub mod config;
/// Base decoding primitives
pub mod decoder;
/// Sequencing error taxonomy
pub mod error;
/// Gene regulatory network decoding and dynamics
pub mod grn;
/// Decode counters and structured logging
pub mod metrics;
/// Genome to organism decoding
pub mod sequencer;

pub use body_plan::BodyPlan;
pub use decoder::Decoder;
pub use error::{Result, SequenceError};
pub use grn::{
    compute_affinities, update_grn, update_grn_parallel, GrnLogic, PromoterLogic,
    RegulatoryUnitLogic,
};
pub use metrics::{init_logging, Metrics};
pub use sequencer::sequence;
