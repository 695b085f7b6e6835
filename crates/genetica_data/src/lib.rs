//! Core data structures for the Genetica organism decoder.
//!
//! Everything in this crate is plain data: the genome, the decoded body-plan
//! catalog and the gene regulatory network arenas. Decoding and dynamics live
//! in `genetica_core`.

pub mod data;

pub use data::cell_part::{CellPartSchematic, CellPartType, Color, SegmentType};
pub use data::genome::{Chromosome, Genome, GenomeError, ALPHABET, ALPHABET_SIZE, HEADER_KEY};
pub use data::grn::{
    AffinityTable, FactorLevels, FactorType, Gene, GeneRegulatoryNetwork, Promoter, PromoterType,
    RegulatoryUnit,
};
pub use data::lifeform::{HeadSegment, LifeForm, ReproductionType, SymmetryType};
