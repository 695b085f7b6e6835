//! Genome to organism decoding.
//!
//! [`sequence`] runs four passes over a genome, always in ascending key order:
//! header traits, one cell part type per body chromosome, attachment
//! construction for every chromosome, then head designation. The header's
//! tail after the trait block encodes the regulatory network.

pub mod chromosome;
pub mod construct;

pub use chromosome::{sequence_chromosome, CELL_DATA_SIZE};
pub use construct::{construct, AttachmentRecord, ConstructionContext, ATTACHMENT_RECORD_SIZE};

use crate::config::AppConfig;
use crate::decoder::Decoder;
use crate::error::{Result, SequenceError};
use crate::grn::{decode_grn, GrnLogic};
use genetica_data::{
    Chromosome, Genome, HeadSegment, LifeForm, ReproductionType, SymmetryType, HEADER_KEY,
};

/// Bases consumed by the header trait block.
pub const HEADER_SIZE: usize = 19;
/// Size forced onto the head segment.
pub const HEAD_SIZE: f32 = 0.4;
/// Build priority of the head segment.
pub const HEAD_BUILD_PRIORITY: i32 = 100;
/// Header reproduction base selecting sexual reproduction.
pub const SEXUAL_REPRODUCTION_BASE: u8 = 3;

/// Decodes the header trait block into `lifeform`.
///
/// Leaves `decoder` positioned at the start of the regulatory network stream.
pub fn sequence_header(lifeform: &mut LifeForm, decoder: &mut Decoder) -> Result<()> {
    if decoder.remaining() < HEADER_SIZE {
        return Err(SequenceError::MalformedHeader {
            len: decoder.remaining(),
            required: HEADER_SIZE,
        });
    }

    lifeform.symmetry_type = SymmetryType::ALL[decoder.read_base()? as usize];
    lifeform.reproduction_type = if decoder.read_base()? == SEXUAL_REPRODUCTION_BASE {
        ReproductionType::Sexual
    } else {
        ReproductionType::Asexual
    };
    lifeform.size = (decoder.read_exp_base_range(5)? * 5.0).max(0.5);
    lifeform.growth_energy = (decoder.read_base_range(3)? * 100.0).max(5.0);
    lifeform.growth_priority = decoder.read_base_range(3)?.max(0.1);
    lifeform.child_energy = (decoder.read_base_range(3)? * 0.9).max(0.05);
    lifeform.regeneration_fraction = decoder.read_base_range(3)?.min(0.9);
    Ok(())
}

/// Marks the lowest-key segment as the head.
pub fn designate_head(lifeform: &mut LifeForm) {
    lifeform.head = lifeform
        .cell_parts
        .iter()
        .find_map(|(&key, part)| part.as_segment().map(|_| key))
        .map(|part| HeadSegment {
            part,
            size: HEAD_SIZE,
            centered: true,
            build_priority: HEAD_BUILD_PRIORITY,
        });
}

/// Decodes a complete organism from `genome`.
///
/// Fails without returning a partial organism when the header is malformed
/// or any body chromosome is too short for its trait block.
pub fn sequence(genome: &Genome, config: &AppConfig) -> Result<LifeForm> {
    let empty = Chromosome::default();
    let header = genome.header().unwrap_or(&empty);
    let mut lifeform = LifeForm::default();

    let mut decoder = Decoder::new(header);
    sequence_header(&mut lifeform, &mut decoder).map_err(|e| e.in_chromosome(HEADER_KEY))?;

    for (key, chromosome) in genome.non_header() {
        let part = sequence_chromosome(key, chromosome).map_err(|e| e.in_chromosome(key))?;
        lifeform.cell_parts.insert(key, part);
    }

    let mut ctx = ConstructionContext::new(lifeform.symmetry_type, &config.sequencer);
    for (key, chromosome) in genome.non_header() {
        construct(&mut lifeform.cell_parts, key, chromosome, &mut ctx);
    }

    designate_head(&mut lifeform);

    let mut grn = decode_grn(&mut decoder).map_err(|e| e.in_chromosome(HEADER_KEY))?;
    grn.compute_affinities(&config.grn);
    lifeform.grn = grn;

    tracing::info!(
        symmetry = ?lifeform.symmetry_type,
        parts = lifeform.cell_parts.len(),
        schematics = lifeform.schematic_count(),
        genes = lifeform.grn.genes.len(),
        units = lifeform.grn.units.len(),
        "Sequenced organism"
    );
    Ok(lifeform)
}
