//! Decoding a regulatory network from a base stream.
//!
//! The stream is a run of elements, each introduced by a type base:
//!
//! | type | element                  | bases |
//! |------|--------------------------|-------|
//! | 0    | additive promoter        | 14    |
//! | 1    | multiplicative promoter  | 14    |
//! | 2    | gene                     | 15    |
//! | 3    | spacer                   | 1     |
//!
//! A promoter that follows a gene opens a new regulatory unit; genes join the
//! unit opened by the promoters before them. Decoding stops at the first
//! element that does not fit in the remaining bases.

use crate::decoder::Decoder;
use crate::error::Result;
use genetica_data::{
    FactorLevels, FactorType, Gene, GeneRegulatoryNetwork, Promoter, PromoterType, RegulatoryUnit,
};

/// Bases in a promoter element, type base included.
pub const PROMOTER_SIZE: usize = 14;
/// Bases in a gene element, type base included.
pub const GENE_SIZE: usize = 15;

const MODIFIER_WIDTH: usize = 3;
const EMBEDDING_WIDTH: usize = 3;

fn read_sign(decoder: &mut Decoder) -> Result<f32> {
    Ok(if decoder.read_base()? > 1 { 1.0 } else { -1.0 })
}

fn read_embedding(decoder: &mut Decoder) -> Result<[f32; 3]> {
    Ok([
        decoder.read_base_range(EMBEDDING_WIDTH)?,
        decoder.read_base_range(EMBEDDING_WIDTH)?,
        decoder.read_base_range(EMBEDDING_WIDTH)?,
    ])
}

fn read_promoter(decoder: &mut Decoder, promoter_type: PromoterType) -> Result<Promoter> {
    Ok(Promoter {
        promoter_type,
        sign: read_sign(decoder)?,
        modifier: decoder.read_base_range(MODIFIER_WIDTH)?,
        embedding: read_embedding(decoder)?,
    })
}

fn read_gene(decoder: &mut Decoder) -> Result<Gene> {
    let factor_type = FactorType::ALL[decoder.read_base()? as usize];
    Ok(Gene {
        factor_type,
        sign: read_sign(decoder)?,
        modifier: decoder.read_base_range(MODIFIER_WIDTH)?,
        embedding: read_embedding(decoder)?,
    })
}

/// Reads elements until the stream no longer holds a complete one.
///
/// Affinities are left empty and levels zeroed.
pub fn decode_grn(decoder: &mut Decoder) -> Result<GeneRegulatoryNetwork> {
    let mut grn = GeneRegulatoryNetwork::default();
    let mut open: Option<RegulatoryUnit> = None;

    while let Some(kind) = decoder.peek_base() {
        let needed = match kind {
            0 | 1 => PROMOTER_SIZE,
            2 => GENE_SIZE,
            _ => 1,
        };
        if decoder.remaining() < needed {
            break;
        }
        decoder.read_base()?;

        match kind {
            0 | 1 => {
                let promoter_type = if kind == 0 {
                    PromoterType::Additive
                } else {
                    PromoterType::Multiplicative
                };
                let promoter = read_promoter(decoder, promoter_type)?;
                let index = grn.promoters.len();
                grn.promoters.push(promoter);

                match open.as_mut() {
                    Some(unit) if unit.factors.is_empty() => unit.promoters.push(index),
                    _ => {
                        if let Some(done) = open.take() {
                            grn.units.push(done);
                        }
                        open = Some(RegulatoryUnit {
                            promoters: vec![index],
                            factors: Vec::new(),
                        });
                    }
                }
            }
            2 => {
                let gene = read_gene(decoder)?;
                let index = grn.genes.len();
                grn.genes.push(gene);
                if let Some(unit) = open.as_mut() {
                    unit.factors.push(index);
                }
            }
            _ => {}
        }
    }

    if let Some(done) = open {
        grn.units.push(done);
    }
    grn.factor_levels = FactorLevels::zeroed(grn.genes.len());
    Ok(grn)
}
