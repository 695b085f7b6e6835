//! Chromosome to cell part type decoding.

use crate::decoder::Decoder;
use crate::error::Result;
use genetica_data::{CellPartType, Chromosome, Color, SegmentType};

/// Bases consumed by the segment trait block.
pub const CELL_DATA_SIZE: usize = 34;
/// Smallest width or length a segment can decode to.
pub const MIN_SEGMENT_EXTENT: f32 = 0.05;
/// Largest width or length a segment can decode to.
pub const MAX_SEGMENT_EXTENT: f32 = 20.0;

fn read_channel(decoder: &mut Decoder) -> Result<u8> {
    Ok((decoder.read_base_range(4)? * 255.0) as u8)
}

fn read_extent(decoder: &mut Decoder) -> Result<f32> {
    Ok((decoder.read_exp_base_range(3)? * MAX_SEGMENT_EXTENT).max(MIN_SEGMENT_EXTENT))
}

fn read_tissue_flag(decoder: &mut Decoder) -> Result<bool> {
    Ok(decoder.read_base()? > 1)
}

/// Decodes the segment trait block at the start of `chromosome`.
///
/// The read order is part of the genome format.
pub fn sequence_chromosome(key: u32, chromosome: &Chromosome) -> Result<CellPartType> {
    let mut decoder = Decoder::new(chromosome);
    let d = &mut decoder;

    let color = Color::new(read_channel(d)?, read_channel(d)?, read_channel(d)?);
    let start_width = read_extent(d)?;
    let end_width = read_extent(d)?;
    let length = read_extent(d)?;
    let bone = read_tissue_flag(d)?;
    let muscle = read_tissue_flag(d)?;
    let nerve = read_tissue_flag(d)?;
    let fat = read_tissue_flag(d)?;
    let bone_density = d.read_base_range(3)?;
    let muscle_strength = d.read_base_range(3)?;
    let fat_size = d.read_base_range(3)?;
    debug_assert_eq!(d.position(), CELL_DATA_SIZE);

    Ok(CellPartType::Segment(SegmentType {
        key,
        color,
        start_width,
        end_width,
        length,
        bone,
        muscle,
        nerve,
        fat,
        bone_density,
        muscle_strength,
        fat_size,
        children: Vec::new(),
    }))
}
