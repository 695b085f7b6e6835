//! Attachment tree construction.
//!
//! Each chromosome is re-read from its first base as a run of ten-base
//! attachment records. Records are decoded while more than
//! [`CELL_DATA_SIZE`] bases remain; the first record naming a missing part
//! stops that chromosome only.

use super::chromosome::CELL_DATA_SIZE;
use crate::config::SequencerConfig;
use crate::decoder::Decoder;
use crate::error::{Result, SequenceError};
use genetica_data::{CellPartSchematic, CellPartType, Chromosome, SymmetryType};
use std::collections::BTreeMap;
use std::f32::consts::{PI, TAU};

/// Bases in one attachment record.
pub const ATTACHMENT_RECORD_SIZE: usize = 10;
/// Size of the part id and build priority domains.
pub const PART_ID_DOMAIN: f32 = 64.0;
/// Largest elevation of an attachment, in degrees.
pub const MAX_ANGLE_FROM_BODY_DEG: f32 = 45.0;

/// State shared by every chromosome of one construction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionContext {
    pub symmetry: SymmetryType,
    /// Set once the radial counterpart has been attached anywhere in the pass.
    pub head_segment_found: bool,
    pub skip_duplicate_angles: bool,
}

impl ConstructionContext {
    #[must_use]
    pub fn new(symmetry: SymmetryType, config: &SequencerConfig) -> Self {
        Self {
            symmetry,
            head_segment_found: false,
            skip_duplicate_angles: config.skip_duplicate_angles,
        }
    }
}

/// One decoded attachment record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachmentRecord {
    pub part: u32,
    pub build_priority: i32,
    pub angle_on_body: f32,
    pub angle_from_body: f32,
}

impl AttachmentRecord {
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let part = (decoder.read_unique_base_range(3)? * PART_ID_DOMAIN) as u32;
        let build_priority = (decoder.read_base_range(3)? * PART_ID_DOMAIN) as i32;
        let angle_on_body = decoder.read_unique_base_range(2)? * PI * 2.0;
        let angle_from_body = (decoder.read_base_range(2)? * MAX_ANGLE_FROM_BODY_DEG * 2.0
            - MAX_ANGLE_FROM_BODY_DEG)
            .to_radians();
        Ok(Self {
            part,
            build_priority,
            angle_on_body,
            angle_from_body,
        })
    }

    /// Lies on the main symmetry line.
    #[must_use]
    pub fn on_axis(&self) -> bool {
        (self.angle_on_body == PI || self.angle_on_body == 0.0) && self.angle_from_body == 0.0
    }

    fn schematic(&self, flipped: bool, angle_on_body: f32, angle_from_body: f32) -> CellPartSchematic {
        CellPartSchematic::new(
            self.part,
            flipped,
            self.build_priority,
            angle_on_body,
            angle_from_body,
        )
    }
}

/// Decodes attachment records of the part `key` and appends schematics to it.
///
/// Returns the number of records attached.
pub fn construct(
    cell_parts: &mut BTreeMap<u32, CellPartType>,
    key: u32,
    chromosome: &Chromosome,
    ctx: &mut ConstructionContext,
) -> usize {
    if !cell_parts.contains_key(&key) {
        return 0;
    }

    let mut decoder = Decoder::new(chromosome);
    let mut attached = 0;

    while decoder.remaining() > CELL_DATA_SIZE {
        let record = match AttachmentRecord::decode(&mut decoder) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(parent = key, error = %e, "Attachment decode stopped");
                break;
            }
        };

        if let Err(e) = check_reference(cell_parts, key, record.part) {
            tracing::debug!(error = %e, "Attachment loop halted");
            break;
        }
        let Some(parent) = cell_parts.get_mut(&key).and_then(CellPartType::as_segment_mut) else {
            break;
        };

        if parent
            .children
            .iter()
            .any(|child| child.angle_on_body == record.angle_on_body)
        {
            tracing::trace!(
                parent = key,
                part = record.part,
                angle = record.angle_on_body,
                "Duplicate attachment angle"
            );
            if ctx.skip_duplicate_angles {
                continue;
            }
        }

        parent.add_child(record.schematic(false, record.angle_on_body, record.angle_from_body));
        attached += 1;

        if ctx.symmetry == SymmetryType::Radial && !ctx.head_segment_found {
            ctx.head_segment_found = true;
            parent.add_child(record.schematic(
                true,
                record.angle_on_body + PI,
                record.angle_from_body,
            ));
        }

        if record.on_axis() {
            continue;
        }

        if ctx.symmetry.mirrors() {
            parent.add_child(record.schematic(
                true,
                TAU - record.angle_on_body,
                -record.angle_from_body,
            ));
        }
    }

    attached
}

fn check_reference(
    cell_parts: &BTreeMap<u32, CellPartType>,
    parent: u32,
    part: u32,
) -> Result<()> {
    let parent_is_segment = cell_parts
        .get(&parent)
        .and_then(CellPartType::as_segment)
        .is_some();
    if !cell_parts.contains_key(&part) || !parent_is_segment {
        return Err(SequenceError::InvalidReference { parent, part });
    }
    Ok(())
}
