use serde::{Deserialize, Serialize};

/// RGB color of a cell part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One parent-to-child attachment rule in the body-plan tree.
///
/// `part` is the chromosome key of the attached [`CellPartType`]; the catalog
/// owns the type, the schematic only refers to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPartSchematic {
    /// Chromosome key of the attached part type.
    pub part: u32,
    /// Mirrored or radial counterpart of a decoded record.
    pub flipped: bool,
    /// Build order hint for instancing.
    pub build_priority: i32,
    /// Azimuth around the parent in radians. Decoded and mirrored angles lie in
    /// [0, 2π]; a radial counterpart is offset by π and can reach 3π.
    pub angle_on_body: f32,
    /// Elevation away from the parent surface, radians in [-π/4, π/4].
    pub angle_from_body: f32,
}

impl CellPartSchematic {
    #[must_use]
    pub fn new(
        part: u32,
        flipped: bool,
        build_priority: i32,
        angle_on_body: f32,
        angle_from_body: f32,
    ) -> Self {
        Self {
            part,
            flipped,
            build_priority,
            angle_on_body,
            angle_from_body,
        }
    }
}

/// Decoded segment traits plus the attachment rules for its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentType {
    /// Chromosome key this type was decoded from.
    pub key: u32,
    pub color: Color,
    pub start_width: f32,
    pub end_width: f32,
    pub length: f32,
    pub bone: bool,
    pub muscle: bool,
    pub nerve: bool,
    pub fat: bool,
    pub bone_density: f32,
    pub muscle_strength: f32,
    pub fat_size: f32,
    /// Attachment rules in decode order.
    pub children: Vec<CellPartSchematic>,
}

impl SegmentType {
    pub fn add_child(&mut self, schematic: CellPartSchematic) {
        self.children.push(schematic);
    }
}

/// A reusable body-part "species" decoded from one chromosome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellPartType {
    Segment(SegmentType),
}

impl CellPartType {
    /// Chromosome key of the originating chromosome.
    #[must_use]
    pub fn key(&self) -> u32 {
        match self {
            Self::Segment(segment) => segment.key,
        }
    }

    #[must_use]
    pub fn as_segment(&self) -> Option<&SegmentType> {
        match self {
            Self::Segment(segment) => Some(segment),
        }
    }

    pub fn as_segment_mut(&mut self) -> Option<&mut SegmentType> {
        match self {
            Self::Segment(segment) => Some(segment),
        }
    }

    /// Attachment rules owned by this part; empty for non-segment parts.
    #[must_use]
    pub fn children(&self) -> &[CellPartSchematic] {
        match self {
            Self::Segment(segment) => &segment.children,
        }
    }
}
