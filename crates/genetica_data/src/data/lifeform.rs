use crate::data::cell_part::CellPartType;
use crate::data::grn::GeneRegulatoryNetwork;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Organism-level rule for automatic duplication of attachment records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SymmetryType {
    /// No duplication.
    #[default]
    None,
    /// Every segment builds mirrored children.
    Local,
    /// One mirror line down the main axis.
    Global,
    /// A single rotated copy around the head.
    Radial,
}

impl SymmetryType {
    /// Indexed by the header's symmetry base.
    pub const ALL: [Self; 4] = [Self::None, Self::Local, Self::Global, Self::Radial];

    /// Whether attachment records get a mirrored counterpart.
    #[must_use]
    pub fn mirrors(self) -> bool {
        matches!(self, Self::Global | Self::Local)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReproductionType {
    Sexual,
    #[default]
    Asexual,
}

/// The part type anchoring the body plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadSegment {
    /// Chromosome key of the head part type.
    pub part: u32,
    pub size: f32,
    pub centered: bool,
    pub build_priority: i32,
}

/// A decoded organism: header traits, part catalog and regulatory network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeForm {
    pub symmetry_type: SymmetryType,
    pub reproduction_type: ReproductionType,
    pub size: f32,
    pub growth_energy: f32,
    pub growth_priority: f32,
    pub child_energy: f32,
    pub regeneration_fraction: f32,
    /// Decoded part types keyed by chromosome key.
    pub cell_parts: BTreeMap<u32, CellPartType>,
    pub head: Option<HeadSegment>,
    pub grn: GeneRegulatoryNetwork,
}

impl Default for LifeForm {
    fn default() -> Self {
        Self {
            symmetry_type: SymmetryType::None,
            reproduction_type: ReproductionType::Asexual,
            size: 0.5,
            growth_energy: 5.0,
            growth_priority: 0.1,
            child_energy: 0.05,
            regeneration_fraction: 0.0,
            cell_parts: BTreeMap::new(),
            head: None,
            grn: GeneRegulatoryNetwork::default(),
        }
    }
}

impl LifeForm {
    #[must_use]
    pub fn cell_part(&self, key: u32) -> Option<&CellPartType> {
        self.cell_parts.get(&key)
    }

    /// Total number of attachment rules across the catalog.
    #[must_use]
    pub fn schematic_count(&self) -> usize {
        self.cell_parts.values().map(|p| p.children().len()).sum()
    }
}
