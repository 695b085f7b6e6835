//! Summary of a decoded organism, printed by the CLI as JSON.

use genetica_data::{
    FactorType, GeneRegulatoryNetwork, Genome, HeadSegment, LifeForm, ReproductionType,
    SymmetryType,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PartReport {
    pub key: u32,
    pub color: [u8; 3],
    pub start_width: f32,
    pub end_width: f32,
    pub length: f32,
    pub tissues: Vec<&'static str>,
    pub children: usize,
    pub flipped_children: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorReport {
    pub gene: usize,
    pub factor_type: FactorType,
    pub level: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganismReport {
    pub genome_fingerprint: String,
    pub symmetry: SymmetryType,
    pub reproduction: ReproductionType,
    pub size: f32,
    pub growth_energy: f32,
    pub growth_priority: f32,
    pub child_energy: f32,
    pub regeneration_fraction: f32,
    pub head: Option<HeadSegment>,
    pub parts: Vec<PartReport>,
    pub regulatory_units: usize,
    pub ticks: u64,
    pub factors: Vec<FactorReport>,
}

impl OrganismReport {
    #[must_use]
    pub fn new(genome: &Genome, lifeform: &LifeForm, ticks: u64) -> Self {
        let parts = lifeform
            .cell_parts
            .iter()
            .filter_map(|(&key, part)| part.as_segment().map(|s| (key, s)))
            .map(|(key, s)| {
                let tissues = [
                    (s.bone, "bone"),
                    (s.muscle, "muscle"),
                    (s.nerve, "nerve"),
                    (s.fat, "fat"),
                ]
                .into_iter()
                .filter_map(|(present, name)| present.then_some(name))
                .collect();
                PartReport {
                    key,
                    color: [s.color.r, s.color.g, s.color.b],
                    start_width: s.start_width,
                    end_width: s.end_width,
                    length: s.length,
                    tissues,
                    children: s.children.len(),
                    flipped_children: s.children.iter().filter(|c| c.flipped).count(),
                }
            })
            .collect();

        let factors = lifeform
            .grn
            .genes
            .iter()
            .enumerate()
            .map(|(gene, g)| FactorReport {
                gene,
                factor_type: g.factor_type,
                level: lifeform.grn.factor_levels.get(gene),
            })
            .collect();

        Self {
            genome_fingerprint: genome.fingerprint(),
            symmetry: lifeform.symmetry_type,
            reproduction: lifeform.reproduction_type,
            size: lifeform.size,
            growth_energy: lifeform.growth_energy,
            growth_priority: lifeform.growth_priority,
            child_energy: lifeform.child_energy,
            regeneration_fraction: lifeform.regeneration_fraction,
            head: lifeform.head,
            parts,
            regulatory_units: lifeform.grn.units.len(),
            ticks,
            factors,
        }
    }
}

/// Holds every receptor and morphogen at `level`, standing in for physiology.
pub fn stimulate(grn: &mut GeneRegulatoryNetwork, level: f32) {
    let inputs: Vec<usize> = grn
        .genes
        .iter()
        .enumerate()
        .filter(|(_, g)| !g.factor_type.is_product())
        .map(|(i, _)| i)
        .collect();
    for gene in inputs {
        grn.factor_levels.set(gene, level);
    }
}
