//! Gene regulatory network dynamics.
//!
//! Affinities between promoters and factors are computed once per network.
//! Each tick every regulatory unit reads the same snapshot of factor levels;
//! deltas are applied only after all units have been evaluated, in unit order,
//! so serial and parallel updates produce identical levels.

pub mod activation;
pub mod decode;

pub use activation::{sigmoid, PromoterLogic, RegulatoryUnitLogic, ACTIVATION_FLOOR, SIGMOID_GAIN};
pub use decode::{decode_grn, GENE_SIZE, PROMOTER_SIZE};

use crate::config::GrnConfig;
use genetica_data::{FactorLevels, Gene, GeneRegulatoryNetwork, Promoter};
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Affinity of one promoter-factor pair.
///
/// Falls off linearly with embedding distance and vanishes at `radius`.
#[must_use]
pub fn affinity(promoter: &Promoter, gene: &Gene, radius: f32) -> f32 {
    let distance = promoter
        .embedding
        .iter()
        .zip(&gene.embedding)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f32>()
        .sqrt();
    promoter.sign * gene.sign * gene.modifier * (1.0 - distance / radius).max(0.0)
}

pub trait GrnLogic {
    /// Rebuilds the affinity table for every promoter and factor referenced by a unit.
    fn compute_affinities(&mut self, config: &GrnConfig);

    /// Advances factor levels by one tick.
    fn update(&mut self);

    /// Same as [`GrnLogic::update`], evaluating units on the rayon pool.
    fn update_parallel(&mut self);

    /// Zeroes every factor level.
    fn reset_levels(&mut self);
}

impl GrnLogic for GeneRegulatoryNetwork {
    fn compute_affinities(&mut self, config: &GrnConfig) {
        let promoters: BTreeSet<usize> = self
            .units
            .iter()
            .flat_map(|u| u.promoters.iter().copied())
            .filter(|&p| p < self.promoters.len())
            .collect();
        let genes: BTreeSet<usize> = self
            .units
            .iter()
            .flat_map(|u| u.factors.iter().copied())
            .filter(|&g| g < self.genes.len())
            .collect();

        self.affinities.clear();
        for &p in &promoters {
            for &g in &genes {
                let weight = affinity(&self.promoters[p], &self.genes[g], config.affinity_radius);
                self.affinities.insert(p, g, weight);
            }
        }
        tracing::trace!(pairs = self.affinities.len(), "Computed affinities");
    }

    fn update(&mut self) {
        let deltas: Vec<BTreeMap<usize, f32>> = self
            .units
            .iter()
            .map(|unit| {
                unit.calculate_activation(
                    &self.promoters,
                    &self.genes,
                    &self.factor_levels,
                    &self.affinities,
                )
            })
            .collect();
        apply_deltas(&mut self.factor_levels, deltas);
    }

    #[cfg(feature = "rayon")]
    fn update_parallel(&mut self) {
        let deltas: Vec<BTreeMap<usize, f32>> = self
            .units
            .par_iter()
            .map(|unit| {
                unit.calculate_activation(
                    &self.promoters,
                    &self.genes,
                    &self.factor_levels,
                    &self.affinities,
                )
            })
            .collect();
        apply_deltas(&mut self.factor_levels, deltas);
    }

    #[cfg(not(feature = "rayon"))]
    fn update_parallel(&mut self) {
        self.update();
    }

    fn reset_levels(&mut self) {
        self.factor_levels = FactorLevels::zeroed(self.genes.len());
    }
}

fn apply_deltas(levels: &mut FactorLevels, deltas: Vec<BTreeMap<usize, f32>>) {
    for unit_deltas in deltas {
        for (gene, delta) in unit_deltas {
            levels.add(gene, delta);
        }
    }
}

/// Rebuilds the affinity table of `grn` with the radius from `config`.
pub fn compute_affinities(grn: &mut GeneRegulatoryNetwork, config: &GrnConfig) {
    grn.compute_affinities(config);
}

/// Advances the network by one tick.
pub fn update_grn(grn: &mut GeneRegulatoryNetwork) {
    grn.update();
}

/// Advances the network by one tick, evaluating units in parallel.
pub fn update_grn_parallel(grn: &mut GeneRegulatoryNetwork) {
    grn.update_parallel();
}
