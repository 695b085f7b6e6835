//! Promoter activity and regulatory unit activation.

use genetica_data::{AffinityTable, FactorLevels, Gene, Promoter, PromoterType, RegulatoryUnit};
use std::collections::BTreeMap;

/// Gain of the activation sigmoid.
pub const SIGMOID_GAIN: f32 = 10.0;
/// Combined promoter values below this produce nothing.
pub const ACTIVATION_FLOOR: f32 = 0.01;

/// Logistic curve centred on 0.5.
#[must_use]
pub fn sigmoid(value: f32) -> f32 {
    1.0 / (1.0 + (-SIGMOID_GAIN * (value - 0.5)).exp())
}

pub trait PromoterLogic {
    /// Affinity-weighted sum of factor levels acting on this promoter.
    ///
    /// Multiplicative promoters clamp the sum to [0, 1] so they act as a gate.
    fn calculate_activity(
        &self,
        index: usize,
        levels: &FactorLevels,
        affinities: &AffinityTable,
    ) -> f32;
}

impl PromoterLogic for Promoter {
    fn calculate_activity(
        &self,
        index: usize,
        levels: &FactorLevels,
        affinities: &AffinityTable,
    ) -> f32 {
        let sum: f32 = affinities
            .for_promoter(index)
            .map(|(gene, affinity)| affinity * levels.get(gene))
            .sum();
        match self.promoter_type {
            PromoterType::Additive => sum,
            PromoterType::Multiplicative => sum.clamp(0.0, 1.0),
        }
    }
}

pub trait RegulatoryUnitLogic {
    /// Combined promoter value before the sigmoid.
    fn combined_value(
        &self,
        promoters: &[Promoter],
        levels: &FactorLevels,
        affinities: &AffinityTable,
    ) -> f32;

    /// Production deltas for this unit's product factors.
    ///
    /// Reads `levels` only; the caller applies the deltas.
    fn calculate_activation(
        &self,
        promoters: &[Promoter],
        genes: &[Gene],
        levels: &FactorLevels,
        affinities: &AffinityTable,
    ) -> BTreeMap<usize, f32>;
}

impl RegulatoryUnitLogic for RegulatoryUnit {
    fn combined_value(
        &self,
        promoters: &[Promoter],
        levels: &FactorLevels,
        affinities: &AffinityTable,
    ) -> f32 {
        let mut additive = 0.0f32;
        let mut multiplicative = 1.0f32;
        for &index in &self.promoters {
            let Some(promoter) = promoters.get(index) else {
                continue;
            };
            let activity = promoter.calculate_activity(index, levels, affinities);
            match promoter.promoter_type {
                PromoterType::Additive => additive += activity,
                PromoterType::Multiplicative => multiplicative *= activity,
            }
        }
        additive * multiplicative
    }

    fn calculate_activation(
        &self,
        promoters: &[Promoter],
        genes: &[Gene],
        levels: &FactorLevels,
        affinities: &AffinityTable,
    ) -> BTreeMap<usize, f32> {
        let value = self.combined_value(promoters, levels, affinities);
        let transformed = if value < ACTIVATION_FLOOR {
            0.0
        } else {
            sigmoid(value)
        };

        let mut deltas = BTreeMap::new();
        for &index in &self.factors {
            let Some(gene) = genes.get(index) else {
                continue;
            };
            if !gene.factor_type.is_product() {
                continue;
            }
            *deltas.entry(index).or_insert(0.0) += transformed;
        }
        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genetica_data::FactorType;

    fn gene(factor_type: FactorType) -> Gene {
        Gene {
            factor_type,
            sign: 1.0,
            modifier: 1.0,
            embedding: [0.0; 3],
        }
    }

    fn promoter(promoter_type: PromoterType) -> Promoter {
        Promoter {
            promoter_type,
            sign: 1.0,
            modifier: 1.0,
            embedding: [0.0; 3],
        }
    }

    #[test]
    fn test_sigmoid_symmetry_point() {
        assert_eq!(sigmoid(0.5), 0.5);
        assert!(sigmoid(50.0) > 0.999);
        assert!(sigmoid(-50.0) < 0.001);
        assert!(sigmoid(0.6) > 0.5 && sigmoid(0.4) < 0.5);
    }

    #[test]
    fn test_additive_activity_is_weighted_sum() {
        let mut affinities = AffinityTable::default();
        affinities.insert(0, 0, 0.5);
        affinities.insert(0, 1, -0.25);
        let levels = FactorLevels(vec![1.0, 2.0]);
        let p = promoter(PromoterType::Additive);
        assert_eq!(p.calculate_activity(0, &levels, &affinities), 0.0);
        let levels = FactorLevels(vec![2.0, 2.0]);
        assert_eq!(p.calculate_activity(0, &levels, &affinities), 0.5);
    }

    #[test]
    fn test_multiplicative_activity_is_clamped() {
        let mut affinities = AffinityTable::default();
        affinities.insert(0, 0, 1.0);
        let p = promoter(PromoterType::Multiplicative);
        let high = FactorLevels(vec![3.0]);
        let low = FactorLevels(vec![-3.0]);
        assert_eq!(p.calculate_activity(0, &high, &affinities), 1.0);
        assert_eq!(p.calculate_activity(0, &low, &affinities), 0.0);
    }

    #[test]
    fn test_floor_forces_zero_production() {
        let mut affinities = AffinityTable::default();
        affinities.insert(0, 1, 1.0);
        let genes = vec![gene(FactorType::InternalProduct), gene(FactorType::Receptor)];
        let unit = RegulatoryUnit {
            promoters: vec![0],
            factors: vec![0, 1],
        };
        let levels = FactorLevels(vec![0.0, 0.009]);
        let deltas = unit.calculate_activation(
            &[promoter(PromoterType::Additive)],
            &genes,
            &levels,
            &affinities,
        );
        assert_eq!(deltas.get(&0), Some(&0.0));
        assert!(sigmoid(0.009) > 0.0);
    }

    #[test]
    fn test_only_products_receive_deltas() {
        let mut affinities = AffinityTable::default();
        affinities.insert(0, 2, 1.0);
        let genes = vec![
            gene(FactorType::InternalProduct),
            gene(FactorType::ExternalProduct),
            gene(FactorType::Receptor),
            gene(FactorType::Morphogen),
        ];
        let unit = RegulatoryUnit {
            promoters: vec![0],
            factors: vec![0, 1, 2, 3],
        };
        let levels = FactorLevels(vec![0.0, 0.0, 0.5, 0.0]);
        let deltas = unit.calculate_activation(
            &[promoter(PromoterType::Additive)],
            &genes,
            &levels,
            &affinities,
        );
        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[&0], 0.5);
        assert_eq!(deltas[&1], 0.5);
    }

    #[test]
    fn test_accumulators_combine_by_type() {
        let mut affinities = AffinityTable::default();
        affinities.insert(0, 0, 1.0);
        affinities.insert(1, 0, 1.0);
        affinities.insert(2, 0, 0.5);
        let promoters = vec![
            promoter(PromoterType::Additive),
            promoter(PromoterType::Additive),
            promoter(PromoterType::Multiplicative),
        ];
        let unit = RegulatoryUnit {
            promoters: vec![0, 1, 2],
            factors: vec![],
        };
        let levels = FactorLevels(vec![0.5]);
        // (0.5 + 0.5) * 0.25
        assert_eq!(unit.combined_value(&promoters, &levels, &affinities), 0.25);
    }

    #[test]
    fn test_multiplicative_only_unit_is_silent() {
        let mut affinities = AffinityTable::default();
        affinities.insert(0, 0, 1.0);
        let unit = RegulatoryUnit {
            promoters: vec![0],
            factors: vec![0],
        };
        let genes = vec![gene(FactorType::InternalProduct)];
        let levels = FactorLevels(vec![1.0]);
        let deltas = unit.calculate_activation(
            &[promoter(PromoterType::Multiplicative)],
            &genes,
            &levels,
            &affinities,
        );
        assert_eq!(deltas[&0], 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn sensing_unit() -> (RegulatoryUnit, Vec<Promoter>, Vec<Gene>) {
            let unit = RegulatoryUnit {
                promoters: vec![0],
                factors: vec![0, 1],
            };
            (
                unit,
                vec![promoter(PromoterType::Additive)],
                vec![gene(FactorType::Receptor), gene(FactorType::InternalProduct)],
            )
        }

        proptest! {
            #[test]
            fn test_sigmoid_is_bounded_and_monotonic(a in -5.0f32..5.0, b in -5.0f32..5.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!((0.0..=1.0).contains(&sigmoid(lo)));
                prop_assert!(sigmoid(lo) <= sigmoid(hi));
            }

            #[test]
            fn test_production_respects_floor(affinity in 0.0f32..1.0, level in 0.0f32..2.0) {
                let (unit, promoters, genes) = sensing_unit();
                let mut affinities = AffinityTable::default();
                affinities.insert(0, 0, affinity);
                let levels = FactorLevels(vec![level, 0.0]);

                let value = unit.combined_value(&promoters, &levels, &affinities);
                let deltas = unit.calculate_activation(&promoters, &genes, &levels, &affinities);
                prop_assert!(!deltas.contains_key(&0));
                let produced = deltas.get(&1).copied().unwrap_or(0.0);
                if value < ACTIVATION_FLOOR {
                    prop_assert_eq!(produced, 0.0);
                } else {
                    prop_assert_eq!(produced, sigmoid(value));
                }
            }

            #[test]
            fn test_multiplicative_activity_is_a_gate(
                affinity in -2.0f32..2.0,
                level in -5.0f32..5.0,
            ) {
                let mut affinities = AffinityTable::default();
                affinities.insert(0, 0, affinity);
                let levels = FactorLevels(vec![level]);
                let activity = promoter(PromoterType::Multiplicative)
                    .calculate_activity(0, &levels, &affinities);
                prop_assert!((0.0..=1.0).contains(&activity));
            }
        }
    }
}
