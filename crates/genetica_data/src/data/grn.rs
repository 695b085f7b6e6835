use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category of a regulatory factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorType {
    /// Product that stays inside the cell.
    InternalProduct,
    /// Product secreted into the environment.
    ExternalProduct,
    /// Input sensed from outside the cell.
    Receptor,
    /// Positional signal supplied by the body.
    Morphogen,
}

impl FactorType {
    /// Indexed by the factor type base.
    pub const ALL: [Self; 4] = [
        Self::InternalProduct,
        Self::ExternalProduct,
        Self::Receptor,
        Self::Morphogen,
    ];

    /// Whether regulatory units produce this factor.
    #[must_use]
    pub fn is_product(self) -> bool {
        matches!(self, Self::InternalProduct | Self::ExternalProduct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoterType {
    Additive,
    Multiplicative,
}

/// A tracked expression product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub factor_type: FactorType,
    /// +1.0 or -1.0.
    pub sign: f32,
    /// Strength in [0, 1).
    pub modifier: f32,
    pub embedding: [f32; 3],
}

/// A regulatory element gating production of factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promoter {
    pub promoter_type: PromoterType,
    /// +1.0 or -1.0.
    pub sign: f32,
    /// Strength in [0, 1). Decoded and kept in the genome format, but
    /// affinity uses only the factor's modifier.
    pub modifier: f32,
    pub embedding: [f32; 3],
}

/// Promoters and factors combined into one production signal.
///
/// Holds indices into the owning network's arenas, never the elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryUnit {
    pub promoters: Vec<usize>,
    pub factors: Vec<usize>,
}

/// Promoter-factor affinity weights keyed by `(promoter, gene)` index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(usize, usize, f32)>", into = "Vec<(usize, usize, f32)>")]
pub struct AffinityTable {
    weights: BTreeMap<(usize, usize), f32>,
}

impl From<Vec<(usize, usize, f32)>> for AffinityTable {
    fn from(entries: Vec<(usize, usize, f32)>) -> Self {
        Self {
            weights: entries.into_iter().map(|(p, g, a)| ((p, g), a)).collect(),
        }
    }
}

impl From<AffinityTable> for Vec<(usize, usize, f32)> {
    fn from(table: AffinityTable) -> Self {
        table
            .weights
            .into_iter()
            .map(|((p, g), a)| (p, g, a))
            .collect()
    }
}

impl AffinityTable {
    /// Affinity of a pair, 0.0 when never computed.
    #[must_use]
    pub fn get(&self, promoter: usize, gene: usize) -> f32 {
        self.weights.get(&(promoter, gene)).copied().unwrap_or(0.0)
    }

    pub fn insert(&mut self, promoter: usize, gene: usize, affinity: f32) {
        self.weights.insert((promoter, gene), affinity);
    }

    /// Stored `(gene, affinity)` pairs for one promoter, in gene order.
    pub fn for_promoter(&self, promoter: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.weights
            .range((promoter, 0)..=(promoter, usize::MAX))
            .map(|(&(_, gene), &affinity)| (gene, affinity))
    }

    pub fn clear(&mut self) {
        self.weights.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Expression level per gene index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorLevels(pub Vec<f32>);

impl FactorLevels {
    #[must_use]
    pub fn zeroed(genes: usize) -> Self {
        Self(vec![0.0; genes])
    }

    /// Level of a gene, 0.0 for unknown indices.
    #[must_use]
    pub fn get(&self, gene: usize) -> f32 {
        self.0.get(gene).copied().unwrap_or(0.0)
    }

    /// Sets an externally supplied level (receptors, morphogens).
    pub fn set(&mut self, gene: usize, level: f32) {
        if let Some(slot) = self.0.get_mut(gene) {
            *slot = level;
        }
    }

    pub fn add(&mut self, gene: usize, delta: f32) {
        if let Some(slot) = self.0.get_mut(gene) {
            *slot += delta;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Gene and promoter arenas, the units referencing them, and the live state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneRegulatoryNetwork {
    pub genes: Vec<Gene>,
    pub promoters: Vec<Promoter>,
    pub units: Vec<RegulatoryUnit>,
    pub affinities: AffinityTable,
    pub factor_levels: FactorLevels,
}
