use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Symbols of the genome alphabet, indexed by ordinal.
pub const ALPHABET: [char; 4] = ['0', '1', '2', '3'];
/// Number of distinct bases.
pub const ALPHABET_SIZE: u32 = ALPHABET.len() as u32;
/// Key of the organism-level header chromosome.
pub const HEADER_KEY: u32 = 0;

/// Errors raised while building a genome from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    /// A symbol outside the base alphabet.
    #[error("invalid base {symbol:?} at position {position}")]
    InvalidBase { position: usize, symbol: char },

    /// A chromosome failed to parse.
    #[error("chromosome {key}: {source}")]
    InvalidChromosome {
        key: u32,
        #[source]
        source: Box<GenomeError>,
    },
}

/// One genome entry: an ordered run of base ordinals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Chromosome {
    bases: Vec<u8>,
}

impl Chromosome {
    /// Parses a chromosome from its textual form.
    pub fn parse(text: &str) -> Result<Self, GenomeError> {
        let bases = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                ALPHABET
                    .iter()
                    .position(|&b| b == symbol)
                    .map(|ordinal| ordinal as u8)
                    .ok_or(GenomeError::InvalidBase { position, symbol })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bases })
    }

    /// Builds a chromosome from raw ordinals, reducing each modulo the alphabet size.
    #[must_use]
    pub fn from_ordinals(ordinals: &[u8]) -> Self {
        Self {
            bases: ordinals.iter().map(|o| o % ALPHABET_SIZE as u8).collect(),
        }
    }

    /// Base ordinals in reading order.
    #[must_use]
    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bases {
            write!(f, "{}", ALPHABET[b as usize])?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Chromosome {
    type Error = GenomeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Chromosome> for String {
    fn from(value: Chromosome) -> Self {
        value.to_string()
    }
}

/// Complete genome of an organism, keyed by chromosome index.
///
/// Key 0 is the header; every other key is a candidate cell part type.
/// Iteration is always in ascending key order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome {
    chromosomes: BTreeMap<u32, Chromosome>,
}

impl Genome {
    #[must_use]
    pub fn from_chromosomes(chromosomes: BTreeMap<u32, Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Parses `(key, text)` pairs into a genome.
    pub fn parse<'a, I>(entries: I) -> Result<Self, GenomeError>
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        let mut chromosomes = BTreeMap::new();
        for (key, text) in entries {
            let chromosome =
                Chromosome::parse(text).map_err(|e| GenomeError::InvalidChromosome {
                    key,
                    source: Box::new(e),
                })?;
            chromosomes.insert(key, chromosome);
        }
        Ok(Self { chromosomes })
    }

    #[must_use]
    pub fn header(&self) -> Option<&Chromosome> {
        self.chromosomes.get(&HEADER_KEY)
    }

    #[must_use]
    pub fn get(&self, key: u32) -> Option<&Chromosome> {
        self.chromosomes.get(&key)
    }

    #[must_use]
    pub fn contains(&self, key: u32) -> bool {
        self.chromosomes.contains_key(&key)
    }

    /// All chromosomes in key order, header included.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Chromosome)> {
        self.chromosomes.iter().map(|(k, c)| (*k, c))
    }

    /// Chromosomes eligible to become cell part types, in key order.
    pub fn non_header(&self) -> impl Iterator<Item = (u32, &Chromosome)> {
        self.iter().filter(|(k, _)| *k != HEADER_KEY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// SHA-256 over the key-ordered genome content.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (key, chromosome) in self.iter() {
            hasher.update(key.to_le_bytes());
            hasher.update((chromosome.len() as u64).to_le_bytes());
            hasher.update(chromosome.bases());
        }
        hex::encode(hasher.finalize())
    }

    /// Serialize genome to hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    /// Deserialize genome from hex string.
    pub fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(hex_str)?;
        let genome = serde_json::from_slice(&bytes)?;
        Ok(genome)
    }
}
