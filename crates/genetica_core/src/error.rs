//! Error types for genome decoding.
//!
//! Decode exhaustion and malformed headers are fatal for the organism being
//! built. Invalid references only stop the attachment loop of one chromosome
//! and are reported through logging, never returned from [`crate::sequencer::sequence`].

use genetica_data::GenomeError;
use thiserror::Error;

/// Main error type for sequencing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The cursor would read past the end of its chromosome.
    #[error("decode exhausted: needed {needed} bases, {remaining} remaining")]
    DecodeExhaustion { needed: usize, remaining: usize },

    /// A range read wider than the decoder supports.
    #[error("range width {width} exceeds the maximum of {max}")]
    RangeTooWide { width: usize, max: usize },

    /// Header chromosome missing or shorter than the fixed trait block.
    #[error("malformed header: {len} bases, {required} required")]
    MalformedHeader { len: usize, required: usize },

    /// An attachment record names a missing part or a non-segment parent.
    #[error("invalid reference: parent {parent} cannot attach part {part}")]
    InvalidReference { parent: u32, part: u32 },

    /// Genome text contained symbols outside the alphabet.
    #[error(transparent)]
    Genome(#[from] GenomeError),

    /// Error raised while decoding a specific chromosome.
    #[error("chromosome {key}: {source}")]
    Chromosome {
        key: u32,
        #[source]
        source: Box<SequenceError>,
    },
}

/// Result type alias for sequencing operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

impl SequenceError {
    /// Tags the error with the chromosome it came from.
    #[must_use]
    pub fn in_chromosome(self, key: u32) -> Self {
        Self::Chromosome {
            key,
            source: Box::new(self),
        }
    }

    /// Whether the organism cannot be instantiated because of this error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::InvalidReference { .. } => false,
            Self::Chromosome { source, .. } => source.is_fatal(),
            _ => true,
        }
    }
}
