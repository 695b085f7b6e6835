//! Base decoding primitives.
//!
//! A [`Decoder`] is a forward-only cursor over one chromosome. Every read
//! consumes exactly the number of bases it asks for, or fails with
//! [`SequenceError::DecodeExhaustion`] without consuming anything.

use crate::error::{Result, SequenceError};
use genetica_data::{Chromosome, ALPHABET_SIZE};
use std::collections::BTreeMap;

/// Curvature of [`Decoder::read_exp_base_range`].
pub const EXP_RANGE_GAIN: f32 = 4.0;

/// Widest range a single read may span.
pub const MAX_RANGE_WIDTH: usize = 24;

/// Largest `f32` below 1.0. Wide reads round up to 1.0 without this cap.
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

fn to_fraction(digits: u64, scale: u64) -> f32 {
    ((digits as f64 / scale as f64) as f32).min(BELOW_ONE)
}

pub struct Decoder<'a> {
    bases: &'a [u8],
    position: usize,
    /// Last unique read per width.
    last_unique: BTreeMap<usize, u64>,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub fn new(chromosome: &'a Chromosome) -> Self {
        Self::from_bases(chromosome.bases())
    }

    fn from_bases(bases: &'a [u8]) -> Self {
        Self {
            bases,
            position: 0,
            last_unique: BTreeMap::new(),
        }
    }

    /// Bases consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bases left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bases.len() - self.position
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Next base without consuming it.
    #[must_use]
    pub fn peek_base(&self) -> Option<u8> {
        self.bases.get(self.position).copied()
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(SequenceError::DecodeExhaustion { needed, remaining });
        }
        Ok(())
    }

    /// Consumes one base and returns its ordinal.
    pub fn read_base(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let base = self.bases[self.position];
        self.position += 1;
        Ok(base)
    }

    /// Consumes `n` bases as a base-4 integer, most significant first.
    fn read_digits(&mut self, n: usize) -> Result<u64> {
        if n > MAX_RANGE_WIDTH {
            return Err(SequenceError::RangeTooWide {
                width: n,
                max: MAX_RANGE_WIDTH,
            });
        }
        self.ensure(n)?;
        let digits = self.bases[self.position..self.position + n]
            .iter()
            .fold(0u64, |acc, &b| acc * u64::from(ALPHABET_SIZE) + u64::from(b));
        self.position += n;
        Ok(digits)
    }

    fn scale(n: usize) -> u64 {
        u64::from(ALPHABET_SIZE).pow(n as u32)
    }

    /// Consumes `n` bases as a fraction in [0, 1).
    pub fn read_base_range(&mut self, n: usize) -> Result<f32> {
        let digits = self.read_digits(n)?;
        Ok(to_fraction(digits, Self::scale(n)))
    }

    /// Like [`Self::read_base_range`] but bent towards small values.
    pub fn read_exp_base_range(&mut self, n: usize) -> Result<f32> {
        let x = self.read_base_range(n)?;
        Ok((((EXP_RANGE_GAIN * x).exp() - 1.0) / (EXP_RANGE_GAIN.exp() - 1.0)).min(BELOW_ONE))
    }

    /// Like [`Self::read_base_range`] but never repeats the previous unique
    /// read of the same width: a repeat is bumped to the next value, wrapping.
    pub fn read_unique_base_range(&mut self, n: usize) -> Result<f32> {
        let scale = Self::scale(n);
        let mut digits = self.read_digits(n)?;
        if self.last_unique.get(&n) == Some(&digits) {
            digits = (digits + 1) % scale;
        }
        self.last_unique.insert(n, digits);
        Ok(to_fraction(digits, scale))
    }
}
