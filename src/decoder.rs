//! Chromosome decoding.
//!
//! [`Decoder`] is the bridge between bit genotypes and the numeric
//! domains rank functions actually care about: it reads consecutive bit
//! slices off a chromosome and turns them into integers or floats scaled
//! to a caller-chosen interval.

use crate::chromosome::Chromosome;

/// Sequential reader over a chromosome's bits.
///
/// Each decode call consumes the next `nbits` genes, most significant
/// bit first, and advances an internal cursor. A typical rank function
/// decodes a handful of parameters from fixed-width fields:
///
/// ```
/// use bitga::{Chromosome, Decoder};
///
/// let c = Chromosome::new(vec![true, false, true, true]);
/// let mut decoder = Decoder::new(&c);
/// assert_eq!(decoder.decode_u64(2), 0b10);
/// assert_eq!(decoder.decode_u64(2), 0b11);
/// assert_eq!(decoder.remaining(), 0);
/// ```
pub struct Decoder<'a> {
    chromosome: &'a Chromosome,
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Starts decoding `chromosome` from its first bit.
    pub fn new(chromosome: &'a Chromosome) -> Self {
        Self { chromosome, pos: 0 }
    }

    /// Bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.chromosome.len() - self.pos
    }

    /// Reads the next `nbits` bits as an unsigned integer, MSB first.
    ///
    /// # Panics
    /// Panics if `nbits` is zero, exceeds 64, or overruns the chromosome.
    pub fn decode_u64(&mut self, nbits: usize) -> u64 {
        assert!(nbits >= 1 && nbits <= 64, "nbits must be in 1..=64");
        assert!(
            nbits <= self.remaining(),
            "decode overruns the chromosome: {} bits requested, {} remaining",
            nbits,
            self.remaining()
        );

        let mut value = 0u64;
        for i in self.pos..self.pos + nbits {
            value = (value << 1) | u64::from(self.chromosome.get(i));
        }
        self.pos += nbits;
        value
    }

    /// Reads the next `nbits` bits and scales them linearly onto the
    /// closed interval `[lo, hi]`: all-zero bits map to `lo`, all-one
    /// bits to `hi`.
    ///
    /// # Panics
    /// Same preconditions as [`decode_u64`](Decoder::decode_u64).
    pub fn decode_f64(&mut self, nbits: usize, lo: f64, hi: f64) -> f64 {
        let raw = self.decode_u64(nbits);
        let max = if nbits == 64 {
            u64::MAX
        } else {
            (1u64 << nbits) - 1
        };
        lo + (hi - lo) * (raw as f64 / max as f64)
    }
}
