//! Enumeration of every code for a configuration
//!
//! Codes are numbered `0..K^N` in lexicographic order: index `i` is written in
//! base K, most significant digit first, and each digit `d` becomes peg `d + 1`.
//! Index 0 is `[1, 1, .., 1]`, the last index is `[K, K, .., K]`.

use crate::core::{Code, GameConfig, MAX_POSITIONS, Peg};
use rayon::prelude::*;
use std::iter::FusedIterator;

/// Below this many indices per task rayon stops splitting
const MIN_CHUNK: usize = 1024;

/// The Cartesian product `[1, K]^N`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpace {
    positions: usize,
    colors: Peg,
    size: usize,
}

impl CodeSpace {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            positions: config.positions(),
            colors: config.colors(),
            size: config.code_space_size(),
        }
    }

    /// Number of codes, K^N
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Write the pegs of code `index` into `out[..positions]`
    fn decode_into(&self, mut index: usize, out: &mut [Peg]) {
        let base = usize::from(self.colors);
        for slot in out[..self.positions].iter_mut().rev() {
            *slot = (index % base) as Peg + 1;
            index /= base;
        }
    }

    /// The code at `index`, or `None` past the end
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    /// use mastermind_solver::solver::CodeSpace;
    ///
    /// let space = CodeSpace::new(&GameConfig::default());
    /// assert_eq!(space.code_at(0).unwrap().pegs(), &[1, 1, 1, 1]);
    /// assert_eq!(space.code_at(7).unwrap().pegs(), &[1, 1, 2, 2]);
    /// assert!(space.code_at(1296).is_none());
    /// ```
    #[must_use]
    pub fn code_at(&self, index: usize) -> Option<Code> {
        if index >= self.size {
            return None;
        }
        let mut pegs = vec![0; self.positions];
        self.decode_into(index, &mut pegs);
        Some(Code::from_pegs(pegs))
    }

    /// Iterate over every code in index order
    #[must_use]
    pub fn iter(&self) -> CodeSpaceIter {
        CodeSpaceIter {
            pegs: vec![1; self.positions],
            colors: self.colors,
            remaining: self.size,
        }
    }

    /// Every code for which `keep` holds, in index order
    ///
    /// The index range is split across rayon workers; each worker decodes its
    /// own indices into a stack buffer and only allocates for kept codes.
    /// Results are concatenated in index order, so the output is identical to
    /// a sequential scan.
    pub fn par_filter<F>(&self, keep: F) -> Vec<Code>
    where
        F: Fn(&[Peg]) -> bool + Sync,
    {
        (0..self.size)
            .into_par_iter()
            .with_min_len(MIN_CHUNK)
            .filter_map(|index| {
                let mut buf = [0; MAX_POSITIONS];
                let pegs = &mut buf[..self.positions];
                self.decode_into(index, pegs);
                keep(pegs).then(|| Code::from_pegs(pegs.to_vec()))
            })
            .collect()
    }
}

/// Odometer over `[1, K]^N`, last position turning fastest
#[derive(Debug, Clone)]
pub struct CodeSpaceIter {
    pegs: Vec<Peg>,
    colors: Peg,
    remaining: usize,
}

impl Iterator for CodeSpaceIter {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.remaining == 0 {
            return None;
        }
        let current = Code::from_pegs(self.pegs.clone());
        self.remaining -= 1;

        for peg in self.pegs.iter_mut().rev() {
            if *peg < self.colors {
                *peg += 1;
                break;
            }
            *peg = 1;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CodeSpaceIter {}

impl FusedIterator for CodeSpaceIter {}
