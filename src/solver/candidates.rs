//! The set of codes still consistent with a round's feedback

use crate::core::{BoardEntry, Code, Feedback};
use rand::Rng;
use rand::seq::IndexedRandom;

/// How many candidates a display shows by default
pub const DISPLAY_CAP: usize = 20;

/// Codes consistent with every recorded (guess, feedback) pair, in code-space order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    pub(crate) const fn from_codes(codes: Vec<Code>) -> Self {
        Self { codes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// All candidates
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// The first `cap` candidates, for display
    #[must_use]
    pub fn preview(&self, cap: usize) -> &[Code] {
        &self.codes[..self.codes.len().min(cap)]
    }

    /// A uniformly random candidate, `None` when empty
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Code> {
        self.codes.choose(rng)
    }

    /// Keep only candidates that would have produced `feedback` for `guess`
    ///
    /// Applying this once per board entry gives the same set as a full rescan.
    #[must_use]
    pub fn narrow(&self, guess: &Code, feedback: Feedback) -> Self {
        let codes = self
            .codes
            .iter()
            .filter(|candidate| Feedback::tally(guess.pegs(), candidate.pegs()) == feedback)
            .cloned()
            .collect();
        Self { codes }
    }

    /// Narrow by a recorded board entry
    #[must_use]
    pub fn narrow_by(&self, entry: &BoardEntry) -> Self {
        self.narrow(&entry.guess, entry.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set(codes: &[&[u8]]) -> CandidateSet {
        CandidateSet::from_codes(codes.iter().map(|p| Code::from_pegs(p.to_vec())).collect())
    }

    #[test]
    fn preview_caps_length() {
        let candidates = set(&[&[1, 1], &[1, 2], &[2, 1]]);
        assert_eq!(candidates.preview(2).len(), 2);
        assert_eq!(candidates.preview(DISPLAY_CAP).len(), 3);
    }

    #[test]
    fn sample_returns_member() {
        let candidates = set(&[&[1, 1], &[1, 2], &[2, 1]]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pick = candidates.sample(&mut rng).unwrap();
            assert!(candidates.contains(pick));
        }
    }

    #[test]
    fn sample_of_empty_set_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(CandidateSet::default().sample(&mut rng).is_none());
    }

    #[test]
    fn narrow_keeps_consistent_codes() {
        let candidates = set(&[&[1, 1], &[1, 2], &[2, 1], &[2, 2]]);
        let guess = Code::from_pegs(vec![1, 2]);

        let narrowed = candidates.narrow(&guess, Feedback::new(0, 2));
        assert_eq!(narrowed, set(&[&[2, 1]]));

        let narrowed = candidates.narrow(&guess, Feedback::new(1, 0));
        assert_eq!(narrowed, set(&[&[1, 1], &[2, 2]]));
    }
}
