//! Session statistics

use super::round::RoundOutcome;

/// Running totals across rounds of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub rounds: usize,
    pub correct: usize,
    /// Sum of turns used over won rounds
    pub total_score: usize,
    /// Fewest turns used in a won round
    pub best: Option<usize>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished round
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        if outcome.won {
            self.correct += 1;
            self.total_score += outcome.turns_used;
            self.best = Some(
                self.best
                    .map_or(outcome.turns_used, |best| best.min(outcome.turns_used)),
            );
        }
    }

    /// Average turns per won round
    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        (self.correct > 0).then(|| self.total_score as f64 / self.correct as f64)
    }

    /// Fraction of rounds won, 0.0 before any round
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.correct as f64 / self.rounds as f64
        }
    }
}
