//! Score accumulation and outcome evaluation

use serde::{Deserialize, Serialize};

/// Running score for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    score: u32,
    collected: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one collected item's points, returning the new total
    pub fn add(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.collected += 1;
        self.score
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of items collected
    pub fn collected(&self) -> u32 {
        self.collected
    }
}

/// A session succeeds when the final score reaches the threshold
#[inline]
pub fn evaluate(score: u32, threshold: u32) -> bool {
    score >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(!evaluate(49, 50));
        assert!(evaluate(50, 50));
        assert!(evaluate(51, 50));
        assert!(evaluate(80, 80));
        assert!(!evaluate(79, 80));
    }

    #[test]
    fn test_scoreboard_accumulates_and_resets() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.add(10), 10);
        assert_eq!(board.add(15), 25);
        assert_eq!(board.collected(), 2);

        board.reset();
        assert_eq!(board.score(), 0);
        assert_eq!(board.collected(), 0);
    }
}
