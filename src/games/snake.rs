//! Snake high score tracking.

use super::event::ScoreEvent;
use tracing::debug;

/// Scores the snake driver submits, in order.
pub const DEMO_SCORES: [u32; 2] = [5, 10];

/// Running maximum of every score submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTracker {
    high_score: u32,
}

impl HighScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the high score if `candidate` beats it.
    ///
    /// Ties do not count. Returns `None` and leaves the tracker untouched
    /// when the candidate does not strictly exceed the current high score.
    pub fn update_high_score(&mut self, candidate: u32) -> Option<ScoreEvent> {
        if candidate > self.high_score {
            self.high_score = candidate;
            Some(ScoreEvent::NewHighScore {
                high_score: candidate,
            })
        } else {
            None
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}

/// Submit [`DEMO_SCORES`] to a fresh tracker.
pub fn run_demo() -> Vec<ScoreEvent> {
    let mut tracker = HighScoreTracker::new();
    let events: Vec<ScoreEvent> = DEMO_SCORES
        .iter()
        .filter_map(|&score| tracker.update_high_score(score))
        .collect();
    debug!(high_score = tracker.high_score(), "snake demo finished");
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_starts_at_zero() {
        assert_eq!(HighScoreTracker::new().high_score(), 0);
    }

    #[test]
    fn test_higher_score_replaces() {
        let mut tracker = HighScoreTracker::new();
        assert_eq!(
            tracker.update_high_score(5),
            Some(ScoreEvent::NewHighScore { high_score: 5 })
        );
        assert_eq!(tracker.high_score(), 5);
    }

    #[test]
    fn test_equal_score_is_ignored() {
        let mut tracker = HighScoreTracker::new();
        tracker.update_high_score(7);
        assert_eq!(tracker.update_high_score(7), None);
        assert_eq!(tracker.high_score(), 7);
    }

    #[test]
    fn test_zero_never_reports() {
        let mut tracker = HighScoreTracker::new();
        assert_eq!(tracker.update_high_score(0), None);
        assert_eq!(tracker.high_score(), 0);
    }

    #[test]
    fn test_lower_score_is_ignored() {
        let mut tracker = HighScoreTracker::new();
        tracker.update_high_score(5);
        tracker.update_high_score(10);
        assert_eq!(tracker.update_high_score(3), None);
        assert_eq!(tracker.high_score(), 10);
    }

    #[test]
    fn test_run_demo() {
        assert_eq!(
            run_demo(),
            vec![
                ScoreEvent::NewHighScore { high_score: 5 },
                ScoreEvent::NewHighScore { high_score: 10 },
            ]
        );
    }
}
