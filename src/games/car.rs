//! Car game scoring: a counter that goes up one point at a time.

use super::event::ScoreEvent;
use tracing::debug;

/// Number of points the car driver scores.
pub const DEMO_INCREMENTS: u32 = 5;

/// Running score for the car game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    score: u32,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point and report the new total.
    pub fn increment(&mut self) -> ScoreEvent {
        self.score = self.score.saturating_add(1);
        ScoreEvent::ScoreIncreased { score: self.score }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Score [`DEMO_INCREMENTS`] points on a fresh counter.
pub fn run_demo() -> Vec<ScoreEvent> {
    let mut counter = ScoreCounter::new();
    let events: Vec<ScoreEvent> = (0..DEMO_INCREMENTS).map(|_| counter.increment()).collect();
    debug!(final_score = counter.score(), "car demo finished");
    events
}
