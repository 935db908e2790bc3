//! Flappy Bird session bookkeeping.
//!
//! A session tracks a score and whether the game is over. Ending the game is
//! one-way: once [`SessionState::Ended`], a session never becomes active
//! again. Flapping and scoring are still accepted after the end.

use super::event::ScoreEvent;
use tracing::debug;

/// Lifecycle of a flappy session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Ended,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlapScoreSession {
    is_game_over: bool,
    score: u32,
}

impl FlapScoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a flap. Leaves score and game-over flag untouched.
    pub fn flap(&self) -> ScoreEvent {
        ScoreEvent::Flapped
    }

    /// Add one point. Nothing is reported.
    pub fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Mark the game over and report the final score.
    ///
    /// Repeated calls report again with the current score but do not change
    /// the state.
    pub fn end_game(&mut self) -> ScoreEvent {
        self.is_game_over = true;
        ScoreEvent::GameOver { score: self.score }
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        if self.is_game_over {
            SessionState::Ended
        } else {
            SessionState::Active
        }
    }
}

/// Flap once, score once, then end the game.
pub fn run_demo() -> Vec<ScoreEvent> {
    let mut session = FlapScoreSession::new();
    let mut events = vec![session.flap()];
    session.increment_score();
    events.push(session.end_game());
    debug!(final_score = session.score(), "flappy demo finished");
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = FlapScoreSession::new();
        assert!(!session.is_game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_flap_does_not_mutate() {
        let session = FlapScoreSession::new();
        assert_eq!(session.flap(), ScoreEvent::Flapped);
        assert_eq!(session, FlapScoreSession::new());
    }

    #[test]
    fn test_increment_score_is_silent() {
        let mut session = FlapScoreSession::new();
        session.increment_score();
        session.increment_score();
        assert_eq!(session.score(), 2);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_end_game_reports_score() {
        let mut session = FlapScoreSession::new();
        session.increment_score();
        assert_eq!(session.end_game(), ScoreEvent::GameOver { score: 1 });
        assert!(session.is_game_over());
        assert_eq!(session.state(), SessionState::Ended);
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let mut session = FlapScoreSession::new();
        session.end_game();
        let after_first = session.clone();
        assert_eq!(session.end_game(), ScoreEvent::GameOver { score: 0 });
        assert_eq!(session, after_first);
    }

    #[test]
    fn test_scoring_after_game_over_is_permitted() {
        let mut session = FlapScoreSession::new();
        session.end_game();
        session.increment_score();
        assert_eq!(session.flap(), ScoreEvent::Flapped);
        assert_eq!(session.score(), 1);
        assert!(session.is_game_over());
    }

    #[test]
    fn test_run_demo() {
        assert_eq!(
            run_demo(),
            vec![ScoreEvent::Flapped, ScoreEvent::GameOver { score: 1 }]
        );
    }
}
