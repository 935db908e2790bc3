//! Report events produced by the score components.

use serde::Serialize;
use std::fmt;

/// Something a score component wants reported to the player.
///
/// Components return these instead of printing; the caller decides whether
/// they become console lines, JSON records, or test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScoreEvent {
    /// The car score went up.
    ScoreIncreased { score: u32 },
    /// The bird flapped.
    Flapped,
    /// The flappy session ended with this score.
    GameOver { score: u32 },
    /// The snake high score was beaten.
    NewHighScore { high_score: u32 },
}

impl fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScoreIncreased { score } => write!(f, "Current Score: {}", score),
            Self::Flapped => write!(f, "Bird flaps!"),
            Self::GameOver { score } => write!(f, "Game Over! Score: {}", score),
            Self::NewHighScore { high_score } => write!(f, "New High Score: {}", high_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines() {
        assert_eq!(
            ScoreEvent::ScoreIncreased { score: 3 }.to_string(),
            "Current Score: 3"
        );
        assert_eq!(ScoreEvent::Flapped.to_string(), "Bird flaps!");
        assert_eq!(
            ScoreEvent::GameOver { score: 1 }.to_string(),
            "Game Over! Score: 1"
        );
        assert_eq!(
            ScoreEvent::NewHighScore { high_score: 10 }.to_string(),
            "New High Score: 10"
        );
    }

    #[test]
    fn test_serializes_with_event_tag() {
        let json = serde_json::to_value(ScoreEvent::GameOver { score: 7 }).unwrap();
        assert_eq!(json["event"], "game_over");
        assert_eq!(json["score"], 7);

        let json = serde_json::to_value(ScoreEvent::Flapped).unwrap();
        assert_eq!(json, serde_json::json!({ "event": "flapped" }));
    }
}
