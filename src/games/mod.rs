//! The three games: Car, Snake and Flappy Bird.
//!
//! Each game module owns one score component and a fixed `run_demo` driver
//! that exercises it. [`Game`] is the catalogue the launcher and CLI pick
//! from.

pub mod car;
pub mod event;
pub mod flappy;
pub mod snake;

pub use car::ScoreCounter;
pub use event::ScoreEvent;
pub use flappy::{FlapScoreSession, SessionState};
pub use snake::HighScoreTracker;

/// A game the launcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Car,
    Snake,
    Flappy,
}

impl Game {
    /// Menu order.
    pub const ALL: [Game; 3] = [Game::Car, Game::Snake, Game::Flappy];

    /// Stable identifier used on the command line and in JSON output.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Snake => "snake",
            Self::Flappy => "flappy",
        }
    }

    /// Key typed at the launcher prompt.
    pub fn menu_key(&self) -> &'static str {
        match self {
            Self::Car => "1",
            Self::Snake => "2",
            Self::Flappy => "3",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Car => "Car Game",
            Self::Snake => "Snake Game",
            Self::Flappy => "Flappy Bird",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Car => "Score five points, one at a time",
            Self::Snake => "Beat the high score",
            Self::Flappy => "Flap, score, crash",
        }
    }

    /// Look up a game by menu key or id, ignoring case and surrounding
    /// whitespace.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        Self::ALL.iter().copied().find(|game| {
            game.menu_key() == choice || game.id().eq_ignore_ascii_case(choice)
        })
    }

    /// Run this game's fixed driver and collect what it reported.
    pub fn run_demo(&self) -> Vec<ScoreEvent> {
        match self {
            Self::Car => car::run_demo(),
            Self::Snake => snake::run_demo(),
            Self::Flappy => flappy::run_demo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice_menu_keys() {
        assert_eq!(Game::from_choice("1"), Some(Game::Car));
        assert_eq!(Game::from_choice("2"), Some(Game::Snake));
        assert_eq!(Game::from_choice("3"), Some(Game::Flappy));
    }

    #[test]
    fn test_from_choice_ids() {
        assert_eq!(Game::from_choice("car"), Some(Game::Car));
        assert_eq!(Game::from_choice("  Snake \n"), Some(Game::Snake));
        assert_eq!(Game::from_choice("FLAPPY"), Some(Game::Flappy));
    }

    #[test]
    fn test_from_choice_rejects_unknown() {
        assert_eq!(Game::from_choice(""), None);
        assert_eq!(Game::from_choice("4"), None);
        assert_eq!(Game::from_choice("tetris"), None);
    }

    #[test]
    fn test_catalogue_keys_are_unique() {
        for (i, a) in Game::ALL.iter().enumerate() {
            for b in &Game::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.menu_key(), b.menu_key());
            }
        }
    }

    #[test]
    fn test_run_demo_dispatches() {
        assert_eq!(Game::Car.run_demo().len(), 5);
        assert_eq!(Game::Snake.run_demo().len(), 2);
        assert_eq!(
            Game::Flappy.run_demo().last(),
            Some(&ScoreEvent::GameOver { score: 1 })
        );
    }
}
