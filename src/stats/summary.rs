use crate::game::Game;
use crate::game::Player;
use serde::Deserialize;
use serde::Serialize;

/// Played, won and abandoned counts for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_games: usize,
    pub total_wins: usize,
    pub total_abandonments: usize,
}

impl From<&[Game]> for Statistics {
    fn from(games: &[Game]) -> Self {
        Self {
            total_games: games.len(),
            total_wins: super::won_by(games, Player::HUMAN).count(),
            total_abandonments: super::won_by(games, Player::MACHINE)
                .filter(|game| game.abandoned())
                .count(),
        }
    }
}
