use super::percentage;
use crate::Percent;
use crate::game::Game;
use crate::game::Player;
use serde::Deserialize;
use serde::Serialize;

/// Overall record of the human against the machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalInfo {
    pub total_games: usize,
    pub total_wins: usize,
    pub total_losses: usize,
    pub winrate_percentage: Percent,
}

impl From<&[Game]> for GlobalInfo {
    fn from(games: &[Game]) -> Self {
        let total_games = games.len();
        let total_wins = super::won_by(games, Player::HUMAN).count();
        let total_losses = super::won_by(games, Player::MACHINE).count();
        Self {
            total_games,
            total_wins,
            total_losses,
            winrate_percentage: percentage(total_wins, total_games),
        }
    }
}
