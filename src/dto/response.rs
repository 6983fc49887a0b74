use crate::game::Game;
use crate::game::Player;
use crate::game::Round;
use serde::Deserialize;
use serde::Serialize;

/// A stored game as the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGame {
    pub id: i64,
    pub rounds_played: Vec<Round>,
    pub game_winner: Player,
}

impl From<&Game> for ApiGame {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            rounds_played: game.rounds().to_vec(),
            game_winner: game.winner(),
        }
    }
}
