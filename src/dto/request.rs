use crate::ROUNDS;
use crate::game::Outcome;
use crate::game::Player;
use crate::game::Round;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /game/`: the rounds of a finished game and its winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGame {
    pub rounds_played: Vec<Round>,
    pub game_winner: Player,
}

impl CreateGame {
    pub fn new(rounds: &[Round], outcome: &Outcome) -> Self {
        Self {
            rounds_played: rounds.to_vec(),
            game_winner: outcome.winner,
        }
    }
    /// Labels are already checked by deserialization; what is left is
    /// the shape of the game.
    pub fn validate(&self) -> Result<(), String> {
        match self.rounds_played.len() {
            0 => Err(String::from("a game needs at least one round")),
            n if n > ROUNDS => Err(format!("a game has at most {} rounds, got {}", ROUNDS, n)),
            _ => Ok(()),
        }
    }
}

/// Query string of `GET /game/ranking`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RankingQuery {
    pub limit: Option<usize>,
}
