use super::outcome::Outcome;
use super::player::Player;
use super::round::Round;
use crate::ROUNDS;

/// A finished, persisted game.
///
/// Games are only ever built from a complete set of resolved rounds and
/// stored together with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: i64,
    rounds: Vec<Round>,
    winner: Player,
}

impl Game {
    pub fn new(id: i64, rounds: Vec<Round>, winner: Player) -> Self {
        Self { id, rounds, winner }
    }
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    pub fn winner(&self) -> Player {
        self.winner
    }
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }
    /// Fewer rounds than a full game means somebody gave up.
    pub fn abandoned(&self) -> bool {
        self.total_rounds() < ROUNDS
    }
    pub fn outcome(&self) -> Outcome {
        Outcome {
            total_rounds: self.total_rounds(),
            winner: self.winner,
        }
    }
}
