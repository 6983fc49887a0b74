use super::percentage;
use crate::Percent;
use crate::game::Game;
use crate::game::Move;
use crate::game::Player;
use serde::Deserialize;
use serde::Serialize;

/// Label reported when no round qualifies.
pub const NO_HAND: &str = "No hand";

/// Moves counted over the rounds `target` won inside games `target` won,
/// in order of first appearance.
///
/// The count always reads the player_1 move, whoever the target is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(Vec<(Move, usize)>);

impl Tally {
    pub fn of(games: &[Game], target: Player) -> Self {
        let mut tally = Self::default();
        super::won_by(games, target)
            .flat_map(Game::rounds)
            .filter(|round| round.winner == target)
            .for_each(|round| tally.witness(round.player_1_move));
        tally
    }
    fn witness(&mut self, m: Move) {
        match self.0.iter_mut().find(|(k, _)| *k == m) {
            Some((_, n)) => *n += 1,
            None => self.0.push((m, 1)),
        }
    }
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }
    pub fn count(&self, m: Move) -> usize {
        self.0.iter().find(|(k, _)| *k == m).map_or(0, |(_, n)| *n)
    }
    /// Most frequent move and its share. Ties keep the earliest seen.
    pub fn best(&self) -> Option<(Move, Percent)> {
        self.0
            .iter()
            .fold(None::<(Move, usize)>, |best, &(m, n)| match best {
                Some((_, top)) if top >= n => best,
                _ => Some((m, n)),
            })
            .map(|(m, n)| (m, percentage(n, self.total())))
    }
    fn label(&self) -> (String, Percent) {
        match self.best() {
            Some((m, p)) => (m.to_string(), p),
            None => (NO_HAND.to_string(), 0.0),
        }
    }
}

/// The move that most often carried the human to victory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongHandInfo {
    pub strong_hand: String,
    pub win_percentage: Percent,
}

impl From<&[Game]> for StrongHandInfo {
    fn from(games: &[Game]) -> Self {
        let (strong_hand, win_percentage) = Tally::of(games, Player::HUMAN).label();
        Self {
            strong_hand,
            win_percentage,
        }
    }
}

/// The move most often seen in rounds the machine took from the human.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakHandInfo {
    pub weak_hand: String,
    pub loss_percentage: Percent,
}

impl From<&[Game]> for WeakHandInfo {
    fn from(games: &[Game]) -> Self {
        let (weak_hand, loss_percentage) = Tally::of(games, Player::MACHINE).label();
        Self {
            weak_hand,
            loss_percentage,
        }
    }
}
