//! Aggregate reports over the persisted game history.
//!
//! Every view is a pure function of the full list of games; nothing here
//! touches the store.
pub mod global;
pub use global::*;

pub mod hand;
pub use hand::*;

pub mod ranking;
pub use ranking::*;

pub mod summary;
pub use summary::*;

use crate::Percent;
use crate::game::Game;
use crate::game::Player;

fn won_by(games: &[Game], winner: Player) -> impl Iterator<Item = &Game> {
    games.iter().filter(move |game| game.winner() == winner)
}

/// `part` out of `whole` as a percentage, zero when there is no whole.
fn percentage(part: usize, whole: usize) -> Percent {
    match whole {
        0 => 0.0,
        n => part as Percent / n as Percent * 100.0,
    }
}
