use super::moves::Move;

/// Source of moves for one seat.
///
/// Interactive implementations block until they have a valid move;
/// validation and re-prompting are their concern, not the sequencer's.
pub trait Agent {
    fn choose(&mut self, round: usize) -> Move;
}

/// Source of the give-up decision, asked between rounds of a human game.
pub trait Quitter {
    fn abandon(&mut self, round: usize) -> bool;
}

/// Never gives up.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stubborn;

impl Quitter for Stubborn {
    fn abandon(&mut self, _: usize) -> bool {
        false
    }
}
