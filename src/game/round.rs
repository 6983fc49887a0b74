use super::moves::Move;
use super::player::Player;
use serde::Deserialize;
use serde::Serialize;

/// Decides who takes a round.
///
/// `a` threw `x`, `b` threw `y`. Equal moves go to `b`: there are no draws.
pub fn resolve(x: Move, y: Move, a: Player, b: Player) -> Player {
    if x.beats(&y) { a } else { b }
}

/// One resolved round. Field names match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player_1_move: Move,
    pub player_2_move: Move,
    pub winner: Player,
}

impl Round {
    pub fn new(x: Move, y: Move, a: Player, b: Player) -> Self {
        Self {
            player_1_move: x,
            player_2_move: y,
            winner: resolve(x, y, a, b),
        }
    }
    /// Progress line shown to the player after each round.
    pub fn announce(&self, n: usize, a: Player, b: Player) -> String {
        format!(
            "Round {}. {} has selected {} and {} has selected {}. {} wins",
            n, a, self.player_1_move, b, self.player_2_move, self.winner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    const A: Player = Player::HUMAN;
    const B: Player = Player::MACHINE;

    #[test]
    fn defined_on_every_pair() {
        for x in Move::all() {
            for y in Move::all() {
                let winner = resolve(x, y, A, B);
                assert!(winner == A || winner == B);
                if x == y {
                    assert_eq!(winner, B);
                }
            }
        }
    }

    #[test]
    fn standard_precedence() {
        assert_eq!(resolve(Rock, Scissors, A, B), A);
        assert_eq!(resolve(Paper, Rock, A, B), A);
        assert_eq!(resolve(Scissors, Paper, A, B), A);
        assert_eq!(resolve(Rock, Paper, A, B), B);
        assert_eq!(resolve(Paper, Scissors, A, B), B);
        assert_eq!(resolve(Scissors, Rock, A, B), B);
    }

    #[test]
    fn ties_go_to_second_participant() {
        assert_eq!(resolve(Scissors, Scissors, A, B), B);
        let a = Player::Initiator(crate::game::Mode::Exhibition);
        let b = Player::Opponent(crate::game::Mode::Exhibition);
        assert_eq!(resolve(Rock, Rock, a, b), b);
    }

    #[test]
    fn announcement() {
        let round = Round::new(Scissors, Scissors, A, B);
        assert_eq!(
            round.announce(2, A, B),
            "Round 2. Human has selected scissors and Machine has selected scissors. Machine wins"
        );
    }
}
