use super::player::Player;
use super::round::Round;
use crate::ROUNDS;

/// Result of a finished game, before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub total_rounds: usize,
    pub winner: Player,
}

impl Outcome {
    /// `a` takes the game only with a strict majority over a complete game.
    /// Anything else, including every abandoned game, goes to `b`.
    pub fn summarize(rounds: &[Round], a: Player, b: Player) -> Self {
        let (wins_a, wins_b) = Self::tally(rounds, a, b);
        let total_rounds = rounds.len();
        let winner = if wins_a > wins_b && total_rounds == ROUNDS {
            a
        } else {
            b
        };
        let outcome = Self {
            total_rounds,
            winner,
        };
        log::info!("game finished after {} rounds ({}-{}), {} wins", total_rounds, wins_a, wins_b, winner);
        println!("{}", outcome.announce());
        outcome
    }
    pub fn tally(rounds: &[Round], a: Player, b: Player) -> (usize, usize) {
        rounds.iter().fold((0, 0), |(x, y), round| match round.winner {
            w if w == a => (x + 1, y),
            w if w == b => (x, y + 1),
            _ => (x, y),
        })
    }
    pub fn announce(&self) -> String {
        format!("Game finished. {} wins.", self.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;

    const A: Player = Player::HUMAN;
    const B: Player = Player::MACHINE;

    fn won_by(winners: &[Player]) -> Vec<Round> {
        winners
            .iter()
            .map(|&winner| Round {
                player_1_move: Move::Rock,
                player_2_move: Move::Scissors,
                winner,
            })
            .collect()
    }

    #[test]
    fn majority_of_three() {
        let outcome = Outcome::summarize(&won_by(&[A, B, A]), A, B);
        assert_eq!(outcome.total_rounds, 3);
        assert_eq!(outcome.winner, A);
    }

    #[test]
    fn second_participant_majority() {
        let outcome = Outcome::summarize(&won_by(&[B, A, B]), A, B);
        assert_eq!(outcome.winner, B);
    }

    #[test]
    fn abandoned_game_is_forfeit() {
        let outcome = Outcome::summarize(&won_by(&[A]), A, B);
        assert_eq!(outcome.total_rounds, 1);
        assert_eq!(outcome.winner, B);
        let outcome = Outcome::summarize(&won_by(&[A, A]), A, B);
        assert_eq!(outcome.total_rounds, 2);
        assert_eq!(outcome.winner, B);
    }

    #[test]
    fn counts_each_side() {
        assert_eq!(Outcome::tally(&won_by(&[A, B, B]), A, B), (1, 2));
        assert_eq!(Outcome::tally(&[], A, B), (0, 0));
    }

    #[test]
    fn announcement() {
        let outcome = Outcome::summarize(&won_by(&[A, A, A]), A, B);
        assert_eq!(outcome.announce(), "Game finished. Human wins.");
    }
}
