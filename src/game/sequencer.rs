use super::agent::Agent;
use super::agent::Quitter;
use super::player::Mode;
use super::round::Round;
use crate::ROUNDS;

/// Plays up to [`ROUNDS`] rounds between the two seats of `mode`.
///
/// The quitter is only consulted in abandonable modes, and never after
/// the last round.
pub fn play(
    mode: Mode,
    initiator: &mut dyn Agent,
    opponent: &mut dyn Agent,
    quitter: &mut dyn Quitter,
) -> Vec<Round> {
    let a = mode.initiator();
    let b = mode.opponent();
    let mut rounds = Vec::with_capacity(ROUNDS);
    for n in 1..=ROUNDS {
        let x = initiator.choose(n);
        let y = opponent.choose(n);
        let round = Round::new(x, y, a, b);
        let line = round.announce(n, a, b);
        log::info!("{}", line);
        println!("{}", line);
        rounds.push(round);
        if mode.abandonable() && n < ROUNDS && quitter.abandon(n) {
            log::info!("{} abandoned the game after round {}", a, n);
            break;
        }
    }
    rounds
}
