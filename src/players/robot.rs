use crate::Arbitrary;
use crate::game::Agent;
use crate::game::Move;

/// Throws uniformly at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Agent for Robot {
    fn choose(&mut self, _: usize) -> Move {
        Move::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throws_every_move_eventually() {
        let ref mut robot = Robot;
        let seen = (1..=300).map(|n| robot.choose(n)).collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), 3);
    }
}
