use crate::game::Game;
use crate::game::Player;
use serde::Deserialize;
use serde::Serialize;

/// One line of the leaderboard: a participant and the games it won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: Player,
    pub points: usize,
}

/// Participants by games won, best first, at most `limit` of them.
/// Equal scores keep the order in which their first win appears.
pub fn ranking(games: &[Game], limit: usize) -> Vec<PlayerInfo> {
    let mut board = Vec::<PlayerInfo>::new();
    for winner in games.iter().map(Game::winner) {
        match board.iter_mut().find(|entry| entry.name == winner) {
            Some(entry) => entry.points += 1,
            None => board.push(PlayerInfo {
                name: winner,
                points: 1,
            }),
        }
    }
    board.sort_by(|a, b| b.points.cmp(&a.points));
    board.truncate(limit);
    board
}
