use super::Store;
use crate::dto::CreateGame;
use crate::game::Game;
use std::sync::Mutex;

/// Games kept in process memory, ids counting up from 1.
#[derive(Debug, Default)]
pub struct Memory(Mutex<Vec<Game>>);

impl From<Vec<Game>> for Memory {
    fn from(games: Vec<Game>) -> Self {
        Self(Mutex::new(games))
    }
}

impl Memory {
    fn games(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Vec<Game>>> {
        self.0
            .lock()
            .map_err(|e| anyhow::anyhow!("memory store poisoned: {}", e))
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn create_game(&self, game: &CreateGame) -> anyhow::Result<Game> {
        let mut games = self.games()?;
        let id = games.last().map_or(1, |last| last.id() + 1);
        let game = Game::new(id, game.rounds_played.clone(), game.game_winner);
        games.push(game.clone());
        Ok(game)
    }
    async fn fetch_games(&self) -> anyhow::Result<Vec<Game>> {
        Ok(self.games()?.clone())
    }
    async fn ping(&self) -> anyhow::Result<()> {
        self.games().map(|_| ())
    }
}
