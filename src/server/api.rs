use crate::dto::ApiGame;
use crate::dto::CreateGame;
use crate::stats::*;
use crate::store::Store;
use std::sync::Arc;

/// Reporting and persistence operations behind the HTTP routes.
///
/// Each report is one read of the whole history followed by a pure
/// aggregation; each write is one call into the store.
pub struct API {
    store: Arc<dyn Store>,
    limit: usize,
}

impl API {
    pub fn new(store: Arc<dyn Store>, limit: usize) -> Self {
        Self { store, limit }
    }
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }
}

// writes
impl API {
    pub async fn create_game(&self, game: &CreateGame) -> anyhow::Result<ApiGame> {
        let game = self.store.create_game(game).await?;
        log::info!(
            "new game {}: {} rounds, {} wins",
            game.id(),
            game.total_rounds(),
            game.winner()
        );
        Ok(ApiGame::from(&game))
    }
}

// reports
impl API {
    pub async fn global_info(&self) -> anyhow::Result<GlobalInfo> {
        let games = self.store.fetch_games().await?;
        Ok(GlobalInfo::from(games.as_slice()))
    }
    pub async fn strong_hand(&self) -> anyhow::Result<StrongHandInfo> {
        let games = self.store.fetch_games().await?;
        Ok(StrongHandInfo::from(games.as_slice()))
    }
    pub async fn weak_hand(&self) -> anyhow::Result<WeakHandInfo> {
        let games = self.store.fetch_games().await?;
        Ok(WeakHandInfo::from(games.as_slice()))
    }
    pub async fn ranking(&self, limit: Option<usize>) -> anyhow::Result<Vec<PlayerInfo>> {
        let games = self.store.fetch_games().await?;
        Ok(ranking(&games, limit.unwrap_or(self.limit)))
    }
    pub async fn statistics(&self) -> anyhow::Result<Statistics> {
        let games = self.store.fetch_games().await?;
        Ok(Statistics::from(games.as_slice()))
    }
}
