//! Where finished games live.
//!
//! - [`Store`]: the two operations the API needs: write a game, read them all
//! - [`Memory`]: process-local store for tests and database-less runs
//!
//! The PostgreSQL implementation sits in [`crate::database`].
pub mod memory;
pub use memory::*;

use crate::dto::CreateGame;
use crate::game::Game;

/// Game persistence.
///
/// A game is written with all of its rounds in one step; readers never
/// observe a game without its rounds.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Persist a finished game and return it with its assigned id.
    async fn create_game(&self, game: &CreateGame) -> anyhow::Result<Game>;
    /// Every stored game, oldest first, rounds in play order.
    async fn fetch_games(&self) -> anyhow::Result<Vec<Game>>;
    /// Cheap reachability check for health probes.
    async fn ping(&self) -> anyhow::Result<()>;
}
