//! PostgreSQL persistence for finished games.
//!
//! ## Connectivity
//!
//! - [`db()`]: Connects, creates missing tables, returns a shareable client
//!
//! ## Schema
//!
//! - [`Schema`]: Table metadata and DDL generation
//!
//! ## Store
//!
//! [`crate::store::Store`] is implemented for `Arc<Client>`: one row per game
//! in [`GAMES`], one row per round in [`MOVES`].
mod schema;
mod store;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Table of finished games.
#[rustfmt::skip]
pub const GAMES: &str = "games";
/// Table of rounds, keyed by game and play order.
#[rustfmt::skip]
pub const MOVES: &str = "moves";

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Establishes a database connection and makes sure the tables exist.
///
/// Returns an `Arc<Client>` suitable for sharing across handlers.
pub async fn db(url: &str) -> anyhow::Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .map_err(|e| anyhow::anyhow!("database connection: {}", e))?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .batch_execute("SET client_min_messages TO WARNING")
        .await
        .map_err(|e| anyhow::anyhow!("set client_min_messages: {}", e))?;
    migrate(&client).await?;
    Ok(Arc::new(client))
}

/// Creates the game tables and their indices when missing.
pub async fn migrate(client: &Client) -> anyhow::Result<()> {
    use crate::game::Game;
    use crate::game::Round;
    for sql in [
        <Game as Schema>::creates(),
        <Round as Schema>::creates(),
        <Game as Schema>::indices(),
        <Round as Schema>::indices(),
    ] {
        client
            .batch_execute(sql)
            .await
            .map_err(|e| anyhow::anyhow!("migrate schema: {}", e))?;
    }
    log::debug!("tables {} and {} ready", GAMES, MOVES);
    Ok(())
}
