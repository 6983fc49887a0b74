//! API Server Binary
//!
//! Stores finished games and serves the reports.
//! Binds BIND_ADDR; uses PostgreSQL at DB_URL when set, memory otherwise.

use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    log(&config, true);
    kys();
    server::Server::run(&config).await
}
