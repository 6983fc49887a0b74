use super::GAMES;
use super::MOVES;
use crate::dto::CreateGame;
use crate::game::Game;
use crate::game::Move;
use crate::game::Player;
use crate::game::Round;
use crate::store::Store;
use std::sync::Arc;
use tokio_postgres::Client;

// Rows come back as text labels. Anything the domain types reject means
// the table was written by something other than this crate.

fn round_from_row(row: &tokio_postgres::Row) -> anyhow::Result<Round> {
    let label = |column: &str| row.try_get::<_, String>(column);
    Ok(Round {
        player_1_move: Move::try_from(label("player_1_move")?.as_str()).map_err(anyhow::Error::msg)?,
        player_2_move: Move::try_from(label("player_2_move")?.as_str()).map_err(anyhow::Error::msg)?,
        winner: Player::try_from(label("round_winner")?.as_str()).map_err(anyhow::Error::msg)?,
    })
}

fn game_winner_from_row(row: &tokio_postgres::Row) -> anyhow::Result<Player> {
    Player::try_from(row.try_get::<_, String>("game_winner")?.as_str()).map_err(anyhow::Error::msg)
}

#[async_trait::async_trait]
impl Store for Arc<Client> {
    async fn create_game(&self, game: &CreateGame) -> anyhow::Result<Game> {
        // One statement, so the game and its rounds commit together.
        let sql = const_format::concatcp!(
            "WITH g AS (
                INSERT INTO ",
            GAMES,
            " (total_rounds, winner) VALUES ($1, $2) RETURNING id
            ), m AS (
                INSERT INTO ",
            MOVES,
            " (game_id, seq, player_1_move, player_2_move, winner)
                SELECT g.id, t.seq, t.p1, t.p2, t.w
                FROM g, UNNEST($3::SMALLINT[], $4::TEXT[], $5::TEXT[], $6::TEXT[]) AS t(seq, p1, p2, w)
            )
            SELECT id FROM g"
        );
        let rounds = &game.rounds_played;
        let total = rounds.len() as i16;
        let winner = game.game_winner.name();
        let seqs = (1..=total).collect::<Vec<i16>>();
        let p1s = rounds.iter().map(|r| r.player_1_move.label()).collect::<Vec<&str>>();
        let p2s = rounds.iter().map(|r| r.player_2_move.label()).collect::<Vec<&str>>();
        let ws = rounds.iter().map(|r| r.winner.name()).collect::<Vec<&str>>();
        let id = self
            .query_one(sql, &[&total, &winner, &seqs, &p1s, &p2s, &ws])
            .await
            .map(|row| row.get::<_, i64>("id"))
            .map_err(|e| anyhow::anyhow!("insert game: {}", e))?;
        log::debug!("stored game {} ({} rounds, {} wins)", id, total, winner);
        Ok(Game::new(id, rounds.clone(), game.game_winner))
    }

    async fn fetch_games(&self) -> anyhow::Result<Vec<Game>> {
        let sql = const_format::concatcp!(
            "SELECT g.id, g.winner AS game_winner, m.player_1_move, m.player_2_move, m.winner AS round_winner ",
            "FROM   ",
            GAMES,
            " g ",
            "JOIN   ",
            MOVES,
            " m ON m.game_id = g.id ",
            "ORDER  BY g.id, m.seq"
        );
        let rows = self
            .query(sql, &[])
            .await
            .map_err(|e| anyhow::anyhow!("fetch games: {}", e))?;
        let mut games = Vec::<(i64, Player, Vec<Round>)>::new();
        for row in rows.iter() {
            let id = row.get::<_, i64>("id");
            let round = round_from_row(row)?;
            match games.last_mut() {
                Some((last, _, rounds)) if *last == id => rounds.push(round),
                _ => games.push((id, game_winner_from_row(row)?, vec![round])),
            }
        }
        Ok(games
            .into_iter()
            .map(|(id, winner, rounds)| Game::new(id, rounds, winner))
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.execute("SELECT 1", &[])
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("ping database: {}", e))
    }
}
