//! Table definitions for the persisted game types.
use super::GAMES;
use super::MOVES;
use crate::game::Game;
use crate::game::Round;

/// Schema metadata for PostgreSQL tables.
///
/// Pure SQL generation, no I/O. All strings are assembled at compile time
/// with [`const_format::concatcp!`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

impl Schema for Game {
    fn name() -> &'static str {
        GAMES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            GAMES,
            " (
                id           BIGSERIAL PRIMARY KEY,
                total_rounds SMALLINT  NOT NULL CHECK (total_rounds BETWEEN 1 AND 3),
                winner       TEXT      NOT NULL
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            GAMES,
            "_winner ON ",
            GAMES,
            " (winner);"
        )
    }
}

impl Schema for Round {
    fn name() -> &'static str {
        MOVES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            MOVES,
            " (
                game_id       BIGINT   NOT NULL REFERENCES ",
            GAMES,
            "(id),
                seq           SMALLINT NOT NULL,
                player_1_move TEXT     NOT NULL,
                player_2_move TEXT     NOT NULL,
                winner        TEXT     NOT NULL,
                PRIMARY KEY (game_id, seq)
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            MOVES,
            "_game ON ",
            MOVES,
            " (game_id);"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_reference_each_other() {
        assert_eq!(<Game as Schema>::name(), "games");
        assert_eq!(<Round as Schema>::name(), "moves");
        assert!(<Round as Schema>::creates().contains("REFERENCES games(id)"));
        assert!(<Game as Schema>::creates().starts_with("CREATE TABLE IF NOT EXISTS games"));
        assert!(<Round as Schema>::indices().contains("ON moves (game_id)"));
    }
}
