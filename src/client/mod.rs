//! HTTP client the game uses to reach the API.
use crate::Config;
use crate::dto::ApiGame;
use crate::dto::CreateGame;
use crate::dto::Report;
use crate::game::Outcome;
use crate::game::Round;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("build http client: {}", e))?;
        Ok(Self {
            http,
            base: config.api_url.clone(),
        })
    }

    /// Send a finished game to the API.
    ///
    /// At most once: failures are logged and dropped, the player carries on.
    pub async fn create_game(&self, rounds: &[Round], outcome: &Outcome) -> Option<ApiGame> {
        let body = CreateGame::new(rounds, outcome);
        match self.post_game(&body).await {
            Ok(game) => {
                log::info!("new game created: {}", game.id);
                Some(game)
            }
            Err(e) => {
                log::error!("error saving the game: {}", e);
                None
            }
        }
    }

    async fn post_game(&self, body: &CreateGame) -> anyhow::Result<ApiGame> {
        self.http
            .post(format!("{}/game/", self.base))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiGame>()
            .await
            .map_err(anyhow::Error::from)
    }

    /// Fetch one report as raw JSON.
    pub async fn report(&self, report: Report) -> anyhow::Result<serde_json::Value> {
        self.http
            .get(format!("{}/game{}", self.base, report.route()))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("fetch {}: {}", report, e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("fetch {}: {}", report, e))?
            .json::<serde_json::Value>()
            .await
            .map_err(|e| anyhow::anyhow!("decode {}: {}", report, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::game::Move;
    use crate::server::API;
    use crate::store::Memory;
    use actix_web::App;
    use actix_web::HttpServer;
    use actix_web::web;
    use std::sync::Arc;

    /// Serves the real routes over an in-memory store on a free port.
    fn serve() -> Config {
        let api = web::Data::new(API::new(Arc::new(Memory::default()), crate::RANKING_LIMIT));
        let server = HttpServer::new(move || {
            App::new()
                .app_data(api.clone())
                .configure(crate::server::routes)
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Config {
            api_url: format!("http://{}", addr),
            ..Config::default()
        }
    }

    #[actix_web::test]
    async fn posts_games_and_reads_reports() {
        let client = Client::new(&serve()).unwrap();
        let rounds = vec![
            Round::new(Move::Rock, Move::Scissors, Player::HUMAN, Player::MACHINE),
            Round::new(Move::Paper, Move::Rock, Player::HUMAN, Player::MACHINE),
            Round::new(Move::Rock, Move::Rock, Player::HUMAN, Player::MACHINE),
        ];
        let outcome = Outcome::summarize(&rounds, Player::HUMAN, Player::MACHINE);
        let game = client.create_game(&rounds, &outcome).await.unwrap();
        assert_eq!(game.game_winner, Player::HUMAN);
        assert_eq!(game.rounds_played, rounds);
        let stats = client.report(Report::Statistics).await.unwrap();
        assert_eq!(stats["total_games"], 1);
        assert_eq!(stats["total_wins"], 1);
        let hand = client.report(Report::StrongHand).await.unwrap();
        assert_eq!(hand["strong_hand"], "rock");
        for report in Report::all() {
            assert!(client.report(report).await.is_ok());
        }
    }

    #[actix_web::test]
    async fn unreachable_api_is_swallowed() {
        let config = Config {
            api_url: String::from("http://127.0.0.1:9"),
            ..Config::default()
        };
        let client = Client::new(&config).unwrap();
        let rounds = vec![Round::new(Move::Rock, Move::Paper, Player::HUMAN, Player::MACHINE)];
        let outcome = Outcome::summarize(&rounds, Player::HUMAN, Player::MACHINE);
        assert!(client.create_game(&rounds, &outcome).await.is_none());
        assert!(client.report(Report::Ranking).await.is_err());
    }
}
