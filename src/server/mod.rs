//! Persistence and reporting HTTP API.
//!
//! ## Routes
//!
//! - `GET  /health`: store reachability
//! - `POST /game/`: store a finished game
//! - `GET  /game/{report}`: one of the [`Report`] views
pub mod api;
pub mod handlers;

pub use api::*;

use crate::Config;
use crate::dto::Report;
use crate::store::Memory;
use crate::store::Store;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(config: &Config) -> anyhow::Result<()> {
        let store = Self::store(config).await?;
        let api = web::Data::new(API::new(store, config.ranking_limit));
        log::info!("starting HTTP server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(api.clone())
                .configure(routes)
        })
        .bind(&config.bind)?
        .run()
        .await
        .map_err(anyhow::Error::from)
    }

    #[cfg(feature = "database")]
    async fn store(config: &Config) -> anyhow::Result<Arc<dyn Store>> {
        match config.db_url.as_deref() {
            Some(url) => Ok(Arc::new(crate::database::db(url).await?)),
            None => Ok(Self::memory()),
        }
    }

    #[cfg(not(feature = "database"))]
    async fn store(config: &Config) -> anyhow::Result<Arc<dyn Store>> {
        if config.db_url.is_some() {
            log::warn!("built without the database feature, ignoring DB_URL");
        }
        Ok(Self::memory())
    }

    fn memory() -> Arc<dyn Store> {
        log::warn!("no database configured, games are kept in memory");
        Arc::new(Memory::default())
    }
}

#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/game")
                .route("",                              web::post().to(handlers::create_game))
                .route("/",                             web::post().to(handlers::create_game))
                .route(Report::GlobalInfo.route(),      web::get().to(handlers::global_info))
                .route(Report::StrongHand.route(),      web::get().to(handlers::strong_hand))
                .route(Report::WeakHand.route(),        web::get().to(handlers::weak_hand))
                .route(Report::Ranking.route(),         web::get().to(handlers::ranking))
                .route(Report::Statistics.route(),      web::get().to(handlers::statistics)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ApiGame;
    use crate::game::Game;
    use crate::game::Mode;
    use crate::game::Move;
    use crate::game::Player;
    use crate::game::Round;
    use crate::stats::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn round(x: Move, y: Move) -> Round {
        Round::new(x, y, Player::HUMAN, Player::MACHINE)
    }

    fn history() -> Vec<Game> {
        use Move::*;
        vec![
            Game::new(1, vec![round(Rock, Scissors), round(Rock, Paper), round(Paper, Rock)], Player::HUMAN),
            Game::new(2, vec![round(Scissors, Rock), round(Paper, Scissors)], Player::MACHINE),
            Game::new(3, vec![round(Paper, Rock), round(Rock, Scissors), round(Rock, Rock)], Player::HUMAN),
        ]
    }

    fn api(games: Vec<Game>) -> web::Data<API> {
        web::Data::new(API::new(Arc::new(Memory::from(games)), crate::RANKING_LIMIT))
    }

    macro_rules! service {
        ($games:expr) => {
            test::init_service(App::new().app_data(api($games)).configure(routes)).await
        };
    }

    #[actix_web::test]
    async fn reports_on_empty_history() {
        let app = service!(vec![]);
        let req = test::TestRequest::get().uri("/game/get_global_info").to_request();
        let info: GlobalInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info.total_games, 0);
        assert_eq!(info.winrate_percentage, 0.0);
        let req = test::TestRequest::get().uri("/game/mano_fuerte").to_request();
        let info: StrongHandInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info.strong_hand, NO_HAND);
        assert_eq!(info.win_percentage, 0.0);
        let req = test::TestRequest::get().uri("/game/ranking").to_request();
        let board: Vec<PlayerInfo> = test::call_and_read_body_json(&app, req).await;
        assert!(board.is_empty());
    }

    #[actix_web::test]
    async fn reports_on_history() {
        let app = service!(history());
        let req = test::TestRequest::get().uri("/game/estadisticas").to_request();
        let stats: Statistics = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.total_wins, 2);
        assert_eq!(stats.total_abandonments, 1);
        let req = test::TestRequest::get().uri("/game/get_global_info").to_request();
        let info: GlobalInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info.total_losses, 1);
        assert!((info.winrate_percentage - 200.0 / 3.0).abs() < 1e-3);
        let req = test::TestRequest::get().uri("/game/mano_fuerte").to_request();
        let info: StrongHandInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info.strong_hand, "rock");
        assert_eq!(info.win_percentage, 50.0);
        let req = test::TestRequest::get().uri("/game/mano_debil").to_request();
        let info: WeakHandInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info.weak_hand, "scissors");
        assert_eq!(info.loss_percentage, 50.0);
        let req = test::TestRequest::get().uri("/game/ranking?limit=1").to_request();
        let board: Vec<PlayerInfo> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(board, vec![PlayerInfo { name: Player::HUMAN, points: 2 }]);
    }

    #[actix_web::test]
    async fn created_games_feed_reports() {
        let app = service!(vec![]);
        let body = serde_json::json!({
            "rounds_played": [
                {"player_1_move": "rock", "player_2_move": "scissors", "winner": "Machine_1"},
                {"player_1_move": "rock", "player_2_move": "paper", "winner": "Machine_2"},
                {"player_1_move": "paper", "player_2_move": "rock", "winner": "Machine_1"}
            ],
            "game_winner": "Machine_1"
        });
        let req = test::TestRequest::post().uri("/game/").set_json(&body).to_request();
        let game: ApiGame = test::call_and_read_body_json(&app, req).await;
        assert_eq!(game.id, 1);
        assert_eq!(game.rounds_played.len(), 3);
        assert_eq!(game.game_winner, Mode::Exhibition.initiator());
        let req = test::TestRequest::get().uri("/game/ranking").to_request();
        let board: Vec<PlayerInfo> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(board, vec![PlayerInfo { name: Mode::Exhibition.initiator(), points: 1 }]);
        let req = test::TestRequest::get().uri("/game/get_global_info").to_request();
        let info: GlobalInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info.total_games, 1);
        assert_eq!(info.total_wins, 0);
    }

    #[actix_web::test]
    async fn rejects_malformed_games() {
        let app = service!(vec![]);
        for body in [
            serde_json::json!({"rounds_played": [], "game_winner": "Machine"}),
            serde_json::json!({"rounds_played": [{"player_1_move": "spock", "player_2_move": "rock", "winner": "Human"}], "game_winner": "Human"}),
            serde_json::json!({"rounds_played": [{"player_1_move": "rock", "player_2_move": "rock", "winner": "Machine"}], "game_winner": "Nobody"}),
        ] {
            let req = test::TestRequest::post().uri("/game/").set_json(&body).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        }
        let req = test::TestRequest::get().uri("/game/estadisticas").to_request();
        let stats: Statistics = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stats.total_games, 0);
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = service!(vec![]);
        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
