use super::API;
use crate::dto::CreateGame;
use crate::dto::RankingQuery;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health(api: web::Data<API>) -> impl Responder {
    match api
        .store()
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("store unavailable"),
    }
}
pub async fn create_game(api: web::Data<API>, req: web::Json<CreateGame>) -> impl Responder {
    match req.validate() {
        Err(e) => HttpResponse::BadRequest().body(e),
        Ok(()) => match api.create_game(&req).await {
            Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
            Ok(game) => HttpResponse::Ok().json(game),
        },
    }
}
pub async fn global_info(api: web::Data<API>) -> impl Responder {
    match api.global_info().await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(info) => HttpResponse::Ok().json(info),
    }
}
pub async fn strong_hand(api: web::Data<API>) -> impl Responder {
    match api.strong_hand().await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(info) => HttpResponse::Ok().json(info),
    }
}
pub async fn weak_hand(api: web::Data<API>) -> impl Responder {
    match api.weak_hand().await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(info) => HttpResponse::Ok().json(info),
    }
}
pub async fn ranking(api: web::Data<API>, query: web::Query<RankingQuery>) -> impl Responder {
    match api.ranking(query.limit).await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(board) => HttpResponse::Ok().json(board),
    }
}
pub async fn statistics(api: web::Data<API>) -> impl Responder {
    match api.statistics().await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(stats) => HttpResponse::Ok().json(stats),
    }
}
