// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/sentiment", web::post().to(handlers::analyze_sentiment))
            .route("/ws", web::get().to(handlers::ws_handler))
    );
}
