use crate::presentation::auth::{email_confirm, login, register};
use crate::presentation::handlers::example;
use actix_cors::Cors;
use actix_web::http::{Method, header};
use actix_web::web;

pub const API_PREFIX: &str = "/api";

/// Mounts the four endpoints on whatever scope `cfg` belongs to.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/example", web::get().to(example))
        .route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/emailConfirm", web::post().to(email_confirm));
}

pub fn api_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_header(header::CONTENT_TYPE)
}
