use actix_web::{HttpResponse, Responder, get};
use chrono::{Datelike, Local};
use serde_json::json;

use crate::site::{
    footer::render_footer,
    navbar::{NavbarState, render_navbar},
};

/// Service banner
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Service name", body = Object, example = json!({
            "message": "WageFlow API"
        }))
    ),
    tag = "Service"
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "WageFlow API"
    }))
}

#[get("/fragments/navbar")]
pub async fn navbar() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_navbar(&NavbarState::default()))
}

#[get("/fragments/footer")]
pub async fn footer() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_footer(Local::now().year()))
}
