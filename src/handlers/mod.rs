pub mod api_handlers;
pub mod presentation_handlers;
pub mod ws_handlers;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use askama::Template;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::templates_structs::{NotFoundTemplate, PageContext};

/// Register every presentation route. Shared by `main` and the
/// integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(presentation_handlers::show))
        // /slides/next and /slides/previous BEFORE /slides/{index}
        .route("/slides/next", web::post().to(presentation_handlers::next))
        .route("/slides/previous", web::post().to(presentation_handlers::previous))
        .route("/slides/{index}", web::post().to(presentation_handlers::go_to))
        .route("/theme", web::post().to(presentation_handlers::theme))
        .route("/api/budget", web::get().to(api_handlers::budget))
        .route("/ws", web::get().to(ws_handlers::ws_connect));
}

/// Fallback for unknown paths.
pub async fn not_found(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let tmpl = NotFoundTemplate { ctx: PageContext::build(&session, &config) };
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(tmpl.render()?))
}
