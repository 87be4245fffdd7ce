use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Session(String),
    SlideOutOfRange(usize),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::SlideOutOfRange(i) => write!(f, "No slide at index {i}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound | AppError::SlideOutOfRange(_) => {
                log::debug!("{self}");
                HttpResponse::NotFound().body("Not Found")
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(e: actix_session::SessionInsertError) -> Self {
        AppError::Session(e.to_string())
    }
}

/// Render an askama template into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let html = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
