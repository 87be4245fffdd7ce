// Template context structures for Askama templates.

use actix_session::Session;

use crate::config::AppConfig;
use crate::presentation::Theme;

pub mod presentation;
pub mod slides;

pub use presentation::*;
pub use slides::{SlideEnv, render_body};

/// Context shared by every page. Templates read `ctx.theme_class`,
/// `ctx.fiscal_year`, etc.
pub struct PageContext {
    pub app_name: String,
    pub fiscal_year: String,
    pub theme: Theme,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: format!("Budget {} Explorer", config.fiscal_year),
            fiscal_year: config.fiscal_year.clone(),
            theme: crate::session::get_theme(session),
        }
    }

    pub fn theme_class(&self) -> &'static str {
        self.theme.as_str()
    }
}
