use askama::Template;

use super::PageContext;

/// Full-screen spinner shown until the budget fetch resolves.
#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub ctx: PageContext,
}

/// One navigation dot in the footer.
pub struct SlideDot {
    pub index: usize,
    pub title: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "slide.html")]
pub struct SlideTemplate {
    pub ctx: PageContext,
    pub slide_id: &'static str,
    pub title: String,
    pub subtitle: &'static str,
    /// Pre-rendered slide body.
    pub body_html: String,
    pub number: usize,
    pub count: usize,
    pub progress: f64,
    pub is_first: bool,
    pub is_last: bool,
    pub dots: Vec<SlideDot>,
}

impl SlideTemplate {
    pub fn next_label(&self) -> &'static str {
        if self.is_last { "Restart" } else { "Next Slide" }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}
