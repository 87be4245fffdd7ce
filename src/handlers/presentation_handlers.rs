use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::presentation::{Presenter, PresentationState, Theme};
use crate::session::{get_slide_index, set_slide_index, set_theme};
use crate::templates_structs::{
    LoadingTemplate, PageContext, SlideDot, SlideEnv, SlideTemplate, render_body,
};

fn back_to_deck() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

/// Current slide for this visitor, or the loading screen until the budget
/// fetch resolves.
pub async fn show(
    presenter: web::Data<Presenter>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config);
    let state = presenter.state_at(get_slide_index(&session));

    if state.is_loading() {
        return render(LoadingTemplate { ctx });
    }

    let slide = presenter
        .deck()
        .get(state.current_index())
        .ok_or(AppError::NotFound)?;

    let env = SlideEnv { fiscal_year: &ctx.fiscal_year, theme: ctx.theme };
    let body_html = render_body(&slide.content(state.data()), &env)?;

    let dots = presenter
        .deck()
        .iter()
        .enumerate()
        .map(|(index, s)| SlideDot {
            index,
            title: s.title.clone(),
            active: index == state.current_index(),
        })
        .collect();

    let tmpl = SlideTemplate {
        slide_id: slide.id,
        title: slide.title.clone(),
        subtitle: slide.subtitle,
        body_html,
        number: state.current_index() + 1,
        count: state.slide_count(),
        progress: state.progress_percent(),
        is_first: state.is_first(),
        is_last: state.is_last(),
        dots,
        ctx,
    };
    render(tmpl)
}

/// Apply one navigation step to this visitor's cursor and go back to the deck.
fn navigate(
    presenter: &Presenter,
    session: &Session,
    step: impl FnOnce(&mut PresentationState) -> Result<(), AppError>,
) -> Result<HttpResponse, AppError> {
    let mut state = presenter.state_at(get_slide_index(session));
    step(&mut state)?;
    set_slide_index(session, state.current_index())?;
    Ok(back_to_deck())
}

pub async fn next(
    presenter: web::Data<Presenter>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    navigate(&presenter, &session, |s| {
        s.next();
        Ok(())
    })
}

pub async fn previous(
    presenter: web::Data<Presenter>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    navigate(&presenter, &session, |s| {
        s.previous();
        Ok(())
    })
}

pub async fn go_to(
    presenter: web::Data<Presenter>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    navigate(&presenter, &session, |s| s.go_to(index))
}

#[derive(Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

pub async fn theme(
    session: Session,
    form: web::Form<ThemeForm>,
) -> Result<HttpResponse, AppError> {
    match form.theme.parse::<Theme>() {
        Ok(theme) => set_theme(&session, theme)?,
        Err(e) => log::debug!("{e}"),
    }
    Ok(back_to_deck())
}
