use actix_session::Session;

use crate::errors::AppError;
use crate::presentation::Theme;

const SLIDE_KEY: &str = "slide_index";
const THEME_KEY: &str = "theme";

/// Cursor remembered for this visitor; a missing or unreadable value
/// means the first slide.
pub fn get_slide_index(session: &Session) -> usize {
    session.get::<usize>(SLIDE_KEY).unwrap_or(None).unwrap_or(0)
}

pub fn set_slide_index(session: &Session, index: usize) -> Result<(), AppError> {
    session.insert(SLIDE_KEY, index)?;
    Ok(())
}

pub fn get_theme(session: &Session) -> Theme {
    session
        .get::<String>(THEME_KEY)
        .unwrap_or(None)
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

pub fn set_theme(session: &Session, theme: Theme) -> Result<(), AppError> {
    session.insert(THEME_KEY, theme.as_str())?;
    Ok(())
}
