//! Shared test infrastructure for the presentation integration tests.

#![allow(dead_code, unused_macros)]

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use budgetdeck::content::{FetchError, TextGenerator};

pub const FISCAL_YEAR: &str = "2026-27";
pub const SLIDE_COUNT: usize = 12;

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

/// Build the full router around a presenter, the same way `main` does.
macro_rules! deck_app {
    ($presenter:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::common::session_middleware(actix_web::cookie::Key::generate()))
                .app_data(actix_web::web::Data::new($presenter))
                .app_data(actix_web::web::Data::new(budgetdeck::config::AppConfig::default()))
                .configure(budgetdeck::handlers::configure)
                .default_service(actix_web::web::to(budgetdeck::handlers::not_found)),
        )
        .await
    };
}

/// Session cookie set by a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response().cookies().next().map(|c| c.into_owned())
}

/// Generator stub that returns a canned reply, counts calls and keeps the
/// last prompt it was given.
#[derive(Clone)]
pub struct FakeGenerator {
    reply: Result<String, String>,
    pub calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_reply(Err(reason.to_string()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeGenerator {
    async fn generate_json(&self, prompt: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().map_err(FetchError::Transport)
    }
}
