use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use budgetdeck::config::AppConfig;
use budgetdeck::content::{ContentFetcher, GeminiClient, Offline, prompt};
use budgetdeck::handlers;
use budgetdeck::presentation::{Deck, Presenter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        log::warn!("No GEMINI_API_KEY set; the deck will use fallback budget data");
    }

    // Single content fetch, issued once before the server starts accepting
    let prompt = prompt::budget_prompt(&config.fiscal_year, chrono::Local::now().date_naive());
    let deck = Deck::budget(&config.fiscal_year);
    let presenter = match GeminiClient::new(&config) {
        Ok(client) => Presenter::start(deck, ContentFetcher::new(client, prompt)),
        Err(e) => {
            log::error!("Failed to build generator client, serving fallback data: {e}");
            Presenter::start(deck, ContentFetcher::new(Offline::new(e.to_string()), prompt))
        }
    };

    // Session encryption key from SESSION_KEY keeps visitor cursors across restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    let presenter = web::Data::new(presenter);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(presenter.clone())
            .app_data(config.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
