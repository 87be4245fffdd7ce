//! Budget content acquisition: ask a generative model for the figures,
//! parse its reply, and lay it over the static fallback.

pub mod fetcher;
pub mod gemini;
pub mod prompt;

use std::fmt;
use std::future::Future;

pub use fetcher::ContentFetcher;
pub use gemini::GeminiClient;

/// Anything that can turn a prompt into JSON-formatted text.
pub trait TextGenerator {
    fn generate_json(&self, prompt: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Failures inside the fetch pipeline. These never leave `ContentFetcher`.
#[derive(Debug)]
pub enum FetchError {
    MissingCredential,
    Transport(String),
    Status(u16, String),
    EmptyResponse,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingCredential => write!(f, "No GEMINI_API_KEY configured"),
            FetchError::Transport(e) => write!(f, "Transport error: {e}"),
            FetchError::Status(code, body) => write!(f, "Generator returned HTTP {code}: {body}"),
            FetchError::EmptyResponse => write!(f, "Generator returned no text"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Stands in for a generator that could not be built. Every call fails, so
/// the fetch settles on the fallback dataset.
pub struct Offline {
    reason: String,
}

impl Offline {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl TextGenerator for Offline {
    async fn generate_json(&self, _prompt: &str) -> Result<String, FetchError> {
        Err(FetchError::Transport(self.reason.clone()))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}
