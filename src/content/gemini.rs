use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{FetchError, TextGenerator};
use crate::config::AppConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Default)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// `generateContent` client for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.fetch_timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_url: config.api_url.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate_json(&self, prompt: &str) -> Result<String, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingCredential)?;

        let body = GenerateRequest {
            contents: vec![Content { parts: vec![RequestPart { text: prompt }] }],
            generation_config: GenerationConfig { response_mime_type: "application/json" },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Status(status.as_u16(), text));
        }

        let parsed: GenerateResponse = response.json().await?;
        response_text(parsed).ok_or(FetchError::EmptyResponse)
    }
}

/// Concatenated text of the first candidate, if it has any.
fn response_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_asks_for_json() {
        let body = GenerateRequest {
            contents: vec![Content { parts: vec![RequestPart { text: "hi" }] }],
            generation_config: GenerationConfig { response_mime_type: "application/json" },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}},
                     {"content":{"parts":[{"text":"ignored"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response_text(parsed).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn no_candidates_means_no_text() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(response_text(parsed).is_none());
    }

    #[test]
    fn endpoint_uses_model() {
        let cfg = AppConfig { api_url: "http://x/v1".into(), model: "m".into(), ..AppConfig::default() };
        let client = GeminiClient::new(&cfg).unwrap();
        assert_eq!(client.endpoint(), "http://x/v1/models/m:generateContent");
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let client = GeminiClient::new(&AppConfig::default()).unwrap();
        let err = client.generate_json("prompt").await.unwrap_err();
        assert!(matches!(err, FetchError::MissingCredential));
    }
}
