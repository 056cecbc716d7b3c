use std::time::Duration;

use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::CardForgeError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Models offered in the settings dropdown. Any other id typed into the
/// settings file still works; this list is only a convenience.
pub const KNOWN_MODELS: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-2.0-flash"];

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Thin client for the Generative Language `generateContent` endpoint.
/// The model id is bound at construction so callers only see prompt -> text.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, CardForgeError> {
        let http = Client::builder().timeout(Duration::from_secs(120)).build()?;
        Ok(GeminiClient { http, api_key, model })
    }

    /// Send one prompt and return the model's text reply.
    pub async fn generate(&self, prompt: &str) -> Result<String, CardForgeError> {
        let url = format!("{}/{}:generateContent", BASE_URL, self.model);
        let body = GenerateContentRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        };

        let response: GenerateContentResponse = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(CardForgeError::Generation(error.message));
        }

        // Part texts are concatenated without a separator, matching how the
        // API's own text accessor assembles a candidate.
        let text: String = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .map(|parts| parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CardForgeError::Generation(
                "The model returned an empty response.".to_string(),
            ));
        }

        Ok(text)
    }
}
