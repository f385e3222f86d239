//! Gemini `generateContent` client with Google Search grounding.

use std::{future::Future, pin::Pin, time::Duration};

use futures::future;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        intel::{Citation, IntelResponse},
        ticker::Ticker,
    },
    infrastructure::config::GeminiConfig,
};

pub type IntelFuture<'a> =
    Pin<Box<dyn Future<Output = Result<IntelResponse, IntelError>> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
pub enum IntelError {
    #[error("no API key configured (set gemini.api_key or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("offline mode")]
    Offline,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for IntelError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            IntelError::Timeout
        } else {
            IntelError::Transport(e)
        }
    }
}

/// Source of model replies for a ticker
pub trait IntelProvider: Send + Sync {
    fn fetch<'a>(&'a self, ticker: &'a Ticker) -> IntelFuture<'a>;
}

/// Prompt asking for the numbered, pipe-delimited layout the parser understands.
pub fn build_prompt(ticker: &Ticker) -> String {
    format!(
        "Analyze {ticker}.
STRUCTURE YOUR RESPONSE AS FOLLOWS:
1. PROBABILITY: [0-100]
2. SUMMARY: [Overall outlook]
3. SOURCE_BREAKDOWN:
   Bloomberg: [one-sentence summary] | [sentiment: positive/neutral/negative]
   CNBC: [one-sentence summary] | [sentiment: positive/neutral/negative]
   Reuters: [one-sentence summary] | [sentiment: positive/neutral/negative]
   Google News: [one-sentence summary] | [sentiment: positive/neutral/negative]
4. TACTICAL_FEED:
   List 3 specific news articles or recent events for {ticker}.
   Format each line: SOURCE_NAME | NEWS_TEXT | ST_7D: [number] | MT_30D: [number] | LT_1Y: [number] | CURR_PRICE: [price] | TGT_PRICE: [price]
   ST_7D: Likelihood of increase in 7 days.
   MT_30D: Likelihood of increase in 30 days.
   LT_1Y: Likelihood of increase in 1 year.
   CURR_PRICE: Current stock price.
   TGT_PRICE: Expected target price for that horizon."
    )
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl From<GenerateContentResponse> for IntelResponse {
    fn from(response: GenerateContentResponse) -> Self {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return IntelResponse::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let citations = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .map(|web| Citation {
                title: if web.title.is_empty() {
                    web.uri.clone()
                } else {
                    web.title
                },
                uri: web.uri,
            })
            .collect();

        IntelResponse { text, citations }
    }
}

/// Decode a `generateContent` body into text plus citations.
pub fn decode_response(body: &str) -> Result<IntelResponse, IntelError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    Ok(response.into())
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|err| err.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        endpoint: String,
        timeout_secs: u64,
    ) -> Result<Self, IntelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            model,
        })
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self, IntelError> {
        let api_key = config.api_key.clone().ok_or(IntelError::MissingApiKey)?;
        Self::new(
            api_key,
            config.model.clone(),
            config.endpoint.clone(),
            config.timeout_secs,
        )
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one prompt with search grounding enabled
    pub async fn generate(&self, prompt: &str) -> Result<IntelResponse, IntelError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(IntelError::Status {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        decode_response(&body)
    }
}

impl IntelProvider for GeminiClient {
    fn fetch<'a>(&'a self, ticker: &'a Ticker) -> IntelFuture<'a> {
        Box::pin(async move {
            let prompt = build_prompt(ticker);
            self.generate(&prompt).await
        })
    }
}

/// Provider used when no live call can be made; every fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineProvider {
    /// `--offline` was given.
    Requested,
    MissingApiKey,
}

impl IntelProvider for OfflineProvider {
    fn fetch<'a>(&'a self, _ticker: &'a Ticker) -> IntelFuture<'a> {
        let error = match self {
            OfflineProvider::Requested => IntelError::Offline,
            OfflineProvider::MissingApiKey => IntelError::MissingApiKey,
        };
        Box::pin(future::ready(Err(error)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BODY: &str = r#"{
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "PROBABILITY: 61\n" }, { "text": "SUMMARY: Calm." }]
            },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://a.example/1", "title": "a.example" } },
                    { "retrievedContext": { "uri": "ignored" } },
                    { "web": { "uri": "https://b.example/2" } }
                ]
            }
        }]
    }"#;

    fn ticker() -> Ticker {
        Ticker::parse("NVDA").expect("valid ticker")
    }

    #[test]
    fn test_decode_response() -> Result<(), IntelError> {
        let response = decode_response(BODY)?;

        assert_eq!(response.text, "PROBABILITY: 61\nSUMMARY: Calm.");
        assert_eq!(
            response.citations,
            vec![
                Citation {
                    title: "a.example".into(),
                    uri: "https://a.example/1".into()
                },
                Citation {
                    title: "https://b.example/2".into(),
                    uri: "https://b.example/2".into()
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_decode_response_without_candidates() -> Result<(), IntelError> {
        assert_eq!(decode_response("{}")?, IntelResponse::default());
        Ok(())
    }

    #[test]
    fn test_decode_response_rejects_garbage() {
        assert!(matches!(
            decode_response("<html>"),
            Err(IntelError::Decode(_))
        ));
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{ "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" } }"#;
        assert_eq!(api_error_message(body), "API key not valid");
        assert_eq!(api_error_message(" upstream down \n"), "upstream down");
    }

    #[test]
    fn test_prompt_mentions_every_marker() {
        let prompt = build_prompt(&ticker());
        assert!(prompt.starts_with("Analyze NVDA."));
        for marker in [
            "PROBABILITY:",
            "SUMMARY:",
            "SOURCE_BREAKDOWN:",
            "TACTICAL_FEED:",
            "ST_7D:",
            "MT_30D:",
            "LT_1Y:",
            "CURR_PRICE:",
            "TGT_PRICE:",
        ] {
            assert!(prompt.contains(marker), "missing {marker}");
        }
    }

    #[test]
    fn test_request_body_enables_search() -> Result<(), IntelError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "hi" }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
                "tools": [{ "google_search": {} }]
            })
        );
        Ok(())
    }

    #[test]
    fn test_url() -> Result<(), IntelError> {
        let client = GeminiClient::new(
            "key".into(),
            "gemini-3-flash-preview".into(),
            "https://example.com/v1beta/".into(),
            5,
        )?;
        assert_eq!(
            client.url(),
            "https://example.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        Ok(())
    }

    #[test]
    fn test_from_config_requires_key() {
        assert!(matches!(
            GeminiClient::from_config(&GeminiConfig::default()),
            Err(IntelError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_offline_provider_fails() {
        let ticker = ticker();
        assert!(matches!(
            OfflineProvider::Requested.fetch(&ticker).await,
            Err(IntelError::Offline)
        ));
        assert!(matches!(
            OfflineProvider::MissingApiKey.fetch(&ticker).await,
            Err(IntelError::MissingApiKey)
        ));
    }
}
