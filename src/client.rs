//! Gemini generateContent client and the fallback collapse
//!
//! One POST per generation, no retries. [`generate_idea`] is the only entry
//! point the shells use: it never surfaces an `Err`, collapsing every failure
//! into one of two fixed fallback strings so the UI always has something to
//! render.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::prompt::IdeaRequest;

/// Shown when the reply parses but carries no candidate text
pub const NO_IDEA_FALLBACK: &str = "No idea generated.";
/// Shown when the request fails in transit, on status, or on decode
pub const ERROR_FALLBACK: &str = "Error generating idea. Try again.";

/// Anything that can turn a prompt into generated text.
///
/// `Ok(None)` means the call worked but the provider returned nothing usable;
/// that is not an error, it maps to [`NO_IDEA_FALLBACK`].
#[async_trait]
pub trait IdeaSource: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

// The response side defaults every level so a well-formed reply missing
// `candidates` (or with empty parts) decodes as absence instead of failing.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

fn extract_text(response: GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()?
        .text;
    if text.is_empty() { None } else { Some(text) }
}

/// HTTP client for the Gemini generateContent endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from loaded configuration. Fails when the API key is
    /// missing or placeholder-shaped, so a bad credential is caught at startup
    /// rather than on the first request.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.api.timeout_ms))
            .build()
            .map_err(|e| ForgeError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: config.api.base_url.clone(),
            model: config.api.model.clone(),
            api_key,
        })
    }

    /// Point the client at a different endpoint (local stub servers in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl IdeaSource for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let url = self.endpoint();
        debug!(
            "Sending generateContent request to {}",
            url.replace(&self.api_key, "***")
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let started = std::time::Instant::now();
        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ForgeError::Api {
                status,
                message: error_text,
            });
        }

        let raw = response.text().await?;
        debug!(
            "generateContent completed in {} ms",
            started.elapsed().as_millis()
        );
        let parsed: GenerateResponse = serde_json::from_str(&raw)?;
        Ok(extract_text(parsed))
    }
}

/// Run one generation and collapse every outcome into display text.
///
/// Absence becomes [`NO_IDEA_FALLBACK`]; transport, API, and decode failures
/// become [`ERROR_FALLBACK`]. Callers never see an `Err` and can treat the
/// returned string as the new result unconditionally.
pub async fn generate_idea(source: &dyn IdeaSource, request: &IdeaRequest) -> String {
    match source.generate(&request.prompt()).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("Reply carried no candidate text, using fallback");
            NO_IDEA_FALLBACK.to_string()
        }
        Err(e) => {
            warn!("Idea generation failed: {}", e);
            ERROR_FALLBACK.to_string()
        }
    }
}
