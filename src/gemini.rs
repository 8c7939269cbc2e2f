//! Minimal Gemini client for our use-cases.
//!
//! We only call generateContent with a single user prompt and read back the
//! concatenated candidate text. Calls are instrumented and log model names,
//! latencies, and response sizes (not contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{instrument, info};

use crate::util::trunc_for_log;

#[derive(Clone)]
pub struct Gemini {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl Gemini {
  /// Construct the client if we find GEMINI_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("GEMINI_API_KEY").ok()?;
    let base_url = std::env::var("GEMINI_BASE_URL")
      .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(20))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url, model })
  }

  /// One free-text completion. The model may or may not fence its reply;
  /// callers run the reply through `extract::extract_code_block` as needed.
  #[instrument(level = "info", skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
  pub async fn generate(&self, prompt: &str) -> Result<String, String> {
    let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
    let req = GenerateContentRequest {
      contents: vec![Content {
        parts: vec![Part { text: prompt.to_string() }],
      }],
    };

    let start = std::time::Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "daccy-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header("x-goog-api-key", &self.api_key)
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_gemini_error(&body).unwrap_or_else(|| body);
      return Err(format!("Gemini HTTP {}: {}", status, trunc_for_log(&msg, 300)));
    }

    let body: GenerateContentResponse = res.json().await.map_err(|e| e.to_string())?;
    if let Some(usage) = &body.usage_metadata {
      info!(
        prompt_tokens = ?usage.prompt_token_count,
        candidate_tokens = ?usage.candidates_token_count,
        total_tokens = ?usage.total_token_count,
        "Gemini usage"
      );
    }

    let text: String = body
      .candidates
      .into_iter()
      .next()
      .map(|c| {
        c.content
          .parts
          .into_iter()
          .filter_map(|p| p.text)
          .collect::<Vec<_>>()
          .concat()
      })
      .unwrap_or_default();

    info!(elapsed = ?start.elapsed(), reply_len = text.len(), "Gemini reply received");
    Ok(text)
  }
}

// --- generateContent DTOs ---

#[derive(Serialize)]
struct GenerateContentRequest {
  contents: Vec<Content>,
}
#[derive(Serialize)]
struct Content {
  parts: Vec<Part>,
}
#[derive(Serialize)]
struct Part {
  text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
  #[serde(default, rename = "usageMetadata")]
  usage_metadata: Option<UsageMetadata>,
}
#[derive(Deserialize)]
struct Candidate {
  content: CandidateContent,
}
#[derive(Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<CandidatePart>,
}
#[derive(Deserialize)]
struct CandidatePart {
  text: Option<String>,
}
#[derive(Deserialize)]
struct UsageMetadata {
  #[serde(default, rename = "promptTokenCount")]
  prompt_token_count: Option<u32>,
  #[serde(default, rename = "candidatesTokenCount")]
  candidates_token_count: Option<u32>,
  #[serde(default, rename = "totalTokenCount")]
  total_token_count: Option<u32>,
}

/// Try to extract a clean error message from a Gemini error body.
fn extract_gemini_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}
