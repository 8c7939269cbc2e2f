//! Relay client for the Piston code-execution engine.
//!
//! We forward `{language, version, files: [{content}]}` to `/execute` and
//! read back `run.output`. Sandboxing, resource limits, and output bounds
//! are the engine's responsibility, not ours.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{instrument, info};

use crate::util::trunc_for_log;

#[derive(Clone)]
pub struct Piston {
  pub client: reqwest::Client,
  pub base_url: String,
}

impl Piston {
  /// Always available; PISTON_BASE_URL overrides the public instance.
  pub fn from_env() -> Self {
    let base_url = std::env::var("PISTON_BASE_URL")
      .unwrap_or_else(|_| "https://emkc.org/api/v2/piston".into());
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(20))
      .build()
      .unwrap_or_default();
    Self { client, base_url }
  }

  /// Run one source file and return the captured output of the run stage.
  #[instrument(level = "info", skip(self, code), fields(%language, %version, code_len = code.len()))]
  pub async fn execute(&self, language: &str, version: &str, code: &str) -> Result<String, String> {
    let url = format!("{}/execute", self.base_url);
    let req = ExecuteRequest {
      language: language.to_string(),
      version: version.to_string(),
      files: vec![ExecuteFile { content: code.to_string() }],
    };

    let start = std::time::Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "daccy-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_piston_error(&body).unwrap_or_else(|| body);
      return Err(format!("Piston HTTP {}: {}", status, trunc_for_log(&msg, 300)));
    }

    let body: ExecuteResponse = res.json().await.map_err(|e| e.to_string())?;
    info!(elapsed = ?start.elapsed(), output_len = body.run.output.len(), "Piston run finished");
    Ok(body.run.output)
  }
}

// --- /execute DTOs ---

#[derive(Serialize)]
struct ExecuteRequest {
  language: String,
  version: String,
  files: Vec<ExecuteFile>,
}
#[derive(Serialize)]
struct ExecuteFile {
  content: String,
}

#[derive(Deserialize)]
struct ExecuteResponse {
  run: RunStage,
}
#[derive(Deserialize)]
struct RunStage {
  #[serde(default)]
  output: String,
}

/// Piston reports bad requests as `{"message": "..."}`.
fn extract_piston_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EObj>(body) {
    Ok(e) => Some(e.message),
    Err(_) => None,
  }
}
