//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - The buggy-code flow (one generation, extract the code block, then
//!     three follow-ups in flight at once)
//!   - The test-case flow (one generation, extract, parse as JSON)
//!   - The execution relay (language table lookup, forward to Piston)

use tracing::{error, instrument};

use crate::domain::GeneratedArtifact;
use crate::error::ApiError;
use crate::extract::{extract_code_block, CodeBlock};
use crate::gemini::Gemini;
use crate::languages::find_language;
use crate::state::AppState;
use crate::util::fill_template;

const BUGGY_CODE_PUBLIC_ERR: &str = "Error generating buggy code";
const TESTCASE_PUBLIC_ERR: &str = "Error generating test cases";
const EXECUTE_PUBLIC_ERR: &str = "Error executing code";

fn gemini_or_err<'a>(
  state: &'a AppState,
  public: &'static str,
) -> Result<&'a Gemini, ApiError> {
  state
    .gemini
    .as_ref()
    .ok_or_else(|| ApiError::upstream(public, "GEMINI_API_KEY is not set"))
}

/// One generation call to produce buggy source, then three concurrent
/// follow-ups over whatever code we extracted. All four must succeed; the
/// first failure fails the whole operation and nothing partial is returned.
#[instrument(level = "info", skip(state), fields(%level, %language))]
pub async fn generate_buggy_code(
  state: &AppState,
  level: &str,
  language: &str,
) -> Result<GeneratedArtifact, ApiError> {
  let gemini = gemini_or_err(state, BUGGY_CODE_PUBLIC_ERR)?;

  let prompt = fill_template(
    &state.prompts.buggy_code_template,
    &[("level", level), ("language", language)],
  );
  let reply = gemini
    .generate(&prompt)
    .await
    .map_err(|e| ApiError::upstream(BUGGY_CODE_PUBLIC_ERR, e))?;

  // Never trim the extracted code; indentation is part of the payload.
  let code = extract_code_block(&reply).into_text().unwrap_or_else(|| {
    error!(target: "genai", reply_len = reply.len(), "Model reply held no code; using fallback text");
    "No code generated".to_string()
  });

  let hint_prompt = fill_template(
    &state.prompts.hint_template,
    &[("language", language), ("code", &code)],
  );
  let title_prompt = fill_template(&state.prompts.title_template, &[("code", &code)]);
  let resolve_prompt = fill_template(&state.prompts.resolve_hints_template, &[("code", &code)]);

  // All three in flight at once; the combined result exists only when every
  // one of them settled successfully.
  let (hint, problem_title, resolve_hints) = tokio::try_join!(
    gemini.generate(&hint_prompt),
    gemini.generate(&title_prompt),
    gemini.generate(&resolve_prompt),
  )
  .map_err(|e| ApiError::upstream(BUGGY_CODE_PUBLIC_ERR, e))?;

  Ok(GeneratedArtifact {
    code,
    hint,
    problem_title,
    resolve_hints,
  })
}

/// One generation call asking for a JSON array of test cases. The extracted
/// region is parsed as JSON and passed through without shape validation; a
/// reply with no usable region maps to `{"error": "..."}` like the parse
/// fallback of the browser-era contract.
#[instrument(level = "info", skip(state, description), fields(description_len = description.len()))]
pub async fn generate_test_cases(
  state: &AppState,
  description: &str,
) -> Result<serde_json::Value, ApiError> {
  let gemini = gemini_or_err(state, TESTCASE_PUBLIC_ERR)?;

  let prompt = fill_template(&state.prompts.testcase_template, &[("description", description)]);
  let reply = gemini
    .generate(&prompt)
    .await
    .map_err(|e| ApiError::upstream(TESTCASE_PUBLIC_ERR, e))?;

  match extract_code_block(&reply) {
    CodeBlock::Fenced(s) | CodeBlock::Unfenced(s) => serde_json::from_str(&s)
      .map_err(|e| ApiError::parse(TESTCASE_PUBLIC_ERR, format!("testcase JSON: {}", e))),
    CodeBlock::NotFound => {
      error!(target: "genai", reply_len = reply.len(), "Model reply held no test cases; using fallback object");
      Ok(serde_json::json!({ "error": "No test cases generated" }))
    }
  }
}

/// Normalize the requested language through the table and forward the code
/// to Piston. The pinned table version is used when the request omits one.
#[instrument(level = "info", skip(state, code), fields(%language, code_len = code.len()))]
pub async fn execute_code(
  state: &AppState,
  language: &str,
  version: Option<&str>,
  code: &str,
) -> Result<String, ApiError> {
  let lang = find_language(&state.languages, language)
    .ok_or_else(|| ApiError::validation(format!("Unknown language '{}'", language)))?;
  let version = version.unwrap_or(&lang.piston_version);

  state
    .piston
    .execute(&lang.piston_language, version, code)
    .await
    .map_err(|e| ApiError::upstream(EXECUTE_PUBLIC_ERR, e))
}
