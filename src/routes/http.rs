//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; validation happens here so `logic` only ever
//! sees present, non-empty fields.

use std::sync::Arc;
use axum::{extract::{State, Path}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::logic::{execute_code, generate_buggy_code, generate_test_cases};
use crate::protocol::*;
use crate::state::AppState;
use crate::util::non_empty;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_puzzles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let list: Vec<PuzzleSummaryOut> = state.puzzles.iter().map(to_summary).collect();
  info!(target: "puzzle", count = list.len(), "HTTP puzzle listing served");
  Json(list)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_puzzle(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<PuzzleOut>, ApiError> {
  let p = state
    .get_puzzle(&id)
    .ok_or_else(|| ApiError::not_found(format!("No puzzle with id '{}'", id)))?;
  info!(target: "puzzle", %id, title = %p.title, "HTTP puzzle served");
  Ok(Json(to_out(p)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_languages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let list: Vec<LanguageOut> = state.languages.iter().map(to_language_out).collect();
  Json(list)
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_generate_buggy_code(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateBuggyCodeIn>,
) -> Result<Json<GenerateBuggyCodeOut>, ApiError> {
  let (level, language) = match (non_empty(body.level), non_empty(body.language)) {
    (Some(l), Some(g)) => (l, g),
    _ => return Err(ApiError::validation("Level and language are required")),
  };
  let artifact = generate_buggy_code(&state, &level, &language).await?;
  info!(
    target: "genai",
    %level, %language,
    code_len = artifact.code.len(),
    title_len = artifact.problem_title.len(),
    "HTTP buggy code generated"
  );
  Ok(Json(artifact.into()))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_testcase(
  State(state): State<Arc<AppState>>,
  Json(body): Json<TestCaseIn>,
) -> Result<Json<TestCaseOut>, ApiError> {
  let description = non_empty(body.problem_description)
    .ok_or_else(|| ApiError::validation("Problem description is required"))?;
  let test_cases = generate_test_cases(&state, &description).await?;
  info!(target: "genai", description_len = description.len(), "HTTP test cases generated");
  Ok(Json(TestCaseOut { test_cases }))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_execute(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ExecuteIn>,
) -> Result<Json<ExecuteOut>, ApiError> {
  let (language, code) = match (non_empty(body.language), body.code) {
    (Some(l), Some(c)) => (l, c),
    _ => return Err(ApiError::validation("Language and code are required")),
  };
  let output = execute_code(&state, &language, body.version.as_deref(), &code).await?;
  info!(target: "daccy_backend", %language, output_len = output.len(), "HTTP code executed");
  Ok(Json(ExecuteOut { output }))
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::http::{Request, StatusCode};
  use axum::Router;
  use serde_json::{json, Value};
  use tower::ServiceExt;

  use crate::config::Prompts;
  use crate::gemini::Gemini;
  use crate::languages::builtin_languages;
  use crate::piston::Piston;
  use crate::routes::build_router;
  use crate::seeds::seed_puzzles;
  use crate::state::AppState;

  /// Serve one canned response for every request, on an ephemeral port.
  async fn spawn_upstream(status: StatusCode, body: Value) -> String {
    let app = Router::new().fallback(move || {
      let body = body.clone();
      async move { (status, axum::Json(body)) }
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
  }

  fn gemini_reply(text: &str) -> Value {
    json!({
      "candidates": [{ "content": { "parts": [{ "text": text }] } }],
      "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 20, "totalTokenCount": 30 }
    })
  }

  fn test_app(gemini_base: Option<&str>, piston_base: &str) -> Router {
    let state = AppState {
      puzzles: seed_puzzles(),
      languages: builtin_languages(),
      prompts: Prompts::default(),
      gemini: gemini_base.map(|b| Gemini {
        client: reqwest::Client::new(),
        api_key: "test-key".into(),
        base_url: b.to_string(),
        model: "gemini-1.5-flash".into(),
      }),
      piston: Piston {
        client: reqwest::Client::new(),
        base_url: piston_base.to_string(),
      },
    };
    build_router(Arc::new(state))
  }

  async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
      .oneshot(
        Request::post(path)
          .header("content-type", "application/json")
          .body(axum::body::Body::from(body.to_string()))
          .unwrap(),
      )
      .await
      .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
      .oneshot(Request::get(path).body(axum::body::Body::empty()).unwrap())
      .await
      .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn health_answers_ok() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = get_json(app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
  }

  #[tokio::test]
  async fn puzzle_listing_has_the_six_seeds() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = get_json(app, "/api/v1/puzzles").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["id"], "p1");
    assert_eq!(list[0]["title"], "The Palindromic Labyrinth");
    // listing entries stay slim
    assert!(list[0].get("description").is_none());
  }

  #[tokio::test]
  async fn puzzle_by_id_carries_description_and_hint() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = get_json(app, "/api/v1/puzzles/p5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Anagram Archipelago");
    assert_eq!(body["difficulty"], "Easy");
    assert!(body["description"].as_str().unwrap().contains("anagram"));
    assert!(!body["hint"].as_str().unwrap().is_empty());
  }

  #[tokio::test]
  async fn unknown_puzzle_is_404_with_message() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = get_json(app, "/api/v1/puzzles/p99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No puzzle with id 'p99'");
  }

  #[tokio::test]
  async fn language_table_is_served_with_boilerplates() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = get_json(app, "/api/v1/languages").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[1]["pistonLanguage"], "python");
    assert_eq!(list[1]["pistonVersion"], "3.10.0");
    assert!(list[1]["boilerplate"].as_str().unwrap().contains("def main()"));
  }

  #[tokio::test]
  async fn buggy_code_requires_level_and_language() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) =
      post_json(app.clone(), "/api/v1/generate-buggy-code", json!({ "language": "python" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Level and language are required");

    let (status, body) =
      post_json(app, "/api/v1/generate-buggy-code", json!({ "level": "", "language": "python" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Level and language are required");
  }

  #[tokio::test]
  async fn buggy_code_success_returns_all_four_strings() {
    let reply = "Here you go:\n```python\ndef f(n):\n    return n - 1\n```";
    let gemini = spawn_upstream(StatusCode::OK, gemini_reply(reply)).await;
    let app = test_app(Some(&gemini), "http://127.0.0.1:1");

    let (status, body) = post_json(
      app,
      "/api/v1/generate-buggy-code",
      json!({ "level": "easy", "language": "python" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // the fenced block, untrimmed, with indentation intact
    assert_eq!(body["code"], "def f(n):\n    return n - 1\n");
    // follow-ups get the same canned reply; they just need to be non-empty strings
    assert!(!body["hint"].as_str().unwrap().is_empty());
    assert!(!body["problemTitleText"].as_str().unwrap().is_empty());
    assert!(!body["resolveHints"].as_str().unwrap().is_empty());
  }

  #[tokio::test]
  async fn buggy_code_upstream_failure_is_a_generic_500() {
    let gemini = spawn_upstream(
      StatusCode::TOO_MANY_REQUESTS,
      json!({ "error": { "message": "quota exceeded" } }),
    )
    .await;
    let app = test_app(Some(&gemini), "http://127.0.0.1:1");

    let (status, body) = post_json(
      app,
      "/api/v1/generate-buggy-code",
      json!({ "level": "easy", "language": "python" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating buggy code");
  }

  #[tokio::test]
  async fn buggy_code_without_a_key_is_a_generic_500() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = post_json(
      app,
      "/api/v1/generate-buggy-code",
      json!({ "level": "hard", "language": "java" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating buggy code");
  }

  #[tokio::test]
  async fn whitespace_reply_falls_back_to_the_literal_strings() {
    // a reply with no usable region: no fence, nothing but whitespace
    let gemini = spawn_upstream(StatusCode::OK, gemini_reply("   \n\t\n")).await;
    let app = test_app(Some(&gemini), "http://127.0.0.1:1");

    // buggy-code flow substitutes the fixed code string and still runs the
    // follow-ups over it
    let (status, body) = post_json(
      app.clone(),
      "/api/v1/generate-buggy-code",
      json!({ "level": "easy", "language": "python" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "No code generated");
    assert!(body["hint"].is_string());
    assert!(body["resolveHints"].is_string());

    // test-case flow answers with the fallback object instead of parsing
    let (status, body) =
      post_json(app, "/api/v1/testcase", json!({ "problemDescription": "sum two numbers" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["testCases"]["error"], "No test cases generated");
  }

  #[tokio::test]
  async fn testcase_requires_a_description() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = post_json(app.clone(), "/api/v1/testcase", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Problem description is required");

    // the empty string counts as missing
    let (status, body) =
      post_json(app, "/api/v1/testcase", json!({ "problemDescription": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Problem description is required");
  }

  #[tokio::test]
  async fn testcase_json_is_passed_through_verbatim() {
    let reply = "```json\n[{\"input\": \"AABCBA\", \"expectedOutput\": \"5\"}, {\"input\": \"\", \"expectedOutput\": \"0\"}]\n```";
    let gemini = spawn_upstream(StatusCode::OK, gemini_reply(reply)).await;
    let app = test_app(Some(&gemini), "http://127.0.0.1:1");

    let (status, body) =
      post_json(app, "/api/v1/testcase", json!({ "problemDescription": "longest palindrome" })).await;
    assert_eq!(status, StatusCode::OK);
    let cases = body["testCases"].as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["input"], "AABCBA");
    assert_eq!(cases[0]["expectedOutput"], "5");
  }

  #[tokio::test]
  async fn testcase_shape_is_not_validated() {
    // parses as JSON but matches no declared record type: passed through anyway
    let gemini = spawn_upstream(StatusCode::OK, gemini_reply("{\"whatever\": 42}")).await;
    let app = test_app(Some(&gemini), "http://127.0.0.1:1");

    let (status, body) =
      post_json(app, "/api/v1/testcase", json!({ "problemDescription": "anything" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["testCases"]["whatever"], 42);
  }

  #[tokio::test]
  async fn testcase_unparsable_reply_is_a_generic_500() {
    let gemini = spawn_upstream(StatusCode::OK, gemini_reply("sorry, I can't do JSON today")).await;
    let app = test_app(Some(&gemini), "http://127.0.0.1:1");

    let (status, body) =
      post_json(app, "/api/v1/testcase", json!({ "problemDescription": "sum two numbers" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating test cases");
  }

  #[tokio::test]
  async fn execute_relays_run_output() {
    let piston = spawn_upstream(StatusCode::OK, json!({ "run": { "output": "1\n" } })).await;
    let app = test_app(None, &piston);

    let (status, body) = post_json(
      app,
      "/api/v1/execute",
      json!({ "language": "javascript", "code": "console.log(1)" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "1\n");
  }

  #[tokio::test]
  async fn execute_rejects_unknown_language() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = post_json(
      app,
      "/api/v1/execute",
      json!({ "language": "cobol", "code": "DISPLAY '1'." }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown language 'cobol'");
  }

  #[tokio::test]
  async fn execute_requires_language_and_code() {
    let app = test_app(None, "http://127.0.0.1:1");
    let (status, body) = post_json(app, "/api/v1/execute", json!({ "language": "python" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Language and code are required");
  }

  #[tokio::test]
  async fn execute_upstream_failure_is_a_generic_500() {
    let piston = spawn_upstream(
      StatusCode::BAD_REQUEST,
      json!({ "message": "runtime is unknown" }),
    )
    .await;
    let app = test_app(None, &piston);

    let (status, body) = post_json(
      app,
      "/api/v1/execute",
      json!({ "language": "python", "code": "print(1)" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error executing code");
  }
}
