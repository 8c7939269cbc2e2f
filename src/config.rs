//! Loading app configuration (prompt templates + optional puzzle bank) from TOML.
//!
//! See `AppConfig` and `Prompts` for expected schema.

use serde::Deserialize;
use tracing::{info, error};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub prompts: Prompts,
  #[serde(default)]
  pub puzzles: Vec<PuzzleCfg>,
}

/// Puzzle entry accepted in TOML configuration. `id` is optional; a fresh
/// one is generated when absent. `hint` is the static coaching text.
#[derive(Clone, Debug, Deserialize)]
pub struct PuzzleCfg {
  #[serde(default)] pub id: Option<String>,
  pub title: String,
  pub category: String,
  pub difficulty: String,
  pub description: String,
  #[serde(default)] pub hint: Option<String>,
}

/// Prompt templates used by the Gemini client. Placeholders use `{key}`
/// syntax and are filled with `util::fill_template`. Override in TOML if
/// you need to tune tone/structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  // Buggy-code flow: one generation plus three follow-ups over the result.
  pub buggy_code_template: String,
  pub hint_template: String,
  pub title_template: String,
  pub resolve_hints_template: String,
  // Test-case flow
  pub testcase_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      buggy_code_template: "Generate a buggy code which isn't easy to fix for a {level} level problem in {language}. Only provide the code, you may remove random lines, no comments, and no extra text.".into(),
      hint_template: "Provide a clear and concise explanation of the following code. The explanation should include a brief overview of the program's functionality, a breakdown of each key component and its purpose, and an outline of the input/output behavior. Aim for clarity and precision, ensuring that the description is easy to understand for someone with a basic understanding of {language}. The total length should not exceed 500 characters. Here is the code:\n{code}".into(),
      title_template: "Generate the problem title for {code}, with no unnecessary text or special characters: ".into(),
      resolve_hints_template: "Analyze the following buggy code and generate a list of specific, actionable hints to resolve the bugs. The hints should include identifying missing or incorrect lines, potential logic errors, and syntax issues. Do not fix the code, only provide hints. Keep the list concise and clear. Here is the code:\n{code}".into(),
      testcase_template: "Generate only and nothing else but a list of at least 3 diverse and valid test cases for the following problem description. Each test case should include an 'input' and 'expectedOutput'. The 'input' should be a structured object (e.g., an array, string, number, etc.), and the 'expectedOutput' should be a corresponding result. Provide at least one edge case. The format should be JSON, and there should be no additional explanations. Problem description:\n\n{description}".into(),
    }
  }
}

/// Attempt to load `AppConfig` from DACCY_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("DACCY_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "daccy_backend", %path, "Loaded app config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "daccy_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "daccy_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
