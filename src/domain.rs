//! Domain models used by the backend: puzzles, their provenance, and the
//! artifact assembled by the buggy-code generator.

use serde::{Deserialize, Serialize};

/// Where did we get the puzzle from?
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleSource {
  LocalBank, // from user-provided TOML bank
  Seed,      // built-in catalogue
}

/// A practice puzzle as served to the SPA. Read-only after startup;
/// nothing about a puzzle changes at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Puzzle {
  pub id: String,
  pub title: String,
  pub category: String,   // e.g. "Arrays & Strings"
  pub difficulty: String, // free-form ("Easy", "Medium", "Hard")
  pub source: PuzzleSource,

  pub description: String,
  /// Static coaching text shown behind the "Show Hint" toggle.
  #[serde(default)]
  pub hint: String,
}

/// Output of the buggy-code flow: four strings assembled from four
/// independent model calls over the same extracted code. Transient; never
/// stored beyond the request that produced it.
#[derive(Clone, Debug)]
pub struct GeneratedArtifact {
  pub code: String,
  pub hint: String,
  pub problem_title: String,
  pub resolve_hints: String,
}
