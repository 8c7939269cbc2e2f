//! Public request/response structs for the HTTP endpoints (serde ready).
//! Wire field names stay camelCase where the original contract used them.
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{GeneratedArtifact, Puzzle, PuzzleSource};
use crate::languages::LanguageConfig;

//
// Generation endpoints
//

/// Body of POST /api/v1/generate-buggy-code. Fields are optional here so the
/// handler can answer the contract's 400 instead of a serde-driven 422.
#[derive(Debug, Deserialize)]
pub struct GenerateBuggyCodeIn {
    pub level: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateBuggyCodeOut {
    pub code: String,
    pub hint: String,
    #[serde(rename = "problemTitleText")]
    pub problem_title_text: String,
    #[serde(rename = "resolveHints")]
    pub resolve_hints: String,
}

impl From<GeneratedArtifact> for GenerateBuggyCodeOut {
    fn from(a: GeneratedArtifact) -> Self {
        Self {
            code: a.code,
            hint: a.hint,
            problem_title_text: a.problem_title,
            resolve_hints: a.resolve_hints,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TestCaseIn {
    #[serde(rename = "problemDescription")]
    pub problem_description: Option<String>,
}

/// `test_cases` is whatever JSON the model produced — an array of
/// `{input, expectedOutput}` objects when it behaves, passed through
/// uninspected either way.
#[derive(Debug, Serialize)]
pub struct TestCaseOut {
    #[serde(rename = "testCases")]
    pub test_cases: serde_json::Value,
}

//
// Execution relay
//

#[derive(Debug, Deserialize)]
pub struct ExecuteIn {
    pub language: Option<String>,
    pub version: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExecuteOut {
    pub output: String,
}

//
// Puzzle and language data for the SPA
//

/// Listing entry: what the puzzle grid needs, nothing more.
#[derive(Debug, Serialize)]
pub struct PuzzleSummaryOut {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize)]
pub struct PuzzleOut {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub source: PuzzleSource,
    pub description: String,
    pub hint: String,
}

pub fn to_summary(p: &Puzzle) -> PuzzleSummaryOut {
    PuzzleSummaryOut {
        id: p.id.clone(),
        title: p.title.clone(),
        category: p.category.clone(),
        difficulty: p.difficulty.clone(),
    }
}

pub fn to_out(p: &Puzzle) -> PuzzleOut {
    PuzzleOut {
        id: p.id.clone(),
        title: p.title.clone(),
        category: p.category.clone(),
        difficulty: p.difficulty.clone(),
        source: p.source.clone(),
        description: p.description.clone(),
        hint: p.hint.clone(),
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageOut {
    pub name: String,
    #[serde(rename = "pistonLanguage")]
    pub piston_language: String,
    #[serde(rename = "pistonVersion")]
    pub piston_version: String,
    #[serde(rename = "editorLanguage")]
    pub editor_language: String,
    pub boilerplate: String,
    #[serde(rename = "tabSize")]
    pub tab_size: u8,
    #[serde(rename = "insertSpaces")]
    pub insert_spaces: bool,
}

pub fn to_language_out(l: &LanguageConfig) -> LanguageOut {
    LanguageOut {
        name: l.name.clone(),
        piston_language: l.piston_language.clone(),
        piston_version: l.piston_version.clone(),
        editor_language: l.editor_language.clone(),
        boilerplate: l.boilerplate.clone(),
        tab_size: l.tab_size,
        insert_spaces: l.insert_spaces,
    }
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
