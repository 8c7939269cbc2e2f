//! Application state: puzzle bank, language table, prompts, and upstream clients.
//!
//! This module owns:
//!   - the puzzle list (TOML bank entries + built-in seeds)
//!   - the fixed language table
//!   - the prompt templates (from TOML or defaults)
//!   - optional Gemini client, always-on Piston client
//!
//! Everything here is read-only after startup; handlers never mutate state,
//! so the fields are plain values behind the shared `Arc`.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::{load_app_config_from_env, Prompts};
use crate::domain::{Puzzle, PuzzleSource};
use crate::gemini::Gemini;
use crate::languages::{builtin_languages, LanguageConfig};
use crate::piston::Piston;
use crate::seeds::seed_puzzles;

#[derive(Clone)]
pub struct AppState {
    pub puzzles: Vec<Puzzle>,
    pub languages: Vec<LanguageConfig>,
    pub prompts: Prompts,
    pub gemini: Option<Gemini>,
    pub piston: Piston,
}

impl AppState {
    /// Build state from env: load config, merge the puzzle bank with the
    /// built-in seeds, init upstream clients.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        // Load TOML config if provided (prompts + optional local bank).
        let cfg_opt = load_app_config_from_env();
        let prompts = cfg_opt
            .as_ref()
            .map(|c| c.prompts.clone())
            .unwrap_or_default();

        let mut puzzles: Vec<Puzzle> = Vec::new();

        // Insert config-based puzzles first (if any).
        if let Some(cfg) = &cfg_opt {
            for pc in &cfg.puzzles {
                let id = pc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
                puzzles.push(Puzzle {
                    id,
                    title: pc.title.clone(),
                    category: pc.category.clone(),
                    difficulty: pc.difficulty.clone(),
                    source: PuzzleSource::LocalBank,
                    description: pc.description.clone(),
                    hint: pc.hint.clone().unwrap_or_default(),
                });
            }
        }

        // Always append built-in seeds, but don't shadow bank ids.
        for p in seed_puzzles() {
            if puzzles.iter().all(|q| q.id != p.id) {
                puzzles.push(p);
            }
        }

        // Inventory summary by difficulty/source.
        let mut count_by_diff: std::collections::HashMap<String, (usize, usize)> =
            std::collections::HashMap::new();
        for p in &puzzles {
            let entry = count_by_diff.entry(p.difficulty.clone()).or_insert((0, 0));
            match p.source {
                PuzzleSource::LocalBank => entry.0 += 1,
                PuzzleSource::Seed => entry.1 += 1,
            }
        }
        for (diff, (bank, seed)) in count_by_diff {
            info!(target: "puzzle", %diff, local_bank = bank, seed = seed, "Startup puzzle inventory");
        }

        // Build optional Gemini client (if API key present).
        let gemini = Gemini::from_env();
        if let Some(g) = &gemini {
            info!(target: "genai", base_url = %g.base_url, model = %g.model, "Gemini enabled.");
        } else {
            info!(target: "genai", "Gemini disabled (no GEMINI_API_KEY). Generation endpoints will answer 500.");
        }

        let piston = Piston::from_env();
        info!(target: "daccy_backend", base_url = %piston.base_url, "Piston relay configured.");

        let languages = builtin_languages();

        Self {
            puzzles,
            languages,
            prompts,
            gemini,
            piston,
        }
    }

    /// Read-only access to a puzzle by id.
    pub fn get_puzzle(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }
}
