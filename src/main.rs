//! Daccy · Coding Practice Backend
//!
//! - Axum HTTP API + static SPA fallback (./static/index.html)
//! - Optional Gemini integration (via environment variables)
//! - Piston code-execution relay
//!
//! Important env variables:
//!   PORT          : u16 (default 3000)
//!   GEMINI_API_KEY    : enables the generation endpoints if present
//!   GEMINI_BASE_URL    : default "https://generativelanguage.googleapis.com/v1beta"
//!   GEMINI_MODEL  : default "gemini-1.5-flash"
//!   PISTON_BASE_URL   : default "https://emkc.org/api/v2/piston"
//!   DACCY_CONFIG_PATH  : path to TOML config (prompt templates + optional puzzle bank)
//!   LOG_LEVEL    : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT      : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod seeds;
mod languages;
mod extract;
mod error;
mod state;
mod protocol;
mod logic;
mod gemini;
mod piston;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (puzzle bank, language table, clients).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "daccy_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
