//! Error type shared by every API handler.
//!
//! Validation problems carry the exact message the client should see.
//! Upstream and parse failures carry two strings: a fixed `public` message
//! for the wire and a `detail` that only ever reaches the logs. Each
//! endpoint owns its public message so a client cannot tell a model
//! failure from a mangled model reply.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request is missing a required field or names something we do not know.
    #[error("{0}")]
    Validation(String),

    /// Nothing lives at the requested id.
    #[error("{0}")]
    NotFound(String),

    /// An upstream call (model or execution engine) failed.
    #[error("{public}: {detail}")]
    Upstream {
        public: &'static str,
        detail: String,
    },

    /// The upstream answered but the body was not in the shape we expect.
    #[error("{public}: {detail}")]
    Parse {
        public: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn upstream(public: &'static str, detail: impl Into<String>) -> Self {
        Self::Upstream {
            public,
            detail: detail.into(),
        }
    }

    pub fn parse(public: &'static str, detail: impl Into<String>) -> Self {
        Self::Parse {
            public,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } | Self::Parse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message that goes on the wire. Upstream/parse details stay out.
    pub fn public_message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg,
            Self::Upstream { public, .. } | Self::Parse { public, .. } => public,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(msg) => {
                debug!(target: "api", %msg, "request rejected");
            }
            Self::NotFound(msg) => {
                debug!(target: "api", %msg, "lookup missed");
            }
            Self::Upstream { public, detail } => {
                error!(target: "api", public, %detail, "upstream failure");
            }
            Self::Parse { public, detail } => {
                error!(target: "api", public, %detail, "upstream reply unusable");
            }
        }
        let body = Json(json!({ "message": self.public_message() }));
        (self.status(), body).into_response()
    }
}
