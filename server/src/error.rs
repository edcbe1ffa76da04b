//! Error types for the proxy server

use gargan_core::types::SignError;
use serde_json::{json, Value};
use thiserror::Error;
use warp::http::StatusCode;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Request failed with status code {status}")]
    Upstream { status: u16, details: Option<Value> },

    #[error("Signing error: {0}")]
    Signing(#[from] SignError),

    #[error("{0}")]
    BadRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ProxyError {
    /// Upstream status when it is an error status, 400 for bad input, else 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { status, .. } if *status >= 400 => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{"success": false, "error": ..., "details": ...}`
    pub fn to_body(&self) -> Value {
        let details = match self {
            ProxyError::Upstream { details, .. } => details.clone().unwrap_or(Value::Null),
            _ => Value::Null,
        };
        json!({
            "success": false,
            "error": self.to_string(),
            "details": details,
        })
    }
}

impl warp::reject::Reject for ProxyError {}

pub type Result<T> = std::result::Result<T, ProxyError>;
