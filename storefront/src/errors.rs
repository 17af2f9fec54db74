// storefront/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Template Not Found: {0}")]
  TemplateNotFound(String),

  #[error("Context Serialization Error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::TemplateNotFound(name) => {
        HttpResponse::InternalServerError().json(json!({"error": "Template not found", "detail": name}))
      }
      AppError::Serialization(e) => HttpResponse::InternalServerError()
        .json(json!({"error": "Could not build page context", "detail": e.to_string()})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
