use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::render::error::{listing_error_page, not_found_page};
use crate::render::Page;
use crate::source::LoadError;

/// Page-level failures. Each one renders its static error view; nothing is
/// retried and nothing propagates past the response.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Resume list unavailable: {error}")]
    ListingUnavailable {
        #[source]
        error: LoadError,
        preview_branch: Option<String>,
    },

    #[error("Resume not found: {0}")]
    ResumeNotFound(#[source] LoadError),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::ListingUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PageError::ResumeNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// The static view shown in place of the page that failed.
    pub fn error_page(&self) -> Page {
        match self {
            PageError::ListingUnavailable { preview_branch, .. } => {
                listing_error_page(preview_branch.as_deref())
            }
            PageError::ResumeNotFound(_) => not_found_page(),
        }
    }

    pub fn log(&self) {
        match self {
            PageError::ListingUnavailable { error, .. } => {
                tracing::error!("Error loading resume list: {error}")
            }
            PageError::ResumeNotFound(
                error @ (LoadError::MissingIdentifier { .. } | LoadError::NotFound { .. }),
            ) => tracing::warn!("Error loading resume: {error}"),
            PageError::ResumeNotFound(error) => tracing::error!("Error loading resume: {error}"),
        }
    }
}

/// Failures that leave no page to show at all.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template render error: {0}")]
    Render(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Render(msg) => {
                tracing::error!("Template render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
