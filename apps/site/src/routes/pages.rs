use axum::{extract::State, http::StatusCode, http::Uri, response::Html};

use crate::errors::{AppError, PageError};
use crate::pages;
use crate::render::Page;
use crate::source::LoadError;
use crate::state::AppState;

type PageResponse = Result<(StatusCode, Html<String>), AppError>;

/// GET / and GET /preview/:branch/
pub async fn handle_listing(State(state): State<AppState>, uri: Uri) -> PageResponse {
    let outcome = pages::listing(state.source.as_ref(), uri.path()).await;
    respond(&state, outcome)
}

/// GET /resumes/*rest and GET /preview/:branch/resumes/*rest
pub async fn handle_resume(State(state): State<AppState>, uri: Uri) -> PageResponse {
    let outcome = pages::resume(state.source.as_ref(), uri.path()).await;
    respond(&state, outcome)
}

/// GET /resumes/ and GET /preview/:branch/resumes/: nothing to resolve.
pub async fn handle_missing_resume(State(state): State<AppState>, uri: Uri) -> PageResponse {
    let outcome = Err(PageError::ResumeNotFound(LoadError::MissingIdentifier {
        path: uri.path().to_string(),
    }));
    respond(&state, outcome)
}

/// Renders either the page or the error view standing in for it.
fn respond(state: &AppState, outcome: Result<Page, PageError>) -> PageResponse {
    let (status, page) = match outcome {
        Ok(page) => (StatusCode::OK, page),
        Err(error) => {
            error.log();
            (error.status(), error.error_page())
        }
    };

    let html = state
        .templates
        .render(&page)
        .map_err(|e| AppError::Render(e.to_string()))?;
    Ok((status, Html(html)))
}
