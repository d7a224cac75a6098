pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listing page
        .route("/", get(pages::handle_listing))
        .route("/preview/:branch", get(pages::handle_listing))
        .route("/preview/:branch/", get(pages::handle_listing))
        // Resume pages
        .route("/resumes/*rest", get(pages::handle_resume))
        .route("/preview/:branch/resumes/*rest", get(pages::handle_resume))
        // Resume paths without an identifier
        .route("/resumes", get(pages::handle_missing_resume))
        .route("/resumes/", get(pages::handle_missing_resume))
        .route("/preview/:branch/resumes", get(pages::handle_missing_resume))
        .route("/preview/:branch/resumes/", get(pages::handle_missing_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::source::{DocumentSource, FsSource};
    use crate::templates::Templates;

    const INDEX: &str = r#"{"resumes": [
        {"name": "Jane Doe", "title": "Backend Engineer", "location": "Berlin, Germany",
         "summary": "Ten years of services.", "featured_skills": ["Rust", "Kafka"],
         "url": "resumes/jane-doe/"},
        {"name": "John Smith", "title": "Designer", "location": "Lisbon, Portugal",
         "summary": "Design systems.", "featured_skills": [], "url": "resumes/john-smith/"}
    ]}"#;

    const JANE: &str = r#"{
        "name": "Jane Doe",
        "title": "Backend Engineer | Platform",
        "location": "Berlin, Germany",
        "contact": {"email": "jane@example.com", "phone": "+49 1", "linkedin": "https://www.linkedin.com/in/jane", "portfolio": "https://jane.dev"},
        "profile_summary": "Ten years of services.",
        "experience": [],
        "skills": {"languages_frameworks": ["Rust"], "backend_databases": [], "devops_tools": [], "approach": ["Kanban"]},
        "education": [{"degree": "BSc", "institution": "TU", "location": "Berlin", "year_completed": 2012}],
        "certifications": [],
        "projects": [],
        "languages": ["English"]
    }"#;

    fn app(source: Arc<dyn DocumentSource>) -> Router {
        build_router(AppState {
            source,
            templates: Arc::new(Templates::new().unwrap()),
        })
    }

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resumes.json"), INDEX).unwrap();
        std::fs::write(dir.path().join("jane-doe.json"), JANE).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{\"name\": ").unwrap();
        dir
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = data_dir();
        let (status, body) = get_page(app(Arc::new(FsSource::new(dir.path()))), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_listing_page() {
        let dir = data_dir();
        let (status, body) = get_page(app(Arc::new(FsSource::new(dir.path()))), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert_eq!(body.matches("class=\"resume-card\"").count(), 2);
        let jane = body.find("Jane Doe").unwrap();
        let john = body.find("John Smith").unwrap();
        assert!(jane < john, "cards must keep index order");
    }

    #[tokio::test]
    async fn test_preview_listing_page() {
        let dir = data_dir();
        let (status, body) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/preview/redesign/",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<span id=\"preview-branch\">redesign</span>"));
        assert!(body.contains("display: block"));
    }

    #[tokio::test]
    async fn test_listing_without_index_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_page(app(Arc::new(FsSource::new(dir.path()))), "/").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("error loading the resume list"));
        assert!(!body.contains("resume-card"));
    }

    #[tokio::test]
    async fn test_resume_page() {
        let dir = data_dir();
        let (status, body) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/resumes/jane-doe/",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Jane Doe - Backend Engineer Resume</title>"));
        assert!(body.contains(">linkedin.com/in/jane<"));
        assert!(body.contains("<div class=\"sidebar-skill\">KANBAN</div>"));
    }

    #[tokio::test]
    async fn test_resume_page_without_trailing_slash() {
        let dir = data_dir();
        let (status, _) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/resumes/jane-doe",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_resume_is_not_found_page() {
        let dir = data_dir();
        let (status, body) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/resumes/nobody/",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Resume Not Found"));
        assert!(body.contains("href=\"../../\""));
        assert!(!body.contains("skills-grid"));
    }

    #[tokio::test]
    async fn test_malformed_resume_is_not_found_page() {
        let dir = data_dir();
        let (status, body) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/resumes/broken/",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Resume Not Found"));
    }

    #[tokio::test]
    async fn test_preview_resume_page() {
        let dir = data_dir();
        let (status, _) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/preview/redesign/resumes/jane-doe/",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_resumes_without_identifier_is_not_found_page() {
        let dir = data_dir();
        for uri in ["/resumes/", "/resumes", "/preview/x/resumes/", "/preview/x/resumes"] {
            let (status, body) = get_page(app(Arc::new(FsSource::new(dir.path()))), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.contains("Resume Not Found"), "{uri}");
            assert!(body.contains("href=\"../../\""), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_resume_page_escapes_document_text() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("mallory.json"),
            r#"{"name": "<script>alert(1)</script>", "title": "Engineer"}"#,
        )
        .unwrap();
        let (status, body) = get_page(
            app(Arc::new(FsSource::new(dir.path()))),
            "/resumes/mallory/",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
