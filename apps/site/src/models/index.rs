use serde::Deserialize;

/// The index document listing every résumé shown on the landing page.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeIndex {
    pub resumes: Vec<ResumeIndexEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeIndexEntry {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub featured_skills: Vec<String>,
    pub url: String,
}
