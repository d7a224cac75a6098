use std::fmt;

use serde::Deserialize;

/// A single person's full résumé document, as served from `{id}.json`.
///
/// Top-level sections are optional: an absent section leaves its template
/// region untouched instead of failing the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub profile_summary: Option<String>,
    #[serde(default)]
    pub experience: Option<Vec<Job>>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

impl Resume {
    /// Browser tab title: `{name} - {headline} Resume`, where the headline is
    /// the part of `title` before the first `|`.
    pub fn document_title(&self) -> String {
        let headline = self.title.split('|').next().unwrap_or_default().trim();
        format!("{} - {} Resume", self.name, headline)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub languages_frameworks: Vec<String>,
    pub backend_databases: Vec<String>,
    pub devops_tools: Vec<String>,
    #[serde(default)]
    pub approach: Option<Vec<String>>,
}

impl Skills {
    pub fn approach(&self) -> &[String] {
        self.approach.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub specialization: Option<String>,
    pub institution: String,
    pub location: String,
    pub year_completed: Year,
}

impl Education {
    /// The specialization line, if there is anything to show.
    pub fn specialization(&self) -> Option<&str> {
        self.specialization
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certification {
    pub name: String,
    pub year_completed: Year,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// Completion year. Source documents write it either as `2019` or `"2019"`
/// (sometimes `"Expected 2025"`), and it is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{n}"),
            Year::Text(s) => f.write_str(s),
        }
    }
}
