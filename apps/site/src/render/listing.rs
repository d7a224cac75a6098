use serde_json::{json, Value};

use crate::models::{ResumeIndex, ResumeIndexEntry};

use super::{Region, RegionUpdate};

/// Summary card for one résumé on the landing page. Both card links point at
/// `url`; the template opens the second in a new tab.
pub fn resume_card(entry: &ResumeIndexEntry) -> Value {
    json!({
        "name": entry.name,
        "title": entry.title,
        "location": entry.location,
        "summary": entry.summary,
        "featured_skills": entry.featured_skills,
        "url": entry.url,
    })
}

/// Fills the grid with one card per index entry, in index order.
pub fn listing_regions(index: &ResumeIndex) -> Vec<RegionUpdate> {
    let cards: Vec<Value> = index.resumes.iter().map(resume_card).collect();
    vec![RegionUpdate::content(
        Region::ResumeGrid,
        json!({ "cards": cards }),
    )]
}

/// Reveals the preview banner with the deployment's branch name.
pub fn preview_regions(branch: &str) -> Vec<RegionUpdate> {
    vec![
        RegionUpdate::text(Region::PreviewBranch, branch),
        RegionUpdate::show(Region::PreviewIndicator),
    ]
}
