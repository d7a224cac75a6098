//! Résumé page renderers, one per template region.

use serde_json::{json, Map, Value};

use crate::models::resume::{Certification, Contact, Education, Job, Project, Resume};

use super::skills::{personal_skills_update, skills_update};
use super::{Region, RegionUpdate};

/// Every update for a résumé page. Sections absent from the document
/// produce no update, leaving the template's region as shipped.
pub fn resume_regions(resume: &Resume) -> Vec<RegionUpdate> {
    let mut updates = vec![RegionUpdate::text(
        Region::DocumentTitle,
        resume.document_title(),
    )];
    updates.extend(header_updates(resume));

    if let Some(contact) = &resume.contact {
        updates.push(contact_update(contact));
        updates.push(sidebar_contact_update(contact, resume.location.as_deref()));
    }
    if let Some(summary) = &resume.profile_summary {
        updates.push(RegionUpdate::text(Region::ProfileSummary, summary));
    }
    if let Some(experience) = &resume.experience {
        updates.push(experience_update(experience));
    }
    if let Some(skills) = &resume.skills {
        updates.push(skills_update(skills));
    }
    if let Some(education) = &resume.education {
        updates.push(education_update(education));
    }
    if let Some(certifications) = &resume.certifications {
        updates.push(certifications_update(certifications));
    }
    if let Some(projects) = &resume.projects {
        updates.push(projects_update(projects));
    }
    if let Some(languages) = &resume.languages {
        updates.push(languages_update(languages));
    }

    // Sidebar duplicates
    if let Some(education) = &resume.education {
        updates.push(sidebar_education_update(education));
    }
    if let Some(languages) = &resume.languages {
        updates.push(sidebar_languages_update(languages));
    }
    if let Some(skills) = &resume.skills {
        updates.push(personal_skills_update(skills));
    }

    updates
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Name, title and location for both the classic header and the two-column
/// layout (content header plus sidebar profile). A blank location is treated
/// like a missing one here and in the sidebar contact block.
pub fn header_updates(resume: &Resume) -> Vec<RegionUpdate> {
    let mut updates = vec![
        RegionUpdate::text(Region::HeaderName, &resume.name),
        RegionUpdate::text(Region::HeaderTitle, &resume.title),
        RegionUpdate::text(Region::ContentName, &resume.name),
        RegionUpdate::text(Region::ContentTitle, &resume.title),
        RegionUpdate::text(Region::ProfileName, &resume.name),
        RegionUpdate::text(Region::ProfileTitle, &resume.title),
    ];
    if let Some(location) = non_empty(resume.location.as_deref()) {
        updates.push(RegionUpdate::text(Region::HeaderLocation, location));
    }
    updates
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// LinkedIn display text: no scheme, no `www.`.
pub fn linkedin_display(url: &str) -> &str {
    let rest = strip_scheme(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

pub fn portfolio_display(url: &str) -> &str {
    strip_scheme(url)
}

pub fn contact_update(contact: &Contact) -> RegionUpdate {
    RegionUpdate::content(
        Region::Contact,
        json!({
            "email": contact.email,
            "phone": contact.phone,
            "linkedin": contact.linkedin,
            "linkedin_display": linkedin_display(&contact.linkedin),
            "portfolio": contact.portfolio,
            "portfolio_display": portfolio_display(&contact.portfolio),
        }),
    )
}

/// Sidebar contact block: icons instead of labels, plus the person's
/// location when the résumé has one.
pub fn sidebar_contact_update(contact: &Contact, location: Option<&str>) -> RegionUpdate {
    let mut view = Map::new();
    view.insert("email".into(), json!(contact.email));
    view.insert("phone".into(), json!(contact.phone));
    view.insert("linkedin".into(), json!(contact.linkedin));
    view.insert("portfolio".into(), json!(contact.portfolio));
    if let Some(location) = non_empty(location) {
        view.insert("location".into(), json!(location));
    }
    RegionUpdate::content(Region::SidebarContact, Value::Object(view))
}

fn job_entry(job: &Job) -> Value {
    json!({
        "role": job.role,
        "company": job.company,
        "location": job.location,
        "dates": job.dates,
        "responsibilities": job.responsibilities,
        "achievements": job.achievements,
    })
}

/// The section heading stays in the template; only the entries change.
pub fn experience_update(jobs: &[Job]) -> RegionUpdate {
    let jobs: Vec<Value> = jobs.iter().map(job_entry).collect();
    RegionUpdate::content(Region::Experience, json!({ "jobs": jobs }))
}

fn education_entry(edu: &Education) -> Value {
    json!({
        "degree": edu.degree,
        "specialization": edu.specialization(),
        "institution": edu.institution,
        "location": edu.location,
        "year_completed": edu.year_completed.to_string(),
    })
}

fn education_items(education: &[Education]) -> Value {
    let items: Vec<Value> = education.iter().map(education_entry).collect();
    json!({ "items": items })
}

pub fn education_update(education: &[Education]) -> RegionUpdate {
    RegionUpdate::content(Region::Education, education_items(education))
}

fn certification_entry(cert: &Certification) -> Value {
    json!({
        "name": cert.name,
        "year_completed": cert.year_completed.to_string(),
    })
}

pub fn certifications_update(certifications: &[Certification]) -> RegionUpdate {
    let items: Vec<Value> = certifications.iter().map(certification_entry).collect();
    RegionUpdate::content(Region::Certifications, json!({ "items": items }))
}

fn project_entry(project: &Project) -> Value {
    json!({
        "name": project.name,
        "description": project.description,
        "tech_stack": project.tech_stack,
    })
}

pub fn projects_update(projects: &[Project]) -> RegionUpdate {
    let items: Vec<Value> = projects.iter().map(project_entry).collect();
    RegionUpdate::content(Region::Projects, json!({ "items": items }))
}

pub fn languages_update(languages: &[String]) -> RegionUpdate {
    RegionUpdate::content(Region::Languages, json!({ "items": languages }))
}

pub fn sidebar_education_update(education: &[Education]) -> RegionUpdate {
    RegionUpdate::content(Region::SidebarEducation, education_items(education))
}

pub fn sidebar_languages_update(languages: &[String]) -> RegionUpdate {
    RegionUpdate::content(Region::SidebarLanguages, json!({ "items": languages }))
}
