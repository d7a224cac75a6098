//! Technical skills grid and the sidebar's personal skills list.

use serde_json::{json, Value};

use crate::models::resume::Skills;

use super::{Region, RegionUpdate};

/// Display-only proficiency labels. They are not derived from the résumé;
/// tags cycle through them so the grid does not look uniform.
pub const SKILL_LEVELS: [&str; 7] = [
    "Expert",
    "Advanced",
    "Proficient",
    "Intermediate",
    "Advanced",
    "Expert",
    "Proficient",
];

/// Soft skills that always lead the personal skills list.
pub const PERSONAL_SKILLS: [&str; 4] = ["TEAMWORK", "CREATIVE", "INNOVATIVE", "COMMUNICATION"];

pub fn skill_level(category_index: usize, item_index: usize) -> &'static str {
    SKILL_LEVELS[(category_index * 10 + item_index) % SKILL_LEVELS.len()]
}

/// Categories in display order with their headings.
fn categories(skills: &Skills) -> [(&'static str, &[String]); 4] {
    [
        ("Languages & Frameworks", skills.languages_frameworks.as_slice()),
        ("Backend & Databases", skills.backend_databases.as_slice()),
        ("DevOps & Tools", skills.devops_tools.as_slice()),
        ("Approach & Methodology", skills.approach()),
    ]
}

pub fn skills_update(skills: &Skills) -> RegionUpdate {
    let blocks: Vec<Value> = categories(skills)
        .into_iter()
        .enumerate()
        .map(|(category_index, (heading, items))| {
            let tags: Vec<Value> = items
                .iter()
                .enumerate()
                .map(|(i, skill)| json!({ "name": skill, "level": skill_level(category_index, i) }))
                .collect();
            json!({ "heading": heading, "tags": tags })
        })
        .collect();
    RegionUpdate::content(Region::Skills, json!({ "categories": blocks }))
}

pub fn personal_skills_update(skills: &Skills) -> RegionUpdate {
    let labels: Vec<String> = PERSONAL_SKILLS
        .iter()
        .map(|s| s.to_string())
        .chain(skills.approach().iter().map(|s| s.to_uppercase()))
        .collect();
    RegionUpdate::content(Region::PersonalSkills, json!({ "items": labels }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Patch;

    fn skills() -> Skills {
        Skills {
            languages_frameworks: vec!["Rust".into(), "TypeScript".into()],
            backend_databases: vec!["PostgreSQL".into()],
            devops_tools: vec![],
            approach: Some(vec!["Test-driven development".into(), "Agile".into()]),
        }
    }

    fn content(update: RegionUpdate) -> Value {
        match update.patch {
            Patch::Content(value) => value,
            other => panic!("unexpected patch {other:?}"),
        }
    }

    #[test]
    fn test_skill_level_cycles_by_category_and_index() {
        assert_eq!(skill_level(0, 0), "Expert");
        assert_eq!(skill_level(0, 3), "Intermediate");
        // 1 * 10 + 0 = 10, 10 % 7 = 3
        assert_eq!(skill_level(1, 0), "Intermediate");
        // 3 * 10 + 1 = 31, 31 % 7 = 3
        assert_eq!(skill_level(3, 1), "Intermediate");
        // 2 * 10 + 1 = 21, 21 % 7 = 0
        assert_eq!(skill_level(2, 1), "Expert");
    }

    #[test]
    fn test_categories_render_in_fixed_order() {
        let view = content(skills_update(&skills()));
        let headings: Vec<&str> = view["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["heading"].as_str().unwrap())
            .collect();
        assert_eq!(
            headings,
            vec![
                "Languages & Frameworks",
                "Backend & Databases",
                "DevOps & Tools",
                "Approach & Methodology"
            ]
        );
    }

    #[test]
    fn test_one_tag_per_skill_in_order() {
        let view = content(skills_update(&skills()));
        assert_eq!(
            view["categories"][0]["tags"],
            json!([
                {"name": "Rust", "level": "Expert"},
                {"name": "TypeScript", "level": "Advanced"}
            ])
        );
        assert_eq!(
            view["categories"][1]["tags"],
            json!([{"name": "PostgreSQL", "level": "Intermediate"}])
        );
        assert_eq!(view["categories"][2]["tags"], json!([]));
    }

    #[test]
    fn test_personal_skills_lead_with_fixed_labels() {
        let view = content(personal_skills_update(&skills()));
        assert_eq!(
            view["items"],
            json!([
                "TEAMWORK",
                "CREATIVE",
                "INNOVATIVE",
                "COMMUNICATION",
                "TEST-DRIVEN DEVELOPMENT",
                "AGILE"
            ])
        );
    }

    #[test]
    fn test_personal_skills_without_approach() {
        let mut s = skills();
        s.approach = None;
        let view = content(personal_skills_update(&s));
        assert_eq!(view["items"].as_array().unwrap().len(), 4);
    }
}
