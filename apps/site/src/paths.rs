/// Extracts the résumé identifier from a page path.
///
/// Pages live at `/resumes/{id}/` (or `/resumes/{id}/index.html`), so a
/// trailing empty segment or file name is skipped. Identifiers must be plain
/// slugs since they become document locations.
pub fn resolve_identifier(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.last().copied().unwrap_or_default();

    let candidate = if last.is_empty() || last.contains('.') {
        segments
            .len()
            .checked_sub(2)
            .and_then(|i| segments.get(i))
            .copied()
            .unwrap_or_default()
    } else {
        last
    };

    is_slug(candidate).then_some(candidate)
}

fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Branch name of a preview deployment (`.../preview/{branch}/...`), if any.
pub fn preview_branch(path: &str) -> Option<&str> {
    let start = path.find("/preview/")? + "/preview/".len();
    let branch = path[start..].split('/').next().unwrap_or_default();
    (!branch.is_empty()).then_some(branch)
}
