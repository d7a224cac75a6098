//! The two page flows: load one document, render it, or fail to the static
//! error view.

use tracing::info;

use crate::errors::PageError;
use crate::models::{Resume, ResumeIndex};
use crate::paths::{preview_branch, resolve_identifier};
use crate::render::detail::resume_regions;
use crate::render::listing::{listing_regions, preview_regions};
use crate::render::{apply_all, Page, PageKind};
use crate::source::{load_json, resume_location, DocumentSource, LoadError, INDEX_LOCATION};

/// Landing page for `path`. The preview banner depends only on the path.
pub async fn listing(source: &dyn DocumentSource, path: &str) -> Result<Page, PageError> {
    let branch = preview_branch(path);

    let index: ResumeIndex =
        load_json(source, INDEX_LOCATION)
            .await
            .map_err(|error| PageError::ListingUnavailable {
                error,
                preview_branch: branch.map(str::to_string),
            })?;

    let mut page = Page::new(PageKind::Listing);
    let mut updates = listing_regions(&index);
    if let Some(branch) = branch {
        updates.extend(preview_regions(branch));
    }
    apply_all(&mut page, updates);

    info!(resumes = index.resumes.len(), preview = ?branch, "rendered resume list");
    Ok(page)
}

/// Résumé page for `path`. No load is attempted when the path carries no
/// usable identifier.
pub async fn resume(source: &dyn DocumentSource, path: &str) -> Result<Page, PageError> {
    let id = resolve_identifier(path).ok_or_else(|| {
        PageError::ResumeNotFound(LoadError::MissingIdentifier {
            path: path.to_string(),
        })
    })?;

    let resume: Resume = load_json(source, &resume_location(id))
        .await
        .map_err(PageError::ResumeNotFound)?;

    let mut page = Page::new(PageKind::Resume);
    let applied = apply_all(&mut page, resume_regions(&resume));

    info!(id, regions = applied, "rendered resume");
    Ok(page)
}
