//! Static error views shown when a page's document cannot be loaded.

use serde_json::json;

use super::listing::preview_regions;
use super::{apply_all, Page, PageKind, Region, RegionUpdate};

/// Relative link from a résumé page back to the landing page.
const LISTING_HREF: &str = "../../";

pub fn listing_error() -> RegionUpdate {
    RegionUpdate::content(Region::ResumeGrid, json!({ "error": true }))
}

/// Replaces the whole résumé container, so no region content survives.
pub fn resume_not_found() -> RegionUpdate {
    RegionUpdate::content(
        Region::ResumeContainer,
        json!({ "back_href": LISTING_HREF }),
    )
}

/// Landing page in its failed state. The preview banner is independent of
/// data loading and is still shown.
pub fn listing_error_page(preview_branch: Option<&str>) -> Page {
    let mut page = Page::new(PageKind::Listing);
    let mut updates = vec![listing_error()];
    if let Some(branch) = preview_branch {
        updates.extend(preview_regions(branch));
    }
    apply_all(&mut page, updates);
    page
}

pub fn not_found_page() -> Page {
    let mut page = Page::new(PageKind::Resume);
    apply_all(&mut page, [resume_not_found()]);
    page
}
