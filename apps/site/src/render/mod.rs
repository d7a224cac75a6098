//! Data-to-view projection.
//!
//! Renderers are pure: they turn a loaded document into a list of
//! [`RegionUpdate`]s. A [`PageSurface`] then writes those updates into a
//! concrete page. Keeping the two apart lets every renderer be tested against
//! a fresh page without any I/O.

pub mod detail;
pub mod error;
pub mod listing;
pub mod skills;

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

/// A named, independently updatable area of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    DocumentTitle,
    // Listing page
    ResumeGrid,
    PreviewIndicator,
    PreviewBranch,
    // Résumé page
    ResumeContainer,
    HeaderName,
    HeaderTitle,
    HeaderLocation,
    ContentName,
    ContentTitle,
    ProfileName,
    ProfileTitle,
    Contact,
    SidebarContact,
    ProfileSummary,
    Experience,
    Skills,
    Education,
    Certifications,
    Projects,
    Languages,
    SidebarEducation,
    SidebarLanguages,
    PersonalSkills,
}

impl Region {
    /// Name the page templates use for this region's slot.
    pub fn key(self) -> &'static str {
        match self {
            Region::DocumentTitle => "document_title",
            Region::ResumeGrid => "resume_grid",
            Region::PreviewIndicator => "preview_indicator",
            Region::PreviewBranch => "preview_branch",
            Region::ResumeContainer => "resume_container",
            Region::HeaderName => "header_name",
            Region::HeaderTitle => "header_title",
            Region::HeaderLocation => "header_location",
            Region::ContentName => "content_name",
            Region::ContentTitle => "content_title",
            Region::ProfileName => "profile_name",
            Region::ProfileTitle => "profile_title",
            Region::Contact => "contact",
            Region::SidebarContact => "sidebar_contact",
            Region::ProfileSummary => "profile_summary",
            Region::Experience => "experience",
            Region::Skills => "skills",
            Region::Education => "education",
            Region::Certifications => "certifications",
            Region::Projects => "projects",
            Region::Languages => "languages",
            Region::SidebarEducation => "sidebar_education",
            Region::SidebarLanguages => "sidebar_languages",
            Region::PersonalSkills => "personal_skills",
        }
    }

    fn on_listing(self) -> bool {
        matches!(
            self,
            Region::ResumeGrid | Region::PreviewIndicator | Region::PreviewBranch
        )
    }

    /// Résumé regions that live inside the main container and disappear
    /// with it when the error view replaces it.
    fn in_resume_container(self) -> bool {
        !self.on_listing() && !matches!(self, Region::DocumentTitle | Region::ResumeContainer)
    }
}

/// How a region's content changes. Every patch is a full overwrite, so
/// applying the same region twice leaves only the last write.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Replace all content with plain text.
    Text(String),
    /// Replace all content with the structured view the template expands.
    Content(Value),
    /// Make a hidden element visible.
    Show,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionUpdate {
    pub region: Region,
    pub patch: Patch,
}

impl RegionUpdate {
    pub fn text(region: Region, text: impl Into<String>) -> Self {
        Self {
            region,
            patch: Patch::Text(text.into()),
        }
    }

    pub fn content(region: Region, content: Value) -> Self {
        Self {
            region,
            patch: Patch::Content(content),
        }
    }

    pub fn show(region: Region) -> Self {
        Self {
            region,
            patch: Patch::Show,
        }
    }
}

/// Anything region updates can be written into.
pub trait PageSurface {
    /// Applies one update. Returns `false` when the region is not present on
    /// this page, in which case nothing changes.
    fn apply(&mut self, update: RegionUpdate) -> bool;
}

/// Applies updates in order and returns how many found their region.
pub fn apply_all<S, I>(surface: &mut S, updates: I) -> usize
where
    S: PageSurface + ?Sized,
    I: IntoIterator<Item = RegionUpdate>,
{
    let mut applied = 0;
    for update in updates {
        let region = update.region;
        if surface.apply(update) {
            applied += 1;
        } else {
            debug!(?region, "region not present on page, skipping");
        }
    }
    applied
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Listing,
    Resume,
}

impl PageKind {
    pub fn template_name(self) -> &'static str {
        match self {
            PageKind::Listing => "listing",
            PageKind::Resume => "resume",
        }
    }

    fn declares(self, region: Region) -> bool {
        match self {
            PageKind::Listing => region.on_listing(),
            PageKind::Resume => !region.on_listing(),
        }
    }
}

/// One page being assembled: its template plus whatever each region has
/// been filled with so far. Unfilled regions render as the template ships
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    kind: PageKind,
    slots: BTreeMap<Region, Value>,
}

impl Page {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            slots: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    fn has_region(&self, region: Region) -> bool {
        if !self.kind.declares(region) {
            return false;
        }
        !(region.in_resume_container() && self.slots.contains_key(&Region::ResumeContainer))
    }

    /// Template data: one entry per filled region, keyed by [`Region::key`].
    pub fn context(&self) -> Value {
        let slots: Map<String, Value> = self
            .slots
            .iter()
            .map(|(region, value)| (region.key().to_string(), value.clone()))
            .collect();
        Value::Object(slots)
    }
}

impl PageSurface for Page {
    fn apply(&mut self, update: RegionUpdate) -> bool {
        if !self.has_region(update.region) {
            return false;
        }

        if update.region == Region::ResumeContainer {
            self.slots.retain(|region, _| !region.in_resume_container());
        }

        let value = match update.patch {
            Patch::Text(text) => Value::String(text),
            Patch::Content(content) => content,
            Patch::Show => Value::Bool(true),
        };
        self.slots.insert(update.region, value);
        true
    }
}
