//! The two page shells, compiled once at startup.
//!
//! Each template reads its regions from the page context by
//! `render::Region::key`. Every `{{value}}` is HTML-escaped by handlebars.

use handlebars::{Handlebars, RenderError, TemplateError};

use crate::render::{Page, PageKind};

const LISTING: &str = include_str!("../../templates/listing.hbs");
const RESUME: &str = include_str!("../../templates/resume.hbs");

pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(PageKind::Listing.template_name(), LISTING)?;
        handlebars.register_template_string(PageKind::Resume.template_name(), RESUME)?;

        Ok(Self { handlebars })
    }

    pub fn render(&self, page: &Page) -> Result<String, RenderError> {
        self.handlebars
            .render(page.kind().template_name(), &page.context())
    }
}
