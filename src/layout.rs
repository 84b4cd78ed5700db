//! Layout composer - assembles page chrome around a content slot

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::NavEntry;
use crate::templates::TemplateRenderer;

/// Errors raised while rendering a route. Fatal to that route only.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no document with slug `{0}`")]
    UnknownSlug(String),

    #[error(transparent)]
    Template(#[from] tera::Error),
}

/// Which optional chrome blocks a page carries. Header and footer are
/// unconditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub navigation: bool,
    pub sidebar: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            navigation: true,
            sidebar: false,
        }
    }
}

impl ChromeConfig {
    /// Header and footer only
    pub fn minimal() -> Self {
        Self {
            navigation: false,
            sidebar: false,
        }
    }

    /// Header, top navigation, footer
    pub fn with_navigation() -> Self {
        Self {
            navigation: true,
            sidebar: false,
        }
    }

    /// Header, top navigation, sidebar, footer
    pub fn full() -> Self {
        Self {
            navigation: true,
            sidebar: true,
        }
    }
}

/// Site-wide metadata rendered into the chrome. The copyright year is part
/// of the input so composition stays a pure function.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub root: String,
    pub year: i32,
}

/// The per-render bundle handed to the composer. Constructed fresh per
/// route and never mutated.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site: SiteMetadata,
    pub title: String,
    pub nav: Vec<NavEntry>,
}

/// Assembles the full document around a rendered content slot
pub struct LayoutComposer<'a> {
    templates: &'a TemplateRenderer,
}

impl<'a> LayoutComposer<'a> {
    pub fn new(templates: &'a TemplateRenderer) -> Self {
        Self { templates }
    }

    /// Compose the final page: header, optional navigation, the content
    /// slot, optional sidebar, footer. Pure function of its inputs.
    pub fn compose(
        &self,
        ctx: &PageContext,
        chrome: ChromeConfig,
        content: &str,
    ) -> Result<String, RenderError> {
        let mut context = tera::Context::new();
        context.insert("site", &ctx.site);
        context.insert("page_title", &ctx.title);
        context.insert("nav", &ctx.nav);
        context.insert("chrome", &chrome);
        context.insert("content", content);

        Ok(self.templates.render("layout.html", &context)?)
    }
}
