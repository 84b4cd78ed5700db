//! Page renderers - the index listing and the single-document view

use crate::config::SiteConfig;
use crate::content::{DocType, Document};
use crate::helpers::{format_date, url_for};
use crate::layout::{ChromeConfig, LayoutComposer, PageContext, RenderError};
use crate::navigation::{AdjacentLinks, PostLink};
use crate::templates::{LinkView, PostItem, PostView, TemplateRenderer};

/// Date format on the index listing, e.g. "5 February 2024"
const LISTING_DATE_FORMAT: &str = "D MMMM YYYY";

/// Date format on single-document pages, e.g. "February 05, 2024"
const DOCUMENT_DATE_FORMAT: &str = "MMMM DD, YYYY";

/// The two states of the index listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    /// No matching posts: the listing renders the no-posts notice
    Empty,
    /// One article entry per post
    Populated,
}

impl ListingState {
    pub fn of(posts: &[&Document]) -> Self {
        if posts.is_empty() {
            ListingState::Empty
        } else {
            ListingState::Populated
        }
    }
}

/// Renders the index listing route
pub struct ListingRenderer<'a> {
    templates: &'a TemplateRenderer,
    composer: &'a LayoutComposer<'a>,
    config: &'a SiteConfig,
}

impl<'a> ListingRenderer<'a> {
    pub fn new(
        templates: &'a TemplateRenderer,
        composer: &'a LayoutComposer<'a>,
        config: &'a SiteConfig,
    ) -> Self {
        Self {
            templates,
            composer,
            config,
        }
    }

    /// Render the listing for posts already sorted date-descending
    pub fn render(
        &self,
        ctx: &PageContext,
        chrome: ChromeConfig,
        posts: &[&Document],
    ) -> Result<String, RenderError> {
        let items: Vec<PostItem> = match ListingState::of(posts) {
            ListingState::Empty => Vec::new(),
            ListingState::Populated => posts.iter().map(|p| self.item_of(p)).collect(),
        };

        let mut context = tera::Context::new();
        context.insert("posts", &items);
        let slot = self.templates.render("listing.html", &context)?;

        self.composer.compose(ctx, chrome, &slot)
    }

    fn item_of(&self, doc: &Document) -> PostItem {
        PostItem {
            title: doc.title_or_slug().to_string(),
            url: url_for(self.config, &format!("{}/", doc.slug)),
            date: doc.date.map(|d| format_date(&d, LISTING_DATE_FORMAT)),
            summary: doc
                .description
                .clone()
                .unwrap_or_else(|| doc.excerpt.to_string()),
        }
    }
}

/// Renders a single document route (post or page)
pub struct DocumentRenderer<'a> {
    templates: &'a TemplateRenderer,
    composer: &'a LayoutComposer<'a>,
    config: &'a SiteConfig,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(
        templates: &'a TemplateRenderer,
        composer: &'a LayoutComposer<'a>,
        config: &'a SiteConfig,
    ) -> Self {
        Self {
            templates,
            composer,
            config,
        }
    }

    /// Render a resolved document with its precomputed adjacent links.
    /// The previous/next navigation only appears on posts.
    pub fn render(
        &self,
        ctx: &PageContext,
        chrome: ChromeConfig,
        doc: &Document,
        links: &AdjacentLinks,
    ) -> Result<String, RenderError> {
        let view = PostView {
            title: doc.title_or_slug().to_string(),
            date: doc.date.map(|d| format_date(&d, DOCUMENT_DATE_FORMAT)),
            body: doc.body.to_string(),
            is_post: doc.doc_type == DocType::Post,
        };

        let mut context = tera::Context::new();
        context.insert("post", &view);
        context.insert("previous", &links.previous.as_ref().map(|l| self.link_of(l)));
        context.insert("next", &links.next.as_ref().map(|l| self.link_of(l)));
        let slot = self.templates.render("post.html", &context)?;

        self.composer.compose(ctx, chrome, &slot)
    }

    fn link_of(&self, link: &PostLink) -> LinkView {
        LinkView {
            title: link.title.clone(),
            url: url_for(self.config, &format!("{}/", link.slug)),
        }
    }
}
