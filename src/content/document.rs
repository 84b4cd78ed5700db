//! Document model

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The kind of a document, declared in its front-matter `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Standalone page, listed in the site navigation by `order`
    Page,
    /// Blog post, listed on the index by date
    Post,
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocType::Page => write!(f, "page"),
            DocType::Post => write!(f, "post"),
        }
    }
}

/// Pre-rendered HTML that is inserted into pages verbatim.
///
/// Sanitization is the Markdown renderer's job; anything wrapped in this
/// type has already passed through it and is not escaped again. Plain
/// string fields stay behind the template engine's autoescaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for TrustedHtml {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded content document. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Source path relative to the content directory, unique per store
    pub id: String,

    /// URL path segment derived from the source path, unique per store
    pub slug: String,

    /// Title from front-matter; renderers fall back to the slug
    pub title: Option<String>,

    /// Publication date from front-matter
    pub date: Option<DateTime<Local>>,

    /// Declared document kind
    pub doc_type: DocType,

    /// Navigation position; present iff `doc_type` is `Page`
    pub order: Option<i64>,

    /// Summary from front-matter, preferred over the excerpt in listings
    pub description: Option<String>,

    /// Rendered excerpt (explicit `<!-- more -->` split or a pruned body)
    pub excerpt: TrustedHtml,

    /// Rendered body
    pub body: TrustedHtml,
}

impl Document {
    /// Title for display, falling back to the slug when front-matter has none.
    pub fn title_or_slug(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.slug)
    }
}
