//! Navigation builder - the page link list and previous/next post links

use serde::Serialize;

use crate::content::{ContentStore, DocType, Document};
use crate::query::{self, Direction, SortKey};

/// A page entry in the site navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub slug: String,
    pub title: String,
    pub order: i64,
}

/// A link to a post, used for previous/next navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub slug: String,
    pub title: String,
}

impl PostLink {
    fn from(doc: &Document) -> Self {
        Self {
            slug: doc.slug.clone(),
            title: doc.title_or_slug().to_string(),
        }
    }
}

/// Previous/next links for sequential reading.
///
/// Naming follows reading direction through the date-descending sequence:
/// `previous` is the chronologically older post, `next` the newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentLinks {
    pub previous: Option<PostLink>,
    pub next: Option<PostLink>,
}

/// Build the ordered page navigation: Page documents ascending by `order`.
/// Pages without an order carry no navigation position and are skipped.
pub fn page_nav(store: &ContentStore) -> Vec<NavEntry> {
    let pages = query::filter_by_type(store, DocType::Page);
    let sorted = query::sort_by(pages, SortKey::Order, Direction::Ascending);

    sorted
        .into_iter()
        .filter_map(|doc| {
            doc.order.map(|order| NavEntry {
                slug: doc.slug.clone(),
                title: doc.title_or_slug().to_string(),
                order,
            })
        })
        .collect()
}

/// Compute previous/next links for the document with the given id within a
/// date-descending post sequence. Terminal documents yield `None` on the
/// missing side; an unknown id yields both `None`.
pub fn adjacent_links(posts_by_date_desc: &[&Document], id: &str) -> AdjacentLinks {
    let Some(pos) = posts_by_date_desc.iter().position(|p| p.id == id) else {
        return AdjacentLinks::default();
    };

    AdjacentLinks {
        previous: posts_by_date_desc.get(pos + 1).map(|d| PostLink::from(d)),
        next: pos
            .checked_sub(1)
            .and_then(|i| posts_by_date_desc.get(i))
            .map(|d| PostLink::from(d)),
    }
}
