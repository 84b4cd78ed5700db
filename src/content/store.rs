//! Content store - the immutable, slug-keyed document collection

use indexmap::IndexMap;
use thiserror::Error;

use super::Document;

/// Errors raised while populating the content store. Any of these aborts
/// the build.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("duplicate slug `{slug}`: {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("{path}: missing required front-matter field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: {message}")]
    Frontmatter { path: String, message: String },

    #[error("{path}: unrecognized date `{value}`")]
    InvalidDate { path: String, value: String },

    #[error("{path}: failed to render markdown: {message}")]
    Markdown { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// All loaded documents, keyed by slug. Populated once per build cycle by
/// the loader; read-only afterwards.
#[derive(Debug, Default)]
pub struct ContentStore {
    docs: IndexMap<String, Document>,
}

impl ContentStore {
    /// Build a store from loaded documents, rejecting duplicate slugs.
    pub fn from_documents(docs: Vec<Document>) -> Result<Self, LoadError> {
        let mut map: IndexMap<String, Document> = IndexMap::with_capacity(docs.len());

        for doc in docs {
            if let Some(existing) = map.get(&doc.slug) {
                return Err(LoadError::DuplicateSlug {
                    slug: doc.slug.clone(),
                    first: existing.id.clone(),
                    second: doc.id,
                });
            }
            map.insert(doc.slug.clone(), doc);
        }

        Ok(Self { docs: map })
    }

    /// All documents, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    /// Look up a document by slug.
    pub fn get(&self, slug: &str) -> Option<&Document> {
        self.docs.get(slug)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DocType, TrustedHtml};

    fn doc(id: &str, slug: &str) -> Document {
        Document {
            id: id.to_string(),
            slug: slug.to_string(),
            title: Some(slug.to_string()),
            date: None,
            doc_type: DocType::Post,
            order: None,
            description: None,
            excerpt: TrustedHtml::default(),
            body: TrustedHtml::default(),
        }
    }

    #[test]
    fn test_from_documents_preserves_order() {
        let store =
            ContentStore::from_documents(vec![doc("a.md", "alpha"), doc("b.md", "beta")]).unwrap();
        let slugs: Vec<_> = store.all().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "beta"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let err = ContentStore::from_documents(vec![doc("a.md", "same"), doc("b.md", "same")])
            .unwrap_err();
        match err {
            LoadError::DuplicateSlug { slug, first, second } => {
                assert_eq!(slug, "same");
                assert_eq!(first, "a.md");
                assert_eq!(second, "b.md");
            }
            other => panic!("expected DuplicateSlug, got {:?}", other),
        }
    }

    #[test]
    fn test_get_by_slug() {
        let store = ContentStore::from_documents(vec![doc("a.md", "alpha")]).unwrap();
        assert!(store.get("alpha").is_some());
        assert!(store.get("missing").is_none());
    }
}
