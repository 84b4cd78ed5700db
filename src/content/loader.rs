//! Content loader - builds the content store from the source directory

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::{ContentStore, DocType, Document, FrontMatter, LoadError, MarkdownRenderer};
use crate::helpers::{escape_html, prune_text, strip_html};
use crate::Espresso;

/// Length of the auto-generated plain-text excerpt, in characters
const EXCERPT_LENGTH: usize = 160;

/// Loads documents from the source directory into a content store
pub struct ContentLoader<'a> {
    app: &'a Espresso,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    pub fn new(app: &'a Espresso) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &app.config.highlight.theme,
            app.config.highlight.line_number,
        );
        Self { app, renderer }
    }

    /// Load every markdown file under the source directory.
    ///
    /// Validation is strict: a malformed document fails the whole build
    /// rather than being skipped.
    pub fn load(&self) -> Result<ContentStore, LoadError> {
        let source_dir = &self.app.source_dir;
        if !source_dir.exists() {
            return Ok(ContentStore::default());
        }

        let mut docs = Vec::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            // Skip underscore-prefixed directories (drafts and the like)
            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            let hidden = relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('_'))
                    .unwrap_or(false)
            });
            if hidden {
                continue;
            }

            if path.is_file() && is_markdown_file(path) {
                docs.push(self.load_document(path)?);
            }
        }

        let store = ContentStore::from_documents(docs)?;
        tracing::info!("Loaded {} documents", store.len());
        Ok(store)
    }

    /// Load a single document from a file
    fn load_document(&self, path: &Path) -> Result<Document, LoadError> {
        let content = fs::read_to_string(path)?;

        let id = path
            .strip_prefix(&self.app.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let (fm, body_md) = FrontMatter::parse(&content).map_err(|e| LoadError::Frontmatter {
            path: id.clone(),
            message: e.to_string(),
        })?;

        let doc_type = fm.doc_type.ok_or_else(|| LoadError::MissingField {
            path: id.clone(),
            field: "type",
        })?;

        // Pages carry their navigation position; it has no meaning on posts
        if doc_type == DocType::Page && fm.order.is_none() {
            return Err(LoadError::MissingField {
                path: id.clone(),
                field: "order",
            });
        }
        let order = match doc_type {
            DocType::Page => fm.order,
            DocType::Post => None,
        };

        let date = match &fm.date {
            Some(raw) => Some(fm.parse_date().ok_or_else(|| LoadError::InvalidDate {
                path: id.clone(),
                value: raw.clone(),
            })?),
            None => None,
        };

        let slug = derive_slug(path);

        // Render the body, then the excerpt: an explicit <!-- more --> split
        // when present, otherwise a pruned plain-text cut of the body
        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body_md);
        let body = self
            .renderer
            .render(&full_md)
            .map_err(|e| LoadError::Markdown {
                path: id.clone(),
                message: e.to_string(),
            })?;

        let excerpt = match excerpt_md {
            Some(md) => self.renderer.render(&md).map_err(|e| LoadError::Markdown {
                path: id.clone(),
                message: e.to_string(),
            })?,
            None => escape_html(&prune_text(&strip_html(&body), EXCERPT_LENGTH)),
        };

        Ok(Document {
            id,
            slug,
            title: fm.title,
            date,
            doc_type,
            order,
            description: fm.description,
            excerpt: excerpt.into(),
            body: body.into(),
        })
    }
}

/// Derive the URL slug from a source path: the slugified file stem, or the
/// parent directory name for `index.md` files.
fn derive_slug(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    if stem == "index" {
        if let Some(parent) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
        {
            return slug::slugify(parent);
        }
    }

    slug::slugify(stem)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;

    fn app_for(dir: &Path) -> Espresso {
        Espresso {
            config: SiteConfig::default(),
            base_dir: dir.to_path_buf(),
            source_dir: dir.join("content"),
            public_dir: dir.join("public"),
        }
    }

    fn write_source(dir: &Path, name: &str, content: &str) {
        let path = dir.join("content").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_derive_slug() {
        assert_eq!(derive_slug(&PathBuf::from("blog/Hello World.md")), "hello-world");
        assert_eq!(derive_slug(&PathBuf::from("about/index.md")), "about");
    }

    #[test]
    fn test_load_posts_and_pages() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(
            tmp.path(),
            "first-post.md",
            "---\ntitle: First\ndate: 2024-01-01\ntype: post\n---\n\nHello.\n",
        );
        write_source(
            tmp.path(),
            "about.md",
            "---\ntitle: About\ntype: page\norder: 1\n---\n\nAbout me.\n",
        );

        let app = app_for(tmp.path());
        let store = ContentLoader::new(&app).load().unwrap();

        assert_eq!(store.len(), 2);
        let post = store.get("first-post").unwrap();
        assert_eq!(post.doc_type, DocType::Post);
        assert!(post.date.is_some());
        assert!(post.body.as_str().contains("Hello."));

        let page = store.get("about").unwrap();
        assert_eq!(page.doc_type, DocType::Page);
        assert_eq!(page.order, Some(1));
    }

    #[test]
    fn test_missing_type_fails_the_load() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(tmp.path(), "untyped.md", "---\ntitle: T\n---\n\nBody.\n");

        let app = app_for(tmp.path());
        let err = ContentLoader::new(&app).load().unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field: "type", .. }));
    }

    #[test]
    fn test_page_without_order_fails_the_load() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(
            tmp.path(),
            "about.md",
            "---\ntitle: About\ntype: page\n---\n\nBody.\n",
        );

        let app = app_for(tmp.path());
        let err = ContentLoader::new(&app).load().unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field: "order", .. }));
    }

    #[test]
    fn test_invalid_date_fails_the_load() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(
            tmp.path(),
            "bad-date.md",
            "---\ntitle: T\ndate: someday\ntype: post\n---\n\nBody.\n",
        );

        let app = app_for(tmp.path());
        let err = ContentLoader::new(&app).load().unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { .. }));
    }

    #[test]
    fn test_explicit_excerpt_marker() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(
            tmp.path(),
            "long.md",
            "---\ntitle: Long\ndate: 2024-01-01\ntype: post\n---\n\nIntro paragraph.\n\n<!-- more -->\n\nThe rest.\n",
        );

        let app = app_for(tmp.path());
        let store = ContentLoader::new(&app).load().unwrap();
        let doc = store.get("long").unwrap();
        assert!(doc.excerpt.as_str().contains("Intro paragraph."));
        assert!(!doc.excerpt.as_str().contains("The rest."));
        assert!(doc.body.as_str().contains("The rest."));
    }

    #[test]
    fn test_underscore_directories_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(
            tmp.path(),
            "_drafts/wip.md",
            "---\ntitle: WIP\ntype: post\n---\n\nDraft.\n",
        );

        let app = app_for(tmp.path());
        let store = ContentLoader::new(&app).load().unwrap();
        assert!(store.is_empty());
    }
}
