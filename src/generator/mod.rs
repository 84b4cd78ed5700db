//! Generator module - renders every route of the site into the public directory

use anyhow::Result;
use chrono::{Datelike, Local};
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::content::{ContentStore, DocType, Document};
use crate::layout::{ChromeConfig, LayoutComposer, PageContext, RenderError, SiteMetadata};
use crate::navigation::{self, NavEntry};
use crate::query::{self, Direction, SortKey};
use crate::render::{DocumentRenderer, ListingRenderer};
use crate::templates::TemplateRenderer;
use crate::Espresso;

/// Static site generator
pub struct Generator {
    app: Espresso,
    templates: TemplateRenderer,
}

/// Per-build render inputs, computed once and shared by every route
struct RenderSet<'a> {
    site: SiteMetadata,
    nav: Vec<NavEntry>,
    chrome: ChromeConfig,
    posts: Vec<&'a Document>,
}

impl Generator {
    pub fn new(app: &Espresso) -> Result<Self> {
        Ok(Self {
            app: app.clone(),
            templates: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site from a populated store.
    ///
    /// A route that fails to render is logged and skipped; the remaining
    /// routes still generate, and the build fails at the end with the
    /// failure count.
    pub fn generate(&self, store: &ContentStore) -> Result<()> {
        fs::create_dir_all(&self.app.public_dir)?;

        self.copy_source_assets()?;

        let set = self.render_set(store);
        let composer = LayoutComposer::new(&self.templates);

        // Index route
        let listing = ListingRenderer::new(&self.templates, &composer, &self.app.config);
        let ctx = PageContext {
            site: set.site.clone(),
            title: "All posts".to_string(),
            nav: set.nav.clone(),
        };
        let html = listing.render(&ctx, set.chrome, &set.posts)?;
        self.write_route("index.html", &html)?;

        // One route per document
        let mut failed = 0usize;
        for doc in store.all() {
            match self.render_document(store, &set, &composer, &doc.slug) {
                Ok(html) => {
                    let target = format!("{}/index.html", doc.slug);
                    self.write_route(&target, &html)?;
                }
                Err(e) => {
                    tracing::error!("Failed to render /{}/: {}", doc.slug, e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{} route(s) failed to render", failed);
        }

        tracing::info!("Generated {} routes", store.len() + 1);
        Ok(())
    }

    /// Render the route for a single slug. Unknown slugs are a per-route
    /// failure, not a build abort.
    pub fn render_route(&self, store: &ContentStore, slug: &str) -> Result<String, RenderError> {
        let set = self.render_set(store);
        let composer = LayoutComposer::new(&self.templates);
        self.render_document(store, &set, &composer, slug)
    }

    fn render_document(
        &self,
        store: &ContentStore,
        set: &RenderSet<'_>,
        composer: &LayoutComposer<'_>,
        slug: &str,
    ) -> Result<String, RenderError> {
        let doc = store
            .get(slug)
            .ok_or_else(|| RenderError::UnknownSlug(slug.to_string()))?;

        // Adjacency is defined over the date-descending post sequence;
        // pages get none
        let links = match doc.doc_type {
            DocType::Post => navigation::adjacent_links(&set.posts, &doc.id),
            DocType::Page => Default::default(),
        };

        let ctx = PageContext {
            site: set.site.clone(),
            title: doc.title_or_slug().to_string(),
            nav: set.nav.clone(),
        };

        let renderer = DocumentRenderer::new(&self.templates, composer, &self.app.config);
        renderer.render(&ctx, set.chrome, doc, &links)
    }

    fn render_set<'a>(&self, store: &'a ContentStore) -> RenderSet<'a> {
        let config = &self.app.config;
        let posts = query::sort_by(
            query::filter_by_type(store, DocType::Post),
            SortKey::Date,
            Direction::Descending,
        );

        RenderSet {
            site: SiteMetadata {
                title: config.title.clone(),
                description: config.description.clone(),
                author: config.author.clone(),
                language: config.language.clone(),
                root: config.root.clone(),
                year: Local::now().year(),
            },
            nav: navigation::page_nav(store),
            chrome: config.chrome,
            posts,
        }
    }

    fn write_route(&self, relative: &str, html: &str) -> Result<()> {
        let output_path = self.app.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy non-markdown source files (images, etc.) through to the public
    /// directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.app.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_markdown_file(path) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let hidden = relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('_'))
                    .unwrap_or(false)
            });
            if hidden {
                continue;
            }

            let dest = self.app.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}

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
    use crate::content::loader::ContentLoader;

    fn site_with(files: &[(&str, &str)]) -> (tempfile::TempDir, Espresso) {
        let tmp = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = tmp.path().join("content").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        let app = Espresso {
            config: SiteConfig::default(),
            base_dir: tmp.path().to_path_buf(),
            source_dir: tmp.path().join("content"),
            public_dir: tmp.path().join("public"),
        };
        (tmp, app)
    }

    #[test]
    fn test_generate_full_site() {
        let (tmp, app) = site_with(&[
            (
                "first-post.md",
                "---\ntitle: First Post\ndate: 2024-01-01\ntype: post\n---\n\nOlder body.\n",
            ),
            (
                "second-post.md",
                "---\ntitle: Second Post\ndate: 2024-02-01\ntype: post\n---\n\nNewer body.\n",
            ),
            (
                "about.md",
                "---\ntitle: About\ntype: page\norder: 1\n---\n\nAbout body.\n",
            ),
        ]);

        let store = ContentLoader::new(&app).load().unwrap();
        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();

        let index = fs::read_to_string(tmp.path().join("public/index.html")).unwrap();
        // Newest first
        let newer_at = index.find("Second Post").unwrap();
        let older_at = index.find("First Post").unwrap();
        assert!(newer_at < older_at);
        // The About page is in the navigation, not the listing
        assert!(index.contains(r#"<a href="/about/">About</a>"#));
        assert_eq!(index.matches("<article").count(), 2);

        // Every document got a route
        assert!(tmp.path().join("public/first-post/index.html").exists());
        assert!(tmp.path().join("public/second-post/index.html").exists());
        assert!(tmp.path().join("public/about/index.html").exists());

        // Adjacent links on the older post point at the newer one
        let first = fs::read_to_string(tmp.path().join("public/first-post/index.html")).unwrap();
        assert!(first.contains(r#"rel="next""#));
        assert!(first.contains("Second Post"));
        assert!(!first.contains(r#"rel="prev""#));

        // Pages carry no previous/next navigation
        let about = fs::read_to_string(tmp.path().join("public/about/index.html")).unwrap();
        assert!(!about.contains("blog-post-nav"));
    }

    #[test]
    fn test_generate_empty_site_renders_notice() {
        let (tmp, app) = site_with(&[]);

        let store = ContentLoader::new(&app).load().unwrap();
        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();

        let index = fs::read_to_string(tmp.path().join("public/index.html")).unwrap();
        assert!(index.contains("no-posts"));
        assert!(!index.contains("<article"));
    }

    #[test]
    fn test_render_route_unknown_slug() {
        let (_tmp, app) = site_with(&[]);

        let store = ContentLoader::new(&app).load().unwrap();
        let generator = Generator::new(&app).unwrap();

        let err = generator.render_route(&store, "missing").unwrap_err();
        assert!(matches!(err, RenderError::UnknownSlug(slug) if slug == "missing"));
    }

    #[test]
    fn test_assets_are_copied() {
        let (tmp, app) = site_with(&[(
            "post.md",
            "---\ntitle: P\ndate: 2024-01-01\ntype: post\n---\n\nBody.\n",
        )]);
        fs::create_dir_all(tmp.path().join("content/images")).unwrap();
        fs::write(tmp.path().join("content/images/logo.png"), b"png").unwrap();

        let store = ContentLoader::new(&app).load().unwrap();
        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();

        assert!(tmp.path().join("public/images/logo.png").exists());
    }
}
