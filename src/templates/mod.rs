//! Built-in espresso theme templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping stays
//! on; only fields backed by pre-rendered trusted markup pass `| safe`.

use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded espresso theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all espresso templates loaded
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("espresso/layout.html")),
            ("listing.html", include_str!("espresso/listing.html")),
            ("post.html", include_str!("espresso/post.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("espresso/partials/header.html"),
            ),
            (
                "partials/nav.html",
                include_str!("espresso/partials/nav.html"),
            ),
            (
                "partials/sidebar.html",
                include_str!("espresso/partials/sidebar.html"),
            ),
            (
                "partials/footer.html",
                include_str!("espresso/partials/footer.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(template_name, context)
    }
}

/// View data structures for template contexts

/// One entry of the index listing
#[derive(Debug, Clone, Serialize)]
pub struct PostItem {
    pub title: String,
    pub url: String,
    pub date: Option<String>,
    /// Trusted markup: front-matter description or the rendered excerpt
    pub summary: String,
}

/// The single-document view
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub date: Option<String>,
    /// Trusted markup: the rendered document body
    pub body: String,
    pub is_post: bool,
}

/// A previous/next link with its resolved URL
#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_plain_fields_are_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert(
            "posts",
            &vec![PostItem {
                title: "<script>alert(1)</script>".to_string(),
                url: "/x/".to_string(),
                date: None,
                summary: "<em>kept</em>".to_string(),
            }],
        );

        let html = renderer.render("listing.html", &context).unwrap();
        assert!(!html.contains("<script>"));
        // Trusted summary markup passes through
        assert!(html.contains("<em>kept</em>"));
    }
}
