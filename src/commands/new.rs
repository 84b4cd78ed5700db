//! Create a new post or page

use anyhow::Result;
use std::fs;

use crate::content::loader::ContentLoader;
use crate::content::DocType;
use crate::Espresso;

/// Create a new content document of the given kind
pub fn create_document(app: &Espresso, title: &str, kind: DocType) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    fs::create_dir_all(&app.source_dir)?;
    let file_path = app.source_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = match kind {
        DocType::Post => format!(
            "---\ntitle: {}\ndate: {}\ntype: post\n---\n",
            title,
            now.format("%Y-%m-%d %H:%M:%S")
        ),
        DocType::Page => format!(
            "---\ntitle: {}\ntype: page\norder: {}\n---\n",
            title,
            next_page_order(app)
        ),
    };

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}

/// The next free navigation position: one past the highest existing page
/// order, or 1 for a site without pages (or one that does not load yet).
fn next_page_order(app: &Espresso) -> i64 {
    let Ok(store) = ContentLoader::new(app).load() else {
        return 1;
    };

    store
        .all()
        .filter(|d| d.doc_type == DocType::Page)
        .filter_map(|d| d.order)
        .max()
        .map(|o| o + 1)
        .unwrap_or(1)
}

/// Run the new command
pub fn run(app: &Espresso, title: &str, kind: &str) -> Result<()> {
    let kind = match kind {
        "post" => DocType::Post,
        "page" => DocType::Page,
        other => anyhow::bail!("Unknown kind: {}. Available: post, page", other),
    };
    create_document(app, title, kind)
}
