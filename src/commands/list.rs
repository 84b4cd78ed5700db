//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::DocType;
use crate::query::{self, Direction, SortKey};
use crate::Espresso;

/// List site content by type
pub fn run(app: &Espresso, content_type: &str) -> Result<()> {
    let store = ContentLoader::new(app).load()?;

    match content_type {
        "post" | "posts" => {
            let posts = query::sort_by(
                query::filter_by_type(&store, DocType::Post),
                SortKey::Date,
                Direction::Descending,
            );
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "no date".to_string());
                println!("  {} - {} [{}]", date, post.title_or_slug(), post.id);
            }
        }
        "page" | "pages" => {
            let pages = query::sort_by(
                query::filter_by_type(&store, DocType::Page),
                SortKey::Order,
                Direction::Ascending,
            );
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!(
                    "  {} - {} [{}]",
                    page.order.unwrap_or_default(),
                    page.title_or_slug(),
                    page.id
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, page", content_type);
        }
    }

    Ok(())
}
