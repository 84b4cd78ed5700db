//! espresso: a fast static blog generator with a built-in espresso theme
//!
//! Markdown documents with front-matter go in, composed HTML pages come
//! out. Content is loaded once per build into an immutable [`content::ContentStore`],
//! queried and sorted by the [`query`] engine, threaded through the
//! [`navigation`] builder, and rendered route by route through the
//! [`layout`] composer and the [`render`] page renderers.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod layout;
pub mod navigation;
pub mod query;
pub mod render;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main espresso application
#[derive(Clone)]
pub struct Espresso {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source (content) directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Espresso {
    /// Create a new espresso instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Create a new post or page
    pub fn new_document(&self, title: &str, kind: &str) -> Result<()> {
        commands::new::run(self, title, kind)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
