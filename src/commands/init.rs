//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Espresso;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("content/_drafts"))?;

    let config_content = r#"# Espresso Configuration

# Site
title: Espresso
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: content
public_dir: public

# Layout chrome
chrome:
  navigation: true
  sidebar: false

# Code highlighting
highlight:
  theme: base16-ocean.dark
  line_number: false
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
type: post
description: Your very first post.
---

Welcome to your new blog. This is your very first post; edit or delete it,
then run `espresso generate` to build the site into the public directory.

## Writing

Every Markdown file in the content directory becomes a route. Posts carry
`type: post` and are listed on the index newest-first; pages carry
`type: page` with an `order` and appear in the site navigation.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(target_dir.join("content/hello-world.md"), sample_post)?;

    let about_page = r#"---
title: About
type: page
order: 1
---

A few words about this site and its author.
"#;

    fs::write(target_dir.join("content/about.md"), about_page)?;

    Ok(())
}

/// Run the init command with an existing app instance
pub fn run(app: &Espresso) -> Result<()> {
    init_site(&app.base_dir)
}
