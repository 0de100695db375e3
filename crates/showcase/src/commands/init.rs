//! Write a starter showcase.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(root: &Path, config_path: &Path, yes: bool) -> Result<()> {
    let path = root.join(config_path);

    if path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            path.display()
        );
        return Ok(());
    }

    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# Showcase Configuration

[site]
# Demo folders to scan, in display order
dirs = ["brutalism", "landing-pages", "zero-gravity", "zero-gravity-v2"]

# Generated pages and screenshot directory, relative to the root
index = "index.html"
preview = "index-preview.html"
screenshots = "screenshots"

# Heading shown on both pages
title = "Design Concepts"

[build]
# Minify the embedded stylesheet
minify = true

[capture]
# Viewport in CSS pixels
width = 1280
height = 800

# Per-page navigation timeout
timeout_secs = 30

# Pause after load so entrance animations settle
settle_ms = 1000

# Browser binary, auto-detected when unset
# chrome = "/usr/bin/chromium"
"#;
