//! List-view index generation command.

use anyhow::{Context, Result};
use showcase_static::{BuildConfig, StaticBuilder};

/// Run the index command.
pub fn run(config: BuildConfig, open: bool) -> Result<()> {
    let result = StaticBuilder::new(config)
        .build_index()
        .context("Failed to generate index")?;

    tracing::info!(
        "Generated {} with {} files in {}ms",
        result.output.display(),
        result.records,
        result.duration_ms
    );

    if open {
        let _ = open::that(&result.output);
    }

    Ok(())
}
