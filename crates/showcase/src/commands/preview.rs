//! Screenshot preview generation command.

use anyhow::{Context, Result};
use showcase_capture::{capture_all, CaptureConfig, ChromeSession, ScreenshotLayout};
use showcase_static::{BuildConfig, Discovery, Preview, StaticBuilder};

/// Run the preview command.
///
/// Failures before the page is written are logged and swallowed; a failure to
/// write the page itself is returned.
pub async fn run(build: BuildConfig, capture: CaptureConfig, open: bool) -> Result<()> {
    let builder = StaticBuilder::new(build);
    let discovery = builder.discover();

    let previews = match capture_screenshots(&builder, &discovery, &capture).await {
        Ok(previews) => previews,
        Err(e) => {
            tracing::error!("Error generating preview: {:#}", e);
            return Ok(());
        }
    };

    let captured = previews.iter().filter(|p| p.screenshot.is_some()).count();

    let result = builder
        .build_preview(&discovery.folders, &previews)
        .context("Failed to write preview page")?;

    tracing::info!(
        "Generated {} with {} demos ({} screenshots) in {}ms",
        result.output.display(),
        result.records,
        captured,
        result.duration_ms
    );

    if open {
        let _ = open::that(&result.output);
    }

    Ok(())
}

async fn capture_screenshots(
    builder: &StaticBuilder,
    discovery: &Discovery,
    capture: &CaptureConfig,
) -> Result<Vec<Preview>> {
    let layout = ScreenshotLayout::new(
        builder.config().screenshots_path(),
        builder.config().screenshots_href(),
    );

    let session = ChromeSession::launch(capture)
        .await
        .context("Failed to start headless browser")?;

    let previews = capture_all(session, discovery.records.clone(), &layout)
        .await
        .context("Screenshot capture failed")?;

    Ok(previews)
}
