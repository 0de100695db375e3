//! Sequential screenshot capture over a batch of demos.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use showcase_static::{DemoRecord, Preview};

use crate::traits::{CaptureError, PageRenderer};

/// Configuration for headless capture.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Viewport width in CSS pixels
    pub viewport_width: u32,

    /// Viewport height in CSS pixels
    pub viewport_height: u32,

    /// Upper bound for a single page navigation
    pub navigation_timeout: Duration,

    /// Pause after load before the screenshot is taken
    pub settle_delay: Duration,

    /// Browser binary to use instead of auto-detection
    pub chrome_executable: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            navigation_timeout: Duration::from_secs(30),
            settle_delay: Duration::from_millis(1000),
            chrome_executable: None,
        }
    }
}

/// Where screenshots go on disk and how pages refer to them.
#[derive(Debug, Clone)]
pub struct ScreenshotLayout {
    /// Screenshots root on disk
    pub dir: PathBuf,

    /// `src` prefix used by the preview page, e.g. `./screenshots`
    pub href_prefix: String,
}

impl ScreenshotLayout {
    pub fn new(dir: impl Into<PathBuf>, href_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            href_prefix: href_prefix.into(),
        }
    }

    /// `<dir>/<folder>/<stem>.png`
    pub fn target_for(&self, record: &DemoRecord) -> PathBuf {
        self.dir
            .join(&record.folder)
            .join(format!("{}.png", record.stem()))
    }

    /// `<prefix>/<folder>/<stem>.png` with folder and file name percent-encoded
    pub fn src_for(&self, record: &DemoRecord) -> String {
        let file = format!("{}.png", record.stem());
        format!(
            "{}/{}/{}",
            self.href_prefix.trim_end_matches('/'),
            urlencoding::encode(&record.folder),
            urlencoding::encode(&file)
        )
    }
}

/// Capture every record with `renderer`, one at a time.
///
/// A failed capture is logged and leaves that record without a screenshot; the
/// rest of the batch still runs. The renderer is closed exactly once, after the
/// batch, whatever the batch outcome.
pub async fn capture_all<R: PageRenderer>(
    mut renderer: R,
    records: Vec<DemoRecord>,
    layout: &ScreenshotLayout,
) -> Result<Vec<Preview>, CaptureError> {
    let result = capture_each(&mut renderer, records, layout).await;

    if let Err(e) = renderer.close().await {
        tracing::warn!("Failed to shut down renderer: {}", e);
    }

    result
}

async fn capture_each<R: PageRenderer>(
    renderer: &mut R,
    records: Vec<DemoRecord>,
    layout: &ScreenshotLayout,
) -> Result<Vec<Preview>, CaptureError> {
    fs::create_dir_all(&layout.dir)?;

    let total = records.len();
    tracing::info!("Starting capture of {} demos...", total);

    let mut previews = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        tracing::info!("[{}/{}] Capturing {}...", index + 1, total, record.relative_path);

        match capture_one(renderer, &record, layout).await {
            Ok(()) => {
                let src = layout.src_for(&record);
                previews.push(Preview::captured(record, src));
            }
            Err(e) => {
                tracing::error!("Failed to capture {}: {}", record.relative_path, e);
                previews.push(Preview::missing(record));
            }
        }
    }

    Ok(previews)
}

async fn capture_one<R: PageRenderer>(
    renderer: &mut R,
    record: &DemoRecord,
    layout: &ScreenshotLayout,
) -> Result<(), CaptureError> {
    let target = layout.target_for(record);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    renderer.capture(&record.source_path, &target).await
}
