//! Trait definitions for page renderers.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors that can occur while capturing a page.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("Navigation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Cannot build a file URL for {0}")]
    InvalidPath(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can rasterize a local HTML file to a PNG.
///
/// One renderer is used for a whole batch and closed once afterwards.
#[allow(async_fn_in_trait)]
pub trait PageRenderer {
    /// Render the page at `source` and write a PNG screenshot to `target`.
    async fn capture(&mut self, source: &Path, target: &Path) -> Result<(), CaptureError>;

    /// Release the renderer and anything it spawned.
    async fn close(self) -> Result<(), CaptureError>
    where
        Self: Sized;
}
