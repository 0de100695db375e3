//! Headless browser screenshot capture for showcase demos.
//!
//! A single browser session is launched for a batch, every demo is rendered in
//! sequence, and the session is closed once the batch is done. Failed captures
//! fall back to a placeholder on the preview page.

pub mod capture;
pub mod chrome;
pub mod traits;

pub use capture::{capture_all, CaptureConfig, ScreenshotLayout};
pub use chrome::ChromeSession;
pub use traits::{CaptureError, PageRenderer};
