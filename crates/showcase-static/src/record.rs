//! Per-file demo metadata.

use std::path::PathBuf;

/// Extension a file must carry to be picked up as a demo.
pub const DEMO_EXTENSION: &str = "html";

/// A single demo page found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRecord {
    /// File name including extension (e.g. `y-two.html`)
    pub name: String,

    /// Link target relative to the root (`<folder>/<name>`)
    pub relative_path: String,

    /// Owning directory, used as the grouping key
    pub folder: String,

    /// Presentational title derived from the file name
    pub display_title: String,

    /// Location on disk
    pub source_path: PathBuf,
}

impl DemoRecord {
    /// Build a record for `name` inside `folder`, located at `source_path`.
    pub fn new(folder: &str, name: &str, source_path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            relative_path: format!("{}/{}", folder, name),
            folder: folder.to_string(),
            display_title: display_title(name),
            source_path,
        }
    }

    /// File name without the `.html` extension.
    pub fn stem(&self) -> &str {
        strip_extension(&self.name)
    }
}

/// A demo record annotated with the outcome of screenshot capture.
///
/// `screenshot` is only ever set by the capture step. `None` means the capture
/// failed and the card must fall back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub record: DemoRecord,
    pub screenshot: Option<String>,
}

impl Preview {
    pub fn captured(record: DemoRecord, screenshot: String) -> Self {
        Self {
            record,
            screenshot: Some(screenshot),
        }
    }

    pub fn missing(record: DemoRecord) -> Self {
        Self {
            record,
            screenshot: None,
        }
    }
}

/// Derive the display title: drop the extension, then turn `-` and `_` into spaces.
pub fn display_title(name: &str) -> String {
    strip_extension(name).replace(['-', '_'], " ")
}

fn strip_extension(name: &str) -> &str {
    name.strip_suffix(".html").unwrap_or(name)
}
