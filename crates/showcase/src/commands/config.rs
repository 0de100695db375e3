//! Loading showcase.toml.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use showcase_capture::CaptureConfig;
use showcase_static::{BuildConfig, DEFAULT_SOURCE_DIRS};

/// Configuration file structure (showcase.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    build: BuildSettings,
    #[serde(default)]
    capture: CaptureSettings,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_dirs")]
    dirs: Vec<String>,
    #[serde(default = "default_index")]
    index: String,
    #[serde(default = "default_preview")]
    preview: String,
    #[serde(default = "default_screenshots")]
    screenshots: String,
    #[serde(default = "default_title")]
    title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dirs: default_dirs(),
            index: default_index(),
            preview: default_preview(),
            screenshots: default_screenshots(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_minify")]
    minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CaptureSettings {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default = "default_settle_ms")]
    settle_ms: u64,
    chrome: Option<String>,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            timeout_secs: default_timeout_secs(),
            settle_ms: default_settle_ms(),
            chrome: None,
        }
    }
}

fn default_dirs() -> Vec<String> {
    DEFAULT_SOURCE_DIRS.iter().map(|d| d.to_string()).collect()
}
fn default_index() -> String {
    "index.html".to_string()
}
fn default_preview() -> String {
    "index-preview.html".to_string()
}
fn default_screenshots() -> String {
    "screenshots".to_string()
}
fn default_title() -> String {
    "Design Concepts".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    800
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_settle_ms() -> u64 {
    1000
}

/// Resolved configuration passed to the pipelines.
#[derive(Debug, Clone)]
pub struct Settings {
    pub build: BuildConfig,
    pub capture: CaptureConfig,
}

/// Load configuration from `config_path` (relative to `root`) if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(root: &Path, config_path: &Path) -> Result<Settings> {
    let path = root.join(config_path);

    let file = if path.exists() {
        let content = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        config
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        ConfigFile::default()
    };

    Ok(file.into_settings(root))
}

impl ConfigFile {
    fn into_settings(self, root: &Path) -> Settings {
        let build = BuildConfig {
            root: root.to_path_buf(),
            source_dirs: self.site.dirs,
            index_output: PathBuf::from(self.site.index),
            preview_output: PathBuf::from(self.site.preview),
            screenshots_dir: PathBuf::from(self.site.screenshots),
            title: self.site.title,
            minify: self.build.minify,
        };

        let capture = CaptureConfig {
            viewport_width: self.capture.width,
            viewport_height: self.capture.height,
            navigation_timeout: Duration::from_secs(self.capture.timeout_secs),
            settle_delay: Duration::from_millis(self.capture.settle_ms),
            chrome_executable: self.capture.chrome.map(PathBuf::from),
        };

        Settings { build, capture }
    }
}
