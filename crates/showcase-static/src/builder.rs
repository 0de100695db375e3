//! Index and preview page builder.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use crate::assets::{AssetPipeline, Page};
use crate::discovery::{discover, Discovery};
use crate::group::{group_by_folder, Group};
use crate::record::{DemoRecord, Preview};
use crate::templates::{Card, Context, Section, TemplateEngine};

/// Demo folders scanned when nothing else is configured.
pub const DEFAULT_SOURCE_DIRS: [&str; 4] =
    ["brutalism", "landing-pages", "zero-gravity", "zero-gravity-v2"];

/// Configuration for building the demo pages.
///
/// Output paths are relative to `root`.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root containing the demo folders
    pub root: PathBuf,

    /// Demo folders to scan, in display order
    pub source_dirs: Vec<String>,

    /// List view output file
    pub index_output: PathBuf,

    /// Grid preview output file
    pub preview_output: PathBuf,

    /// Directory screenshots are written to
    pub screenshots_dir: PathBuf,

    /// Heading shown on both pages
    pub title: String,

    /// Minify the embedded stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dirs: DEFAULT_SOURCE_DIRS.iter().map(|d| d.to_string()).collect(),
            index_output: PathBuf::from("index.html"),
            preview_output: PathBuf::from("index-preview.html"),
            screenshots_dir: PathBuf::from("screenshots"),
            title: "Design Concepts".to_string(),
            minify: true,
        }
    }
}

impl BuildConfig {
    /// Absolute-or-root-joined location of the index page.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_output)
    }

    /// Absolute-or-root-joined location of the preview page.
    pub fn preview_path(&self) -> PathBuf {
        self.root.join(&self.preview_output)
    }

    /// Location screenshots are written to on disk.
    pub fn screenshots_path(&self) -> PathBuf {
        self.root.join(&self.screenshots_dir)
    }

    /// Prefix for screenshot `src` attributes, e.g. `./screenshots`.
    pub fn screenshots_href(&self) -> String {
        format!("./{}", url_path(&self.screenshots_dir))
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of demo records rendered
    pub records: usize,

    /// Number of folder sections rendered
    pub sections: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// File that was written
    pub output: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Static page builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Scan the configured folders.
    pub fn discover(&self) -> Discovery {
        discover(&self.config.root, &self.config.source_dirs)
    }

    /// Discover demos and write the index page.
    pub fn build_index(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let discovery = self.discover();
        let html = self.render_index(&discovery)?;
        let output = self.config.index_path();
        write_output(&output, &html)?;

        Ok(BuildResult {
            records: discovery.len(),
            sections: discovery.folders.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output,
        })
    }

    /// Write the preview page for already captured demos.
    pub fn build_preview(
        &self,
        folders: &[String],
        previews: &[Preview],
    ) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let html = self.render_preview(folders, previews)?;
        let output = self.config.preview_path();
        write_output(&output, &html)?;

        Ok(BuildResult {
            records: previews.len(),
            sections: group_by_folder(folders, previews).len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output,
        })
    }

    /// Render the index page. Performs no I/O.
    pub fn render_index(&self, discovery: &Discovery) -> Result<String, BuildError> {
        let groups = group_by_folder(&discovery.folders, &discovery.records);
        let sections = build_sections(&groups, |record: &DemoRecord| Card {
            title: record.display_title.clone(),
            path: record.relative_path.clone(),
            screenshot: None,
        });

        self.render("index.html", Page::Index, sections)
    }

    /// Render the preview page. Performs no I/O.
    pub fn render_preview(&self, folders: &[String], previews: &[Preview]) -> Result<String, BuildError> {
        let groups = group_by_folder(folders, previews);
        let sections = build_sections(&groups, |preview: &Preview| Card {
            title: preview.record.display_title.clone(),
            path: preview.record.relative_path.clone(),
            screenshot: preview.screenshot.clone(),
        });

        self.render("preview.html", Page::Preview, sections)
    }

    fn render(&self, template: &str, page: Page, sections: Vec<Section>) -> Result<String, BuildError> {
        let context = Context {
            site_title: self.config.title.clone(),
            stylesheet: AssetPipeline::stylesheet(page, self.config.minify),
            sections,
            index_href: url_path(&self.config.index_output),
            preview_href: url_path(&self.config.preview_output),
        };

        self.templates
            .render_page(template, &context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))
    }
}

fn build_sections<T>(groups: &[Group<'_, T>], to_card: impl Fn(&T) -> Card) -> Vec<Section> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| Section {
            title: group.folder.to_string(),
            delay: format!("{:.1}", index as f64 * 0.1),
            cards: group.items.iter().map(|item| to_card(item)).collect(),
        })
        .collect()
}

/// Join the normal components of a relative path with `/`.
fn url_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Overwrite `path` with `content`, creating parent directories as needed.
fn write_output(path: &Path, content: &str) -> Result<(), BuildError> {
    let write_error = |e: std::io::Error| BuildError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config(root: &Path, dirs: &[&str]) -> BuildConfig {
        BuildConfig {
            root: root.to_path_buf(),
            source_dirs: dirs.iter().map(|d| d.to_string()).collect(),
            minify: false,
            ..Default::default()
        }
    }

    /// Card count per section title, in page order.
    fn cards_per_section(html: &str) -> Vec<(String, usize)> {
        html.split("<section ")
            .skip(1)
            .map(|chunk| {
                let title = chunk
                    .split(r#"<div class="section-title">"#)
                    .nth(1)
                    .and_then(|rest| rest.split("</div>").next())
                    .unwrap_or_default()
                    .to_string();
                (title, chunk.matches(r#"class="card""#).count())
            })
            .collect()
    }

    #[test]
    fn builds_index_for_existing_and_empty_folders() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        fs::write(temp.path().join("a/x.html"), "<p>x</p>").unwrap();
        fs::write(temp.path().join("a/y-two.html"), "<p>y</p>").unwrap();

        let builder = StaticBuilder::new(config(temp.path(), &["a", "b"]));
        let result = builder.build_index().unwrap();

        assert_eq!(result.records, 2);
        assert_eq!(result.sections, 2);

        let html = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert_eq!(
            cards_per_section(&html),
            vec![("a".to_string(), 2), ("b".to_string(), 0)]
        );
        assert!(html.contains(r#"<a href="a/x.html" class="card">"#));
        assert!(html.contains(r#"<a href="a/y-two.html" class="card">"#));
        assert!(html.contains(r#"<div class="card-title">x</div>"#));
        assert!(html.contains(r#"<div class="card-title">y two</div>"#));
    }

    #[test]
    fn missing_folder_has_no_section() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("a/x.html"), "").unwrap();

        let builder = StaticBuilder::new(config(temp.path(), &["a", "c"]));
        let discovery = builder.discover();
        assert_eq!(discovery.missing, vec!["c".to_string()]);

        let index = builder.render_index(&discovery).unwrap();
        let previews: Vec<Preview> = discovery.records.iter().cloned().map(Preview::missing).collect();
        let preview = builder.render_preview(&discovery.folders, &previews).unwrap();

        for html in [index, preview] {
            let sections = cards_per_section(&html);
            assert_eq!(sections.len(), 1);
            assert_eq!(sections[0].0, "a");
        }
    }

    #[test]
    fn index_overwrites_previous_output() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "stale content").unwrap();

        let builder = StaticBuilder::new(config(temp.path(), &["nothing"]));
        let result = builder.build_index().unwrap();

        assert_eq!(result.records, 0);
        let html = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(!html.contains("stale content"));
        assert!(html.contains("<main>"));
    }

    #[test]
    fn preview_page_marks_missing_screenshots() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(config(temp.path(), &["a"]));
        let folders = vec!["a".to_string()];
        let previews = vec![
            Preview::missing(DemoRecord::new("a", "x.html", temp.path().join("a/x.html"))),
            Preview::captured(
                DemoRecord::new("a", "y-two.html", temp.path().join("a/y-two.html")),
                "./screenshots/a/y-two.png".to_string(),
            ),
        ];

        let result = builder.build_preview(&folders, &previews).unwrap();

        assert_eq!(result.records, 2);
        let html = fs::read_to_string(temp.path().join("index-preview.html")).unwrap();
        assert_eq!(html.matches("No Preview Available").count(), 1);
        assert!(html.contains(r#"src="./screenshots/a/y-two.png""#));
        assert!(html.contains(r#"href="index-preview.html" class="view-btn active""#));
    }

    #[test]
    fn sections_have_staggered_delays() {
        let temp = tempdir().unwrap();
        for dir in ["a", "b", "c"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }

        let builder = StaticBuilder::new(config(temp.path(), &["a", "b", "c"]));
        let html = builder.render_index(&builder.discover()).unwrap();

        assert!(html.contains("animation-delay: 0.0s"));
        assert!(html.contains("animation-delay: 0.1s"));
        assert!(html.contains("animation-delay: 0.2s"));
    }

    #[test]
    fn minified_stylesheet_is_embedded() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(BuildConfig {
            root: temp.path().to_path_buf(),
            ..Default::default()
        });

        let html = builder.render_index(&Discovery::default()).unwrap();

        assert!(html.contains("<style>:root{"));
    }

    #[test]
    fn screenshot_href_uses_forward_slashes() {
        let config = BuildConfig {
            screenshots_dir: PathBuf::from("out").join("shots"),
            ..Default::default()
        };

        assert_eq!(config.screenshots_href(), "./out/shots");
        assert_eq!(BuildConfig::default().screenshots_href(), "./screenshots");
    }
}
