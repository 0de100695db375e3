//! Scanning demo directories for HTML pages.

use std::path::Path;

use walkdir::WalkDir;

use crate::record::{DemoRecord, DEMO_EXTENSION};

/// Result of scanning the configured source directories.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Directories that exist, in declared order
    pub folders: Vec<String>,

    /// Every demo found, directory order preserved
    pub records: Vec<DemoRecord>,

    /// Declared directories that were skipped
    pub missing: Vec<String>,
}

impl Discovery {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Scan `dirs` under `root` and collect their `.html` files.
///
/// Missing directories are logged and skipped; nothing here is fatal.
pub fn discover<S: AsRef<str>>(root: &Path, dirs: &[S]) -> Discovery {
    let mut discovery = Discovery::default();

    for dir in dirs {
        let dir = dir.as_ref();
        let full_path = root.join(dir);

        if !full_path.is_dir() {
            tracing::warn!("Directory not found: {}", dir);
            discovery.missing.push(dir.to_string());
            continue;
        }

        let before = discovery.records.len();

        for entry in WalkDir::new(&full_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() || !is_demo_file(entry.path()) {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };

            discovery
                .records
                .push(DemoRecord::new(dir, name, entry.path().to_path_buf()));
        }

        tracing::debug!(
            "Found {} demos in {}",
            discovery.records.len() - before,
            dir
        );
        discovery.folders.push(dir.to_string());
    }

    discovery
}

/// Whether `path` has exactly the lowercase `html` extension.
pub fn is_demo_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(DEMO_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn paths(discovery: &Discovery) -> Vec<&str> {
        discovery
            .records
            .iter()
            .map(|r| r.relative_path.as_str())
            .collect()
    }

    #[test]
    fn collects_html_files_in_declared_order() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("b/one.html"), "").unwrap();
        fs::write(temp.path().join("a/x.html"), "").unwrap();
        fs::write(temp.path().join("a/y-two.html"), "").unwrap();

        let discovery = discover(temp.path(), &["b", "a"]);

        assert_eq!(paths(&discovery), vec!["b/one.html", "a/x.html", "a/y-two.html"]);
        assert_eq!(discovery.folders, vec!["b", "a"]);
        assert!(discovery.missing.is_empty());
    }

    #[test]
    fn skips_missing_directories() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("a/x.html"), "").unwrap();

        let discovery = discover(temp.path(), &["a", "c", "d"]);

        assert_eq!(discovery.len(), 1);
        assert_eq!(discovery.folders, vec!["a"]);
        assert_eq!(discovery.missing, vec!["c", "d"]);
    }

    #[test]
    fn warns_once_per_missing_directory() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let discovery = tracing::subscriber::with_default(subscriber, || {
            discover(temp.path(), &["a", "c"])
        });

        let output = logs.contents();
        assert_eq!(discovery.missing, vec!["c"]);
        assert_eq!(output.matches("Directory not found: c").count(), 1);
        assert!(output.contains("WARN"));
        assert!(!output.contains("Directory not found: a"));
    }

    #[test]
    fn ignores_non_html_entries() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("a");
        fs::create_dir_all(dir.join("nested.html")).unwrap();
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("sub/deep.html"), "").unwrap();
        fs::write(dir.join("style.css"), "").unwrap();
        fs::write(dir.join("upper.HTML"), "").unwrap();
        fs::write(dir.join("page.htm"), "").unwrap();
        fs::write(dir.join("keep.html"), "").unwrap();

        let discovery = discover(temp.path(), &["a"]);

        assert_eq!(paths(&discovery), vec!["a/keep.html"]);
    }

    #[test]
    fn empty_directory_is_still_a_folder() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();

        let discovery = discover(temp.path(), &["empty"]);

        assert!(discovery.is_empty());
        assert_eq!(discovery.folders, vec!["empty"]);
    }

    #[test]
    fn does_not_deduplicate_across_directories() {
        let temp = tempdir().unwrap();
        for dir in ["a", "b"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
            fs::write(temp.path().join(dir).join("same.html"), "").unwrap();
        }

        let discovery = discover(temp.path(), &["a", "b"]);

        assert_eq!(paths(&discovery), vec!["a/same.html", "b/same.html"]);
    }

    #[test]
    fn repeated_runs_are_stable() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        for name in ["c.html", "a.html", "b.html"] {
            fs::write(temp.path().join("a").join(name), "").unwrap();
        }

        let first = discover(temp.path(), &["a"]);
        let second = discover(temp.path(), &["a"]);

        assert_eq!(first.records, second.records);
    }

    #[test]
    fn detects_demo_extension() {
        assert!(is_demo_file(Path::new("a/x.html")));
        assert!(!is_demo_file(Path::new("a/x.HTML")));
        assert!(!is_demo_file(Path::new("a/.html")));
        assert!(!is_demo_file(Path::new("a/x.html.bak")));
    }
}
