//! Embedded stylesheets for the generated pages.

/// Which generated page a stylesheet is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Preview,
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Stylesheet text for `page`, minified when requested.
    ///
    /// Falls back to the unminified text if lightningcss rejects it.
    pub fn stylesheet(page: Page, minify: bool) -> String {
        let css = Self::generate_css(page);
        if !minify {
            return css;
        }

        match Self::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Failed to minify stylesheet: {}", e);
                css
            }
        }
    }

    /// Generate the raw CSS for `page`.
    pub fn generate_css(page: Page) -> String {
        match page {
            Page::Index => format!("{}{}", THEME_CSS, INDEX_CSS),
            Page::Preview => format!("{}{}", THEME_CSS, PREVIEW_CSS),
        }
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Shared by both pages
const THEME_CSS: &str = r#"
:root {
  --bg: #0a0a0a;
  --surface: #141414;
  --surface-hover: #1f1f1f;
  --border: #333;
  --accent: #d4f238;
  --text: #ededed;
  --text-muted: #888;
  --font-main: 'Outfit', sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
  background-color: var(--bg);
  color: var(--text);
  font-family: var(--font-main);
  min-height: 100vh;
  padding: 2rem;
  -webkit-font-smoothing: antialiased;
}

h1 {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 0.5rem;
  background: linear-gradient(to right, #fff, #888);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

p.subtitle {
  color: var(--text-muted);
  font-size: 1.1rem;
}

section {
  animation: fadeIn 0.5s ease-out forwards;
}

.section-title {
  margin-bottom: 1.5rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--accent);
  text-transform: uppercase;
  letter-spacing: 0.05em;
  font-size: 0.875rem;
  font-weight: 600;
}

.section-title::after {
  content: '';
  flex: 1;
  height: 1px;
  background: var(--border);
  opacity: 0.5;
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  line-height: 1.3;
  margin-bottom: 0.5rem;
  text-transform: capitalize;
}

.card-path {
  font-size: 0.75rem;
  color: var(--text-muted);
  font-family: monospace;
  opacity: 0.7;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;

const INDEX_CSS: &str = r#"
header {
  max-width: 1200px;
  margin: 0 auto 3rem auto;
  text-align: center;
  padding-bottom: 2rem;
  border-bottom: 1px solid var(--border);
}

main {
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  gap: 3rem;
}

.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.5rem;
  transition: all 0.3s cubic-bezier(0.16, 1, 0.3, 1);
  text-decoration: none;
  color: inherit;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  height: 100%;
  position: relative;
  overflow: hidden;
}

.card:hover {
  transform: translateY(-4px);
  border-color: var(--accent);
  background: var(--surface-hover);
  box-shadow: 0 10px 30px -10px rgba(0,0,0,0.5);
}

.card-content {
  z-index: 1;
}

.card-icon {
  margin-top: 1.5rem;
  display: flex;
  justify-content: flex-end;
  opacity: 0;
  transform: translateX(-10px);
  transition: all 0.3s ease;
  color: var(--accent);
}

.card:hover .card-icon {
  opacity: 1;
  transform: translateX(0);
}
"#;

const PREVIEW_CSS: &str = r#"
header {
  max-width: 1400px;
  margin: 0 auto 3rem auto;
  text-align: center;
  padding-bottom: 2rem;
  border-bottom: 1px solid var(--border);
  position: relative;
}

.view-toggle {
  position: absolute;
  right: 0;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  gap: 1rem;
}

.view-btn {
  background: var(--surface);
  border: 1px solid var(--border);
  color: var(--text-muted);
  padding: 0.5rem 1rem;
  border-radius: 8px;
  text-decoration: none;
  font-size: 0.875rem;
  transition: all 0.2s;
}

.view-btn.active {
  color: var(--accent);
  border-color: var(--accent);
}

.view-btn:hover {
  background: var(--surface-hover);
  color: var(--text);
}

main {
  max-width: 1400px;
  margin: 0 auto;
  display: grid;
  gap: 4rem;
}

.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(350px, 1fr));
  gap: 2rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 16px;
  overflow: hidden;
  transition: all 0.4s cubic-bezier(0.16, 1, 0.3, 1);
  text-decoration: none;
  color: inherit;
  display: flex;
  flex-direction: column;
}

.card:hover {
  transform: translateY(-8px);
  border-color: var(--accent);
  box-shadow: 0 20px 40px -10px rgba(0,0,0,0.5);
}

.card-image {
  width: 100%;
  height: 200px;
  background: var(--surface-hover);
  object-fit: cover;
  border-bottom: 1px solid var(--border);
  transition: opacity 0.3s ease;
}

.card-image.placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  font-size: 0.875rem;
}

.card:hover .card-image {
  opacity: 0.9;
}

.card-content {
  padding: 1.5rem;
}

.card-content .card-path {
  margin-bottom: 1rem;
}

.card-actions {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: auto;
}

.try-btn {
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--accent);
  display: flex;
  align-items: center;
  gap: 0.5rem;
  opacity: 0.8;
  transition: opacity 0.2s;
}

.card:hover .try-btn {
  opacity: 1;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_share_the_theme() {
        let index = AssetPipeline::generate_css(Page::Index);
        let preview = AssetPipeline::generate_css(Page::Preview);

        assert!(index.contains("--accent: #d4f238"));
        assert!(preview.contains("--accent: #d4f238"));
        assert!(preview.contains(".card-image.placeholder"));
        assert!(!index.contains(".view-toggle"));
    }

    #[test]
    fn minifies_stylesheet() {
        let raw = AssetPipeline::stylesheet(Page::Index, false);
        let minified = AssetPipeline::stylesheet(Page::Index, true);

        assert!(minified.len() < raw.len());
        assert!(!minified.contains("\n  "));
    }
}
