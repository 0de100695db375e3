//! Template engine for rendering the index and preview pages.

use minijinja::{AutoEscape, Environment};

/// A demo card.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Card {
    /// Display title
    pub title: String,
    /// Link target relative to the page
    pub path: String,
    /// Screenshot `src`, preview page only
    pub screenshot: Option<String>,
}

/// One folder section of cards.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Section {
    /// Folder name
    pub title: String,
    /// Staggered fade-in delay in seconds, preformatted
    pub delay: String,
    /// Cards in listing order
    pub cards: Vec<Card>,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Heading shown at the top of the page
    pub site_title: String,
    /// Inline stylesheet
    pub stylesheet: String,
    /// Folder sections in declared order
    pub sections: Vec<Section>,
    /// Link to the list view
    pub index_href: String,
    /// Link to the grid preview
    pub preview_href: String,
}

/// Template engine using minijinja.
///
/// Autoescaping is off; values go through the `html` filter explicitly so that
/// link targets keep their `/` unescaped.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("html", escape_html);

        env.add_template("head.html", HEAD_TEMPLATE)
            .expect("Failed to add head template");
        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("Failed to add index template");
        env.add_template("preview.html", PREVIEW_TEMPLATE)
            .expect("Failed to add preview template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(&self, template: &str, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HEAD_TEMPLATE: &str = r##"<meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;600;700&display=swap" rel="stylesheet">
    <style>{{ stylesheet }}</style>"##;

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Design Demos Index</title>
    {% include "head.html" %}
</head>
<body>
    <header>
        <h1>{{ site_title | html }}</h1>
        <p class="subtitle">Index of all experimental pages and prototypes</p>
    </header>

    <main>
    {%- for section in sections %}
        <section style="animation-delay: {{ section.delay }}s">
            <div class="section-title">{{ section.title | html }}</div>
            <div class="grid">
            {%- for card in section.cards %}
                <a href="{{ card.path | html }}" class="card">
                    <div class="card-content">
                        <div class="card-title">{{ card.title | html }}</div>
                        <div class="card-path">{{ card.path | html }}</div>
                    </div>
                    <div class="card-icon">
                        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="5" y1="12" x2="19" y2="12"></line><polyline points="12 5 19 12 12 19"></polyline></svg>
                    </div>
                </a>
            {%- endfor %}
            </div>
        </section>
    {%- endfor %}
    </main>
</body>
</html>
"##;

const PREVIEW_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Design Demos Preview</title>
    {% include "head.html" %}
</head>
<body>
    <header>
        <h1>{{ site_title | html }}</h1>
        <p class="subtitle">Visual preview of experimental pages and prototypes</p>

        <div class="view-toggle">
            <a href="{{ index_href | html }}" class="view-btn">List View</a>
            <a href="{{ preview_href | html }}" class="view-btn active">Grid Preview</a>
        </div>
    </header>

    <main>
    {%- for section in sections %}
        <section style="animation-delay: {{ section.delay }}s">
            <div class="section-title">{{ section.title | html }}</div>
            <div class="grid">
            {%- for card in section.cards %}
                <a href="{{ card.path | html }}" class="card">
                    {%- if card.screenshot %}
                    <img src="{{ card.screenshot | html }}" alt="{{ card.title | html }}" class="card-image" loading="lazy">
                    {%- else %}
                    <div class="card-image placeholder">No Preview Available</div>
                    {%- endif %}
                    <div class="card-content">
                        <div class="card-title">{{ card.title | html }}</div>
                        <div class="card-path">{{ card.path | html }}</div>
                        <div class="card-actions">
                            <span class="try-btn">
                                View Demo
                                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="5" y1="12" x2="19" y2="12"></line><polyline points="12 5 19 12 12 19"></polyline></svg>
                            </span>
                        </div>
                    </div>
                </a>
            {%- endfor %}
            </div>
        </section>
    {%- endfor %}
    </main>
</body>
</html>
"##;
