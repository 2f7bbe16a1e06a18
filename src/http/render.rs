//! Response rendering.
//!
//! # Responsibilities
//! - Compile the redirect page template once at startup
//! - Substitute the resolved route into the go-import and refresh tags
//! - HTML-escape every substituted field
//!
//! # Design Decisions
//! - The wildcard element is attacker-controlled, so all fields pass
//!   through the escaper; `/` is left alone so URLs render verbatim
//! - The repo root is rendered exactly as resolved; the import root has
//!   its trailing slash stripped for display

use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "redirect.html";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
<meta name="go-import" content="{{ import_root }} {{ vcs }} {{ repo_root }}">
<meta http-equiv="refresh" content="0; url=https://godoc.org/{{ import_root }}{{ suffix }}">
</head>
<body>
Redirecting to docs at <a href="https://godoc.org/{{ import_root }}{{ suffix }}">godoc.org/{{ import_root }}{{ suffix }}</a>...
</body>
</html>
"#;

/// Fields substituted into the redirect page.
#[derive(Debug, Clone)]
pub struct RenderModel {
    pub import_root: String,
    pub vcs: String,
    pub repo_root: String,
    pub suffix: String,
}

/// Renderer holding the compiled template.
pub struct Renderer {
    tera: Tera,
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

impl Renderer {
    /// Compile the redirect template. An invalid template is a startup
    /// failure, not a per-request one.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        tera.set_escape_fn(escape_html);
        Ok(Self { tera })
    }

    /// Render the redirect page for a resolved route.
    pub fn render(&self, model: &RenderModel) -> Result<String, tera::Error> {
        let import_root = model.import_root.strip_suffix('/').unwrap_or(&model.import_root);

        let mut ctx = Context::new();
        ctx.insert("import_root", import_root);
        ctx.insert("vcs", &model.vcs);
        ctx.insert("repo_root", &model.repo_root);
        ctx.insert("suffix", &model.suffix);
        self.tera.render(TEMPLATE_NAME, &ctx)
    }
}
