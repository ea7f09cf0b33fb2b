//! Page rendering.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tera::Context as TeraContext;

use crate::config::{HostEnvironment, SlottyOptions, ValidationMode};
use crate::devtools::{DevToolsAssets, inject_dev_tools, is_html_content_type, should_inject};
use crate::templating::SlotRenderer;

/// Render a page template into a layout.
///
/// Template names are paths relative to `--templates`.
///
/// ```bash
/// slotty render --templates ./templates --page pages/about.html --layout layout.html \
///     --context '{"title": "About"}' --output about.html
/// ```
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Directory containing the templates.
    #[arg(short, long)]
    templates: PathBuf,

    /// Page template to render first.
    #[arg(short, long)]
    page: String,

    /// Layout template that receives the rendered page as `body`.
    #[arg(short, long)]
    layout: Option<String>,

    /// Template context as a JSON object.
    #[arg(long)]
    context: Option<String>,

    /// Override the configured validation mode.
    #[arg(short, long, value_enum)]
    mode: Option<ValidationMode>,

    /// Environment to render for; development adds slot markers.
    #[arg(short, long, value_enum, default_value_t = HostEnvironment::Production)]
    environment: HostEnvironment,

    /// Write the HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderCommand {
    /// Render and emit the page.
    pub async fn execute(self, mut options: SlottyOptions) -> Result<()> {
        if let Some(mode) = self.mode {
            options.validation_mode = mode;
        }
        tracing::debug!(
            "Rendering with validation mode '{}' for {:?}",
            options.validation_mode,
            self.environment
        );

        let context = parse_context(self.context.as_deref())?;
        let renderer = SlotRenderer::from_dir(options, self.environment, &self.templates)?;
        let mut html = renderer.render_page(&self.page, self.layout.as_deref(), &context)?;

        let target = self.layout.as_deref().unwrap_or(&self.page);
        if should_inject(renderer.options().dev_tools_injection, self.environment)
            && is_html_content_type(content_type_for(Path::new(target)))
        {
            html = inject_dev_tools(&html, &DevToolsAssets::embedded());
        }

        match self.output {
            Some(path) => {
                tokio::fs::write(&path, &html)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("{} Rendered {} to {}", "✓".green(), self.page, path.display());
            }
            None => print!("{html}"),
        }
        Ok(())
    }
}

/// Build a Tera context from an optional JSON object.
pub fn parse_context(json: Option<&str>) -> Result<TeraContext> {
    let Some(json) = json else {
        return Ok(TeraContext::new());
    };

    let value: serde_json::Value =
        serde_json::from_str(json).context("Failed to parse --context as JSON")?;
    TeraContext::from_value(value).context("--context must be a JSON object")
}

/// MIME type implied by a template's extension.
#[must_use]
pub fn content_type_for(template: &Path) -> &'static str {
    match template.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
            "text/html; charset=utf-8"
        }
        _ => "text/plain; charset=utf-8",
    }
}
