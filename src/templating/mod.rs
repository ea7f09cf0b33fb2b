//! Tera binding for slots and fills.
//!
//! [`SlotRenderer`] renders a page template into a layout template the way a
//! view engine renders a view into its layout: the page runs first, so every
//! fill it contains is registered before the layout resolves its slots. The
//! rendered page is available to the layout as `body`.
//!
//! ```rust,no_run
//! use slotty::config::{HostEnvironment, SlottyOptions};
//! use slotty::templating::SlotRenderer;
//! use tera::Context;
//!
//! # fn example() -> Result<(), slotty::core::SlottyError> {
//! let renderer = SlotRenderer::from_raw_templates(
//!     SlottyOptions::default(),
//!     HostEnvironment::Production,
//!     &[
//!         ("layout.html", r#"<header>{{ slot(name="header") }}</header>{{ body }}"#),
//!         ("page.html", r#"{% filter fill(name="header") %}Welcome{% endfilter %}<p>Hi</p>"#),
//!     ],
//! )?;
//!
//! let html = renderer.render_page("page.html", Some("layout.html"), &Context::new())?;
//! assert_eq!(html, "<header>Welcome</header><p>Hi</p>");
//! # Ok(())
//! # }
//! ```
//!
//! Autoescaping is disabled: slot content is raw HTML.

pub mod devmode;
pub mod filters;
pub mod slots;

use std::path::Path;
use std::sync::Arc;

use tera::{Context as TeraContext, Tera};

use crate::config::{HostEnvironment, SlottyOptions};
use crate::core::{Result, SlottyError};
use crate::request::{RequestScope, ScopeHandle};

/// Name under which the rendered page is exposed to its layout.
pub const BODY_VARIABLE: &str = "body";

/// Renders pages into layouts with per-request slot state.
#[derive(Debug, Clone)]
pub struct SlotRenderer {
    options: Arc<SlottyOptions>,
    environment: HostEnvironment,
    templates: Tera,
}

impl SlotRenderer {
    /// Build a renderer from in-memory templates.
    ///
    /// # Errors
    ///
    /// [`SlottyError::TemplateError`] when a template fails to parse.
    pub fn from_raw_templates(
        options: SlottyOptions,
        environment: HostEnvironment,
        templates: &[(&str, &str)],
    ) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied()).map_err(template_error)?;
        Ok(Self::with_tera(options, environment, tera))
    }

    /// Build a renderer from every template file under `dir`.
    ///
    /// Template names are paths relative to `dir` (e.g. `pages/index.html`).
    ///
    /// # Errors
    ///
    /// [`SlottyError::TemplateError`] when the directory cannot be globbed or
    /// a template fails to parse.
    pub fn from_dir(
        options: SlottyOptions,
        environment: HostEnvironment,
        dir: &Path,
    ) -> Result<Self> {
        let pattern = format!("{}/**/*", dir.display());
        tracing::debug!("Loading templates from {}", pattern);
        let tera = Tera::new(&pattern).map_err(template_error)?;
        Ok(Self::with_tera(options, environment, tera))
    }

    fn with_tera(options: SlottyOptions, environment: HostEnvironment, mut tera: Tera) -> Self {
        tera.autoescape_on(Vec::new());
        Self {
            options: Arc::new(options),
            environment,
            templates: tera,
        }
    }

    /// The options every request is created with.
    #[must_use]
    pub fn options(&self) -> &SlottyOptions {
        &self.options
    }

    /// The environment slots are rendered for.
    #[must_use]
    pub const fn environment(&self) -> HostEnvironment {
        self.environment
    }

    /// Names of the loaded templates, sorted.
    #[must_use]
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.get_template_names().collect();
        names.sort_unstable();
        names
    }

    fn ensure_template(&self, name: &str) -> Result<()> {
        if self.templates.get_template_names().any(|loaded| loaded == name) {
            return Ok(());
        }

        let names = self.template_names();
        let available = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };
        Err(SlottyError::TemplateError {
            message: format!("Template '{name}' not found. Available templates: {available}"),
        })
    }

    /// A Tera instance whose `fill` / `slot` helpers write to `handle`'s request.
    #[must_use]
    pub fn request_tera(&self, handle: &ScopeHandle) -> Tera {
        let mut tera = self.templates.clone();
        tera.register_filter("fill", filters::create_fill_filter(handle.clone()));
        tera.register_filter(
            "slot",
            filters::create_slot_filter(handle.clone(), self.environment),
        );
        tera.register_function(
            "slot",
            filters::create_slot_function(handle.clone(), self.environment),
        );
        tera
    }

    /// Render `page`, then `layout` (if any), then validate slot usage.
    ///
    /// Everything happens inside one fresh [`RequestScope`], which is
    /// discarded before this returns.
    ///
    /// # Errors
    ///
    /// Slot errors raised inside the templates keep their original kind;
    /// [`SlottyError::SlotNotFound`] is returned in `throw` mode when a fill
    /// had no slot.
    pub fn render_page(
        &self,
        page: &str,
        layout: Option<&str>,
        context: &TeraContext,
    ) -> Result<String> {
        self.ensure_template(page)?;
        if let Some(layout) = layout {
            self.ensure_template(layout)?;
        }

        let scope = RequestScope::new(&self.options);
        let tera = self.request_tera(&scope.handle());

        tracing::debug!("Rendering page '{}'", page);
        let body = tera.render(page, context).map_err(render_error)?;

        let html = match layout {
            Some(layout) => {
                tracing::debug!("Rendering layout '{}'", layout);
                let mut layout_context = context.clone();
                layout_context.insert(BODY_VARIABLE, &body);
                tera.render(layout, &layout_context).map_err(render_error)?
            }
            None => body,
        };

        scope.finish()?;
        Ok(html)
    }
}

fn render_error(error: tera::Error) -> SlottyError {
    filters::find_slotty_error(&error).unwrap_or_else(|| template_error(error))
}

fn template_error(error: tera::Error) -> SlottyError {
    SlottyError::TemplateError {
        message: format_tera_error(&error),
    }
}

/// Flatten a Tera error and its causes into one line.
#[must_use]
pub fn format_tera_error(error: &tera::Error) -> String {
    let mut messages = vec![error.to_string()];
    let mut current = std::error::Error::source(error);
    while let Some(source) = current {
        messages.push(source.to_string());
        current = source.source();
    }
    messages.join(": ")
}
