//! Development tools injection.
//!
//! In development, rendered HTML gets the slot highlighting stylesheet and
//! overlay script inlined so the `slotty-slot` markers become visible. Both
//! assets are compiled into the binary.

use crate::config::{DevToolsInjection, HostEnvironment};

const CSS: &str = include_str!("../assets/slotty.css");
const JS: &str = include_str!("../assets/slotty.js");

/// CSS and JavaScript inlined into HTML documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevToolsAssets {
    /// Stylesheet placed before `</head>`.
    pub css: &'static str,
    /// Script placed before `</body>`.
    pub js: &'static str,
}

impl DevToolsAssets {
    /// The assets shipped with this crate.
    #[must_use]
    pub const fn embedded() -> Self {
        Self {
            css: CSS,
            js: JS,
        }
    }
}

/// Whether the developer tools should be injected.
///
/// `Auto` only injects in [`HostEnvironment::Development`].
#[must_use]
pub const fn should_inject(mode: DevToolsInjection, environment: HostEnvironment) -> bool {
    match mode {
        DevToolsInjection::Always => true,
        DevToolsInjection::Never => false,
        DevToolsInjection::Auto => environment.is_development(),
    }
}

/// Whether a response with this `Content-Type` is HTML.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

/// Inline `assets` into `html`.
///
/// The stylesheet goes before the last `</head>` and the script before the
/// last `</body>`, both matched case-insensitively. A document missing either
/// marker simply does not get that asset.
#[must_use]
pub fn inject_dev_tools(html: &str, assets: &DevToolsAssets) -> String {
    let mut html = html.to_string();

    if let Some(index) = rfind_ignore_case(&html, "</head>") {
        let tag = format!(
            "    <!-- Slotty Development Tools CSS -->\n    <style>{}</style>\n",
            assets.css
        );
        html.insert_str(index, &tag);
    }

    if let Some(index) = rfind_ignore_case(&html, "</body>") {
        let tag = format!(
            "    <!-- Slotty Development Tools JavaScript -->\n    <script>{}</script>\n",
            assets.js
        );
        html.insert_str(index, &tag);
    }

    html
}

// ASCII lowercasing keeps byte offsets, so the index is valid in `haystack`.
fn rfind_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().rfind(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSETS: DevToolsAssets = DevToolsAssets {
        css: ".x{}",
        js: "run()",
    };

    #[test]
    fn test_should_inject() {
        use DevToolsInjection::{Always, Auto, Never};
        use HostEnvironment::{Development, Production};

        assert!(should_inject(Always, Production));
        assert!(!should_inject(Never, Development));
        assert!(should_inject(Auto, Development));
        assert!(!should_inject(Auto, Production));
    }

    #[test]
    fn test_injects_before_closing_tags() {
        let html = inject_dev_tools("<html><head></head><body><p>x</p></body></html>", &ASSETS);

        let style = html.find("<style>.x{}</style>").unwrap();
        let head_end = html.find("</head>").unwrap();
        let script = html.find("<script>run()</script>").unwrap();
        let body_end = html.find("</body>").unwrap();
        assert!(style < head_end);
        assert!(head_end < script && script < body_end);
    }

    #[test]
    fn test_matches_tags_case_insensitively() {
        let html = inject_dev_tools("<HEAD></HEAD><BODY></BODY>", &ASSETS);
        assert!(html.contains("<style>.x{}</style>\n</HEAD>"));
        assert!(html.contains("<script>run()</script>\n</BODY>"));
    }

    #[test]
    fn test_uses_last_closing_tag() {
        let html = inject_dev_tools("<body><pre>&lt;/body&gt; </body></pre></body>", &ASSETS);
        assert!(html.ends_with("<script>run()</script>\n</body>"));
    }

    #[test]
    fn test_fragment_is_unchanged() {
        assert_eq!(inject_dev_tools("<p>fragment</p>", &ASSETS), "<p>fragment</p>");
    }

    #[test]
    fn test_html_content_type() {
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("TEXT/HTML"));
        assert!(!is_html_content_type("application/json"));
    }

    #[test]
    fn test_embedded_assets_are_present() {
        let assets = DevToolsAssets::embedded();
        assert!(assets.css.contains(".slotty-slot"));
        assert!(assets.js.contains("slotty-debug"));
    }
}
