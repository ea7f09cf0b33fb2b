//! Library-level rendering scenarios.

use slotty::config::{HostEnvironment, ValidationMode};
use slotty::core::SlottyError;
use slotty::test_utils::{init_test_logging, renderer};
use tera::Context;

const LAYOUT: &str = concat!(
    r#"{{ slot(name="styles") }}"#,
    r#"|{{ slot(name="header") }}"#,
    r#"|{% filter slot(name="sidebar") %}<aside>default</aside>{% endfilter %}"#,
    r#"|{{ body }}"#,
);

fn render(
    mode: ValidationMode,
    environment: HostEnvironment,
    page: &str,
) -> Result<String, SlottyError> {
    init_test_logging(None);
    renderer(mode, environment, &[("layout.html", LAYOUT), ("page.html", page)]).render_page(
        "page.html",
        Some("layout.html"),
        &Context::new(),
    )
}

#[test]
fn test_fills_accumulate_in_order() {
    let page = concat!(
        r#"{{ "<link a>" | fill(name="styles") }}"#,
        r#"{% for n in [1, 2] %}{% filter fill(name="styles") %}<link {{ n }}>{% endfilter %}{% endfor %}"#,
    );
    let html = render(ValidationMode::Throw, HostEnvironment::Production, page).unwrap();
    assert!(html.starts_with("<link a><link 1><link 2>|"));
}

#[test]
fn test_extensions_wrap_fallback() {
    let page = concat!(
        r#"{{ "<b>" | fill(name="sidebar:before") }}"#,
        r#"{{ "</b>" | fill(name="sidebar:after") }}"#,
    );
    let html = render(ValidationMode::Throw, HostEnvironment::Production, page).unwrap();
    assert!(html.contains("|<b><aside>default</aside></b>|"));
}

#[test]
fn test_fill_replaces_fallback() {
    let page = r#"{% filter fill(name="sidebar") %}<aside>custom</aside>{% endfilter %}"#;
    let html = render(ValidationMode::Throw, HostEnvironment::Production, page).unwrap();
    assert!(html.contains("|<aside>custom</aside>|"));
    assert!(!html.contains("default"));
}

#[test]
fn test_extension_slot_defined_directly() {
    let layout = r#"[{{ slot(name="footer:after") }}]{{ body }}"#;
    let page = r#"{{ "x" | fill(name="footer:after") }}"#;

    let html = renderer(
        ValidationMode::Throw,
        HostEnvironment::Production,
        &[("layout.html", layout), ("page.html", page)],
    )
    .render_page("page.html", Some("layout.html"), &Context::new())
    .unwrap();
    assert_eq!(html, "[x]");
}

#[test]
fn test_every_orphan_is_listed() {
    let page = concat!(
        r#"{{ "a" | fill(name="zeta") }}"#,
        r#"{{ "b" | fill(name="header") }}"#,
        r#"{{ "c" | fill(name="alpha:before") }}"#,
    );
    let err = render(ValidationMode::Throw, HostEnvironment::Production, page).unwrap_err();

    assert_eq!(err.slot_name(), Some("zeta"));
    assert!(err.to_string().contains("Found 2 orphaned fills"));
    assert!(err.to_string().contains("'zeta', 'alpha:before'"));
}

#[test]
fn test_silent_mode_never_fails_on_orphans() {
    let page = r#"{{ "a" | fill(name="nowhere") }}ok"#;
    let html = render(ValidationMode::Silent, HostEnvironment::Production, page).unwrap();
    assert!(html.ends_with("|ok"));
}

#[test]
fn test_development_markers() {
    let page = r#"{{ "<link>" | fill(name="styles") }}"#;
    let html = render(ValidationMode::Log, HostEnvironment::Development, page).unwrap();

    assert!(html.starts_with("<!-- SLOTTY: styles (HAS CONTENT) -->\n<link>\n<!-- /SLOTTY: styles -->|"));
    assert!(html.contains(
        r#"<div class="slotty-slot" data-slotty-slot="header" data-slotty-status="empty"></div>"#
    ));
    assert!(html.contains(
        r#"<div class="slotty-slot" data-slotty-slot="sidebar" data-slotty-status="has-content"><aside>default</aside></div>"#
    ));
}

#[test]
fn test_blank_slot_name_is_rejected() {
    let layout = r#"{{ slot(name="  ") }}"#;
    let err = renderer(ValidationMode::Silent, HostEnvironment::Production, &[("layout.html", layout)])
        .render_page("layout.html", None, &Context::new())
        .unwrap_err();
    assert!(matches!(err, SlottyError::InvalidArgument { .. }));
}
