//! Slot and fill semantics shared by the Tera filters and functions.

use super::devmode;
use crate::config::HostEnvironment;
use crate::core::{Result, SlottyError};
use crate::slot::{
    SlotStore, after_slot_name, before_slot_name, extended_content, is_extension_slot,
};

/// Store `content` in `slot_name`.
///
/// `content` is `None` when the template supplied no value at all.
pub fn fill<S: SlotStore>(store: &mut S, slot_name: &str, content: Option<&str>) -> Result<()> {
    if slot_name.trim().is_empty() {
        return Err(SlottyError::invalid_argument(
            "slot_name",
            "Slot name cannot be null or whitespace.",
        ));
    }
    let content = content
        .ok_or_else(|| SlottyError::invalid_argument("content", "Fill content cannot be null."))?;
    store.add_content(slot_name, content)
}

/// Resolve `slot_name` to HTML.
///
/// The name is trimmed and registered as defined. Base slots also define their
/// `:before` / `:after` extensions and render them around the main content.
/// Non-blank `fallback` replaces the main content when nothing was filled.
pub fn render_slot<S: SlotStore>(
    store: &mut S,
    slot_name: &str,
    fallback: Option<&str>,
    environment: HostEnvironment,
) -> Result<String> {
    if slot_name.trim().is_empty() {
        return Err(SlottyError::invalid_argument(
            "name",
            "Slot name is required. Use the 'name' argument to specify a slot name.",
        ));
    }
    let slot_name = slot_name.trim();
    let fallback = fallback.filter(|text| !text.trim().is_empty());

    store.register_slot_defined(slot_name)?;

    if is_extension_slot(slot_name) {
        render_extension_slot(&*store, slot_name, fallback, environment)
    } else {
        render_base_slot(store, slot_name, fallback, environment)
    }
}

fn render_extension_slot<S: SlotStore>(
    store: &S,
    slot_name: &str,
    fallback: Option<&str>,
    environment: HostEnvironment,
) -> Result<String> {
    let content = store.get_content(slot_name)?;
    let html = match fallback {
        Some(fallback) if content.is_empty() => fallback.to_string(),
        _ => content.concat(),
    };

    if environment.is_development() {
        let has_content = !html.trim().is_empty() || fallback.is_some();
        return Ok(devmode::wrap(slot_name, &html, has_content));
    }
    Ok(html)
}

fn render_base_slot<S: SlotStore>(
    store: &mut S,
    base: &str,
    fallback: Option<&str>,
    environment: HostEnvironment,
) -> Result<String> {
    let before_name = before_slot_name(base);
    let after_name = after_slot_name(base);
    store.register_slot_defined(&before_name)?;
    store.register_slot_defined(&after_name)?;

    let main_is_empty = store.get_content(base)?.is_empty();

    if !environment.is_development() {
        return Ok(match fallback {
            Some(fallback) if main_is_empty => format!(
                "{}{}{}",
                store.get_content(&before_name)?.concat(),
                fallback,
                store.get_content(&after_name)?.concat()
            ),
            _ => extended_content(&*store, base)?.concat(),
        });
    }

    let before_html = store.get_content(&before_name)?.concat();
    let after_html = store.get_content(&after_name)?.concat();
    let main_html = match fallback {
        Some(fallback) if main_is_empty => fallback.to_string(),
        _ => store.get_content(base)?.concat(),
    };

    let mut html = String::new();
    if !before_html.trim().is_empty() {
        html.push_str(&devmode::wrap(&before_name, &before_html, true));
    }
    let has_main = !main_html.trim().is_empty() || fallback.is_some();
    html.push_str(&devmode::wrap(base, &main_html, has_main));
    if !after_html.trim().is_empty() {
        html.push_str(&devmode::wrap(&after_name, &after_html, true));
    }
    Ok(html)
}
