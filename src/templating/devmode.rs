//! Development-mode slot markers.
//!
//! In development every rendered slot is wrapped so the highlighting overlay
//! can find it. Slots that normally live in `<head>` cannot contain a `<div>`,
//! so they are marked with HTML comments instead.

/// Base names treated as `<head>` slots (compared case-insensitively).
const HEAD_SLOT_NAMES: &[&str] = &[
    "head",
    "meta",
    "title",
    "style",
    "styles",
    "css",
    "link",
    "links",
    "viewport",
    "description",
    "keywords",
    "author",
    "robots",
    "canonical",
];

/// Whether `slot_name` is likely rendered inside `<head>`.
#[must_use]
pub fn is_head_slot(slot_name: &str) -> bool {
    let base = slot_name.split(':').next().unwrap_or(slot_name);
    HEAD_SLOT_NAMES.iter().any(|head| head.eq_ignore_ascii_case(base))
}

/// Comment markers for a `<head>` slot.
///
/// Content is only emitted between the markers when there is some; an empty
/// slot renders as its opening marker alone.
#[must_use]
pub fn head_wrapper(slot_name: &str, content: &str, has_content: bool) -> String {
    let status = if has_content {
        "HAS CONTENT"
    } else {
        "EMPTY"
    };
    let start = format!("<!-- SLOTTY: {slot_name} ({status}) -->");

    if has_content && !content.trim().is_empty() {
        format!("{start}\n{content}\n<!-- /SLOTTY: {slot_name} -->")
    } else {
        start
    }
}

/// `<div>` marker for a body slot, picked up by the overlay script.
#[must_use]
pub fn body_wrapper(slot_name: &str, content: &str, has_content: bool) -> String {
    let status = if has_content {
        "has-content"
    } else {
        "empty"
    };
    format!(
        r#"<div class="slotty-slot" data-slotty-slot="{slot_name}" data-slotty-status="{status}">{content}</div>"#
    )
}

/// Wrap with whichever marker fits `slot_name`.
#[must_use]
pub fn wrap(slot_name: &str, content: &str, has_content: bool) -> String {
    if is_head_slot(slot_name) {
        head_wrapper(slot_name, content, has_content)
    } else {
        body_wrapper(slot_name, content, has_content)
    }
}
