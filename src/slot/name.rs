//! Slot name validation.
//!
//! A slot name starts with an ASCII letter, continues with letters, digits,
//! hyphens or underscores, and may carry exactly one `:before` or `:after`
//! modifier. The same check runs on the fill path and the slot path.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern for valid slot names, including the optional extension modifier.
pub const SLOT_NAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_-]*(?::(?:before|after))?$";

/// The compiled slot name pattern.
///
/// Exposed for callers that need to match names directly; prefer
/// [`is_valid_slot_name`] for plain validation.
pub fn slot_name_regex() -> &'static Regex {
    static SLOT_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    SLOT_NAME_REGEX.get_or_init(|| {
        #[allow(clippy::expect_used)]
        Regex::new(SLOT_NAME_PATTERN).expect("slot name pattern is a valid regex")
    })
}

/// Whether `slot_name` conforms to the naming grammar.
///
/// Never panics. Empty and whitespace-only names are invalid.
#[must_use]
pub fn is_valid_slot_name(slot_name: &str) -> bool {
    if slot_name.trim().is_empty() {
        return false;
    }
    slot_name_regex().is_match(slot_name)
}
