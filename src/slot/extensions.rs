//! `:before` / `:after` slot extensions.
//!
//! Every base slot `name` has two extension slots, `name:before` and
//! `name:after`, rendered immediately around it. Extensions do not nest:
//! `name:before:before` is not a valid slot name.

use super::store::SlotStore;
use crate::core::{Result, SlottyError};

/// Suffix of the slot rendered before its base slot.
pub const BEFORE_SUFFIX: &str = ":before";

/// Suffix of the slot rendered after its base slot.
pub const AFTER_SUFFIX: &str = ":after";

/// Strip a trailing `:before` or `:after` from `slot_name`.
///
/// # Errors
///
/// [`SlottyError::InvalidArgument`] when `slot_name` is blank.
pub fn base_slot_name(slot_name: &str) -> Result<&str> {
    if slot_name.trim().is_empty() {
        return Err(SlottyError::invalid_argument(
            "slot_name",
            "Slot name cannot be null or whitespace.",
        ));
    }

    Ok(slot_name
        .strip_suffix(BEFORE_SUFFIX)
        .or_else(|| slot_name.strip_suffix(AFTER_SUFFIX))
        .unwrap_or(slot_name))
}

/// `base` + `:before`. The caller is expected to have validated `base`.
#[must_use]
pub fn before_slot_name(base: &str) -> String {
    format!("{base}{BEFORE_SUFFIX}")
}

/// `base` + `:after`. The caller is expected to have validated `base`.
#[must_use]
pub fn after_slot_name(base: &str) -> String {
    format!("{base}{AFTER_SUFFIX}")
}

/// Whether `slot_name` carries a `:before` or `:after` modifier.
#[must_use]
pub fn is_extension_slot(slot_name: &str) -> bool {
    slot_name.ends_with(BEFORE_SUFFIX) || slot_name.ends_with(AFTER_SUFFIX)
}

/// All content for `slot_name`, extensions included.
///
/// Extension slots return their own content unchanged. Base slots return the
/// `:before` fragments, then the main fragments, then the `:after`
/// fragments, each group in fill order.
///
/// # Errors
///
/// [`SlottyError::InvalidArgument`] when `slot_name` is blank.
pub fn extended_content<S>(store: &S, slot_name: &str) -> Result<Vec<String>>
where
    S: SlotStore + ?Sized,
{
    let base = base_slot_name(slot_name)?;
    if base != slot_name {
        return Ok(store.get_content(slot_name)?.to_vec());
    }

    let before = store.get_content(&before_slot_name(base))?;
    let main = store.get_content(base)?;
    let after = store.get_content(&after_slot_name(base))?;

    Ok(before.iter().chain(main).chain(after).cloned().collect())
}
