//! Request-scoped slot content registry.
//!
//! One [`SlotContentStore`] is created per request. It accumulates fills per
//! slot name (in fill order, duplicates kept), remembers which slots were
//! defined and filled while tracking is enabled, and reconciles the two at the
//! end of the request.
//!
//! All three containers are created lazily on first access and dropped with
//! the store. The store does no locking: a request renders its fragments one
//! after another.

use indexmap::{IndexMap, IndexSet};

use super::name::is_valid_slot_name;
use super::validation;
use crate::config::{SlottyOptions, ValidationMode};
use crate::core::{Result, SlottyError};

/// Fill content keyed by exact slot name (modifiers included).
pub type ContentMap = IndexMap<String, Vec<String>>;

/// A set of slot names that iterates in insertion order.
pub type SlotSet = IndexSet<String>;

/// Operations the templating layer needs from a slot registry.
pub trait SlotStore {
    /// The live content map for the current request.
    ///
    /// Repeated calls return the same map; changes made through one borrow
    /// are visible through the next.
    fn get_all_content(&mut self) -> &mut ContentMap;

    /// Append `content` to `slot_name`.
    ///
    /// # Errors
    ///
    /// [`SlottyError::InvalidArgument`] for a blank name,
    /// [`SlottyError::InvalidSlotName`] for a malformed one.
    fn add_content(&mut self, slot_name: &str, content: &str) -> Result<()>;

    /// Every fragment filled into `slot_name`, in fill order.
    ///
    /// Returns an empty slice for a slot nobody filled.
    ///
    /// # Errors
    ///
    /// [`SlottyError::InvalidArgument`] for a blank name.
    fn get_content(&self, slot_name: &str) -> Result<&[String]>;

    /// Record that `slot_name` is present in the render tree.
    ///
    /// # Errors
    ///
    /// Same as [`SlotStore::add_content`].
    fn register_slot_defined(&mut self, slot_name: &str) -> Result<()>;

    /// Slots defined so far in this request.
    fn get_defined_slots(&mut self) -> &SlotSet;

    /// Slots filled so far in this request.
    fn get_filled_slots(&mut self) -> &SlotSet;

    /// Reconcile defined and filled slots according to the validation mode.
    ///
    /// # Errors
    ///
    /// [`SlottyError::SlotNotFound`] in `throw` mode when a fill has no slot.
    fn validate_slot_usage(&mut self) -> Result<()>;
}

/// The per-request slot registry.
///
/// ```rust
/// use slotty::config::ValidationMode;
/// use slotty::slot::{SlotContentStore, SlotStore};
///
/// let mut store = SlotContentStore::new(ValidationMode::Throw);
/// store.add_content("header", "<h1>Hello</h1>")?;
/// store.register_slot_defined("header")?;
///
/// assert_eq!(store.get_content("header")?, ["<h1>Hello</h1>"]);
/// store.validate_slot_usage()?;
/// # Ok::<(), slotty::core::SlottyError>(())
/// ```
#[derive(Debug, Default)]
pub struct SlotContentStore {
    validation_mode: ValidationMode,
    content: Option<ContentMap>,
    defined_slots: Option<SlotSet>,
    filled_slots: Option<SlotSet>,
}

impl SlotContentStore {
    /// Create an empty store for one request.
    #[must_use]
    pub const fn new(validation_mode: ValidationMode) -> Self {
        Self {
            validation_mode,
            content: None,
            defined_slots: None,
            filled_slots: None,
        }
    }

    /// Create an empty store using the process-wide options.
    #[must_use]
    pub const fn from_options(options: &SlottyOptions) -> Self {
        Self::new(options.validation_mode)
    }

    /// The validation mode this store was created with.
    #[must_use]
    pub const fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    fn is_tracking_enabled(&self) -> bool {
        self.validation_mode.tracks_slots()
    }

    fn defined_slots_mut(&mut self) -> &mut SlotSet {
        self.defined_slots.get_or_insert_with(SlotSet::new)
    }

    fn filled_slots_mut(&mut self) -> &mut SlotSet {
        self.filled_slots.get_or_insert_with(SlotSet::new)
    }
}

fn ensure_not_blank(slot_name: &str) -> Result<()> {
    if slot_name.trim().is_empty() {
        return Err(SlottyError::invalid_argument(
            "slot_name",
            "Slot name cannot be null or whitespace.",
        ));
    }
    Ok(())
}

fn ensure_valid_name(slot_name: &str) -> Result<()> {
    ensure_not_blank(slot_name)?;
    if !is_valid_slot_name(slot_name) {
        return Err(SlottyError::invalid_slot_name(slot_name));
    }
    Ok(())
}

impl SlotStore for SlotContentStore {
    fn get_all_content(&mut self) -> &mut ContentMap {
        self.content.get_or_insert_with(ContentMap::new)
    }

    fn add_content(&mut self, slot_name: &str, content: &str) -> Result<()> {
        ensure_valid_name(slot_name)?;

        self.get_all_content().entry(slot_name.to_string()).or_default().push(content.to_string());

        if self.is_tracking_enabled() {
            self.filled_slots_mut().insert(slot_name.to_string());
        }

        tracing::debug!(
            "Added content to slot '{}' (length: {})",
            slot_name,
            content.len()
        );
        Ok(())
    }

    fn get_content(&self, slot_name: &str) -> Result<&[String]> {
        ensure_not_blank(slot_name)?;

        Ok(self
            .content
            .as_ref()
            .and_then(|content| content.get(slot_name))
            .map_or(&[][..], Vec::as_slice))
    }

    fn register_slot_defined(&mut self, slot_name: &str) -> Result<()> {
        ensure_valid_name(slot_name)?;

        if self.is_tracking_enabled() {
            self.defined_slots_mut().insert(slot_name.to_string());
            tracing::debug!("Registered slot '{}' as defined", slot_name);
        }
        Ok(())
    }

    fn get_defined_slots(&mut self) -> &SlotSet {
        self.defined_slots_mut()
    }

    fn get_filled_slots(&mut self) -> &SlotSet {
        self.filled_slots_mut()
    }

    fn validate_slot_usage(&mut self) -> Result<()> {
        if !self.is_tracking_enabled() {
            return Ok(());
        }

        let mode = self.validation_mode;
        let defined = self.defined_slots.get_or_insert_with(SlotSet::new);
        let filled = self.filled_slots.get_or_insert_with(SlotSet::new);
        validation::reconcile(mode, defined, filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(mode: ValidationMode) -> SlotContentStore {
        SlotContentStore::new(mode)
    }

    #[test]
    fn test_get_all_content_starts_empty() {
        let mut store = store(ValidationMode::Silent);
        assert!(store.get_all_content().is_empty());
    }

    #[test]
    fn test_get_all_content_returns_same_instance() {
        let mut store = store(ValidationMode::Silent);
        let first: *const ContentMap = store.get_all_content();
        store.get_all_content().insert("injected".to_string(), vec!["x".to_string()]);
        let second: *const ContentMap = store.get_all_content();

        assert_eq!(first, second);
        assert_eq!(store.get_content("injected").unwrap(), ["x"]);
    }

    #[test]
    fn test_add_content_blank_name_is_invalid_argument() {
        let mut store = store(ValidationMode::Silent);
        for name in ["", "   ", "\t"] {
            let err = store.add_content(name, "content").unwrap_err();
            assert!(matches!(err, SlottyError::InvalidArgument { .. }), "{name:?}: {err:?}");
        }
    }

    #[test]
    fn test_add_content_malformed_name_is_invalid_slot_name() {
        let mut store = store(ValidationMode::Log);
        let err = store.add_content("1bad", "content").unwrap_err();
        assert_eq!(err.slot_name(), Some("1bad"));
        assert!(matches!(err, SlottyError::InvalidSlotName { .. }));
        assert!(store.get_all_content().is_empty());
        assert!(store.get_filled_slots().is_empty());
    }

    #[test]
    fn test_add_then_get_preserves_order_and_duplicates() {
        let mut store = store(ValidationMode::Silent);
        store.add_content("s", "a").unwrap();
        store.add_content("s", "b").unwrap();
        store.add_content("s", "a").unwrap();
        assert_eq!(store.get_content("s").unwrap(), ["a", "b", "a"]);
    }

    #[test]
    fn test_empty_content_is_kept() {
        let mut store = store(ValidationMode::Silent);
        store.add_content("s", "").unwrap();
        assert_eq!(store.get_content("s").unwrap(), [""]);
    }

    #[test]
    fn test_get_content_unknown_slot_is_empty() {
        let store = store(ValidationMode::Throw);
        assert!(store.get_content("never-filled").unwrap().is_empty());
    }

    #[test]
    fn test_get_content_blank_name_is_invalid_argument() {
        let store = store(ValidationMode::Silent);
        assert!(matches!(
            store.get_content(" "),
            Err(SlottyError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_extension_slots_are_stored_separately() {
        let mut store = store(ValidationMode::Silent);
        store.add_content("header", "main").unwrap();
        store.add_content("header:before", "before").unwrap();
        assert_eq!(store.get_content("header").unwrap(), ["main"]);
        assert_eq!(store.get_content("header:before").unwrap(), ["before"]);
        assert!(store.get_content("header:after").unwrap().is_empty());
    }

    #[test]
    fn test_silent_mode_does_not_track() {
        let mut store = store(ValidationMode::Silent);
        store.add_content("x", "c").unwrap();
        store.register_slot_defined("y").unwrap();

        assert!(store.get_filled_slots().is_empty());
        assert!(store.get_defined_slots().is_empty());
        assert_eq!(store.get_content("x").unwrap(), ["c"]);
    }

    #[test]
    fn test_tracking_modes_record_fills_and_definitions() {
        for mode in [ValidationMode::Log, ValidationMode::Throw] {
            let mut store = store(mode);
            store.add_content("x", "c").unwrap();
            store.register_slot_defined("y").unwrap();

            assert!(store.get_filled_slots().contains("x"), "{mode}");
            assert!(store.get_defined_slots().contains("y"), "{mode}");
        }
    }

    #[test]
    fn test_register_slot_defined_validates_name_in_every_mode() {
        for mode in [ValidationMode::Silent, ValidationMode::Log, ValidationMode::Throw] {
            let mut store = store(mode);
            assert!(matches!(
                store.register_slot_defined("h:mid"),
                Err(SlottyError::InvalidSlotName { .. })
            ));
            assert!(matches!(
                store.register_slot_defined(""),
                Err(SlottyError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_slot_sets_are_stable_between_reads() {
        let mut store = store(ValidationMode::Log);
        store.add_content("a", "1").unwrap();
        store.register_slot_defined("b").unwrap();

        let defined = store.get_defined_slots().clone();
        let filled = store.get_filled_slots().clone();
        assert_eq!(&defined, store.get_defined_slots());
        assert_eq!(&filled, store.get_filled_slots());
    }

    #[test]
    fn test_orphan_fill_throws_in_throw_mode() {
        let mut store = store(ValidationMode::Throw);
        store.add_content("header", "content").unwrap();

        let err = store.validate_slot_usage().unwrap_err();
        assert!(matches!(err, SlottyError::SlotNotFound { .. }));
        assert_eq!(err.slot_name(), Some("header"));
        assert!(err.to_string().contains("'header'"));
    }

    #[test]
    fn test_orphan_fill_is_tolerated_in_log_and_silent_modes() {
        for mode in [ValidationMode::Log, ValidationMode::Silent] {
            let mut store = store(mode);
            store.add_content("header", "content").unwrap();
            assert!(store.validate_slot_usage().is_ok(), "{mode}");
        }
    }

    #[test]
    fn test_matched_fill_never_fails() {
        for mode in [ValidationMode::Silent, ValidationMode::Log, ValidationMode::Throw] {
            let mut store = store(mode);
            store.register_slot_defined("s").unwrap();
            store.add_content("s", "v").unwrap();
            assert!(store.validate_slot_usage().is_ok(), "{mode}");
        }
    }

    #[test]
    fn test_definition_after_fill_is_not_orphaned() {
        let mut store = store(ValidationMode::Throw);
        store.add_content("late", "v").unwrap();
        store.register_slot_defined("late").unwrap();
        assert!(store.validate_slot_usage().is_ok());
    }

    #[test]
    fn test_validate_on_untouched_store() {
        let mut store = store(ValidationMode::Throw);
        assert!(store.validate_slot_usage().is_ok());
    }
}
