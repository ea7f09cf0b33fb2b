//! The slot content registry.
//!
//! Fragments *fill* named slots; layouts render *slots*. Both sides talk to
//! the per-request [`SlotContentStore`] and never need to know about each
//! other's render order:
//!
//! ```text
//! fill  -> name check -> add_content -> (tracking) filled set
//! slot  -> name check -> register_slot_defined -> extended_content
//! end   -> validate_slot_usage (orphaned fills: ignore / warn / error)
//! ```
//!
//! # Modules
//!
//! - `name` - slot name grammar
//! - `extensions` - `:before` / `:after` naming and content composition
//! - `store` - the per-request registry and its [`SlotStore`] trait
//! - `validation` - end-of-request reconciliation

pub mod extensions;
pub mod name;
pub mod store;
pub mod validation;

pub use extensions::{
    AFTER_SUFFIX, BEFORE_SUFFIX, after_slot_name, base_slot_name, before_slot_name,
    extended_content, is_extension_slot,
};
pub use name::{SLOT_NAME_PATTERN, is_valid_slot_name, slot_name_regex};
pub use store::{ContentMap, SlotContentStore, SlotSet, SlotStore};
