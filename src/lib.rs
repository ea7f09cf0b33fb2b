//! Slotty - named slots and fills for server-rendered templates.
//!
//! A layout declares *slots*: named placeholders such as `header` or
//! `sidebar`. Pages and partials contribute *fills*: fragments of HTML
//! destined for a slot. Fills and slots may appear in any order within a
//! request; fragments for the same slot accumulate in fill order.
//!
//! # Architecture Overview
//!
//! - [`slot`] - The per-request registry: name validation, content storage,
//!   `:before` / `:after` extensions, orphaned-fill reconciliation
//! - [`request`] - [`request::RequestScope`], which owns one registry per
//!   request and hands out weak handles
//! - [`templating`] - Tera `fill` / `slot` helpers and the page-then-layout
//!   renderer
//! - [`devtools`] - Slot highlighting assets injected into HTML in development
//! - [`config`] - [`config::SlottyOptions`], loaded from TOML and the environment
//! - [`core`] - [`core::SlottyError`] and user-facing error formatting
//! - [`cli`] - The `slotty` command-line interface
//!
//! # Slot Names
//!
//! `^[a-zA-Z][a-zA-Z0-9_-]*(:before|:after)?$`. Invalid names fail every
//! operation immediately, regardless of the validation mode.
//!
//! # Validation Modes
//!
//! | Mode | Orphaned fills |
//! |------|----------------|
//! | `silent` (default) | ignored, no tracking |
//! | `log` | one warning per request |
//! | `throw` | [`core::SlottyError::SlotNotFound`] at end of request |
//!
//! # Example
//!
//! ```rust
//! use slotty::config::{SlottyOptions, ValidationMode};
//! use slotty::request::RequestScope;
//! use slotty::slot::{SlotStore, extended_content};
//!
//! # fn main() -> Result<(), slotty::core::SlottyError> {
//! let scope = RequestScope::new(&SlottyOptions::with_validation_mode(ValidationMode::Throw));
//!
//! scope.with_store(|store| {
//!     store.add_content("header:before", "<nav>")?;
//!     store.add_content("header", "<h1>Hi</h1>")?;
//!     store.register_slot_defined("header")?;
//!     store.register_slot_defined("header:before")?;
//!     assert_eq!(extended_content(&*store, "header")?.concat(), "<nav><h1>Hi</h1>");
//!     Ok(())
//! })?;
//!
//! scope.finish()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod devtools;
pub mod request;
pub mod slot;
pub mod templating;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
