//! Configuration management for Slotty.
//!
//! Slotty has a single, process-wide configuration resolved once at startup:
//! the [`ValidationMode`] that governs orphaned-fill handling and the
//! [`DevToolsInjection`] policy for the slot highlighting assets.
//!
//! # Modules
//!
//! - `options` - [`SlottyOptions`] and its enums, async loading from TOML
//! - `parser` - Generic TOML parsing utilities with error context

mod options;
mod parser;

pub use options::{
    DevToolsInjection, HostEnvironment, SlottyOptions, VALIDATION_MODE_ENV, ValidationMode,
};
pub use parser::parse_config;
