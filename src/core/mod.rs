//! Core types shared by every Slotty module.
//!
//! Currently this is the error system: [`SlottyError`] for precise handling in
//! code, and [`ErrorContext`] / [`user_friendly_error`] for presenting errors to
//! CLI users with actionable suggestions.

pub mod error;

pub use error::{ErrorContext, Result, SlottyError, user_friendly_error};
