//! Tera filters and functions bound to one request's slot store.
//!
//! # Fills
//!
//! ```text
//! {% filter fill(name="header") %}
//!     <h1>My Site Header</h1>
//! {% endfilter %}
//!
//! {{ "<li>Extra link</li>" | fill(name="nav:after") }}
//! ```
//!
//! A fill renders nothing in place; its content shows up wherever the
//! matching slot is rendered.
//!
//! # Slots
//!
//! ```text
//! {{ slot(name="header") }}
//!
//! {% filter slot(name="sidebar") %}
//!     <div>Default sidebar content</div>
//! {% endfilter %}
//! ```
//!
//! The filter form uses its body as fallback content when nothing filled the
//! slot.
//!
//! Errors raised here are chained into the `tera::Error` so the renderer can
//! recover the original [`SlottyError`].

use std::collections::HashMap;

use tera::Value;

use super::slots;
use crate::config::HostEnvironment;
use crate::core::SlottyError;
use crate::request::ScopeHandle;

fn name_arg(args: &HashMap<String, Value>) -> String {
    match args.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn content_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn to_tera_error(operation: &str, slot_name: &str, error: SlottyError) -> tera::Error {
    tera::Error::chain(format!("{operation} '{slot_name}' failed"), error)
}

/// The `fill` filter: stores its input in the named slot and outputs nothing.
pub fn create_fill_filter(handle: ScopeHandle) -> impl tera::Filter + 'static {
    move |value: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
        let name = name_arg(args);
        let content = content_value(value);

        handle
            .with_store(|store| slots::fill(store, &name, content.as_deref()))
            .map_err(|e| to_tera_error("fill", &name, e))?;

        Ok(Value::String(String::new()))
    }
}

/// The `slot` filter: renders the named slot, using its input as fallback.
pub fn create_slot_filter(
    handle: ScopeHandle,
    environment: HostEnvironment,
) -> impl tera::Filter + 'static {
    move |value: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
        let name = name_arg(args);
        let fallback = content_value(value);

        let html = handle
            .with_store(|store| slots::render_slot(store, &name, fallback.as_deref(), environment))
            .map_err(|e| to_tera_error("slot", &name, e))?;

        Ok(Value::String(html))
    }
}

/// The `slot` function: renders the named slot without fallback.
pub fn create_slot_function(
    handle: ScopeHandle,
    environment: HostEnvironment,
) -> impl tera::Function + 'static {
    move |args: &HashMap<String, Value>| -> tera::Result<Value> {
        let name = name_arg(args);

        let html = handle
            .with_store(|store| slots::render_slot(store, &name, None, environment))
            .map_err(|e| to_tera_error("slot", &name, e))?;

        Ok(Value::String(html))
    }
}

/// Find the [`SlottyError`] that caused a Tera failure, if any.
#[must_use]
pub fn find_slotty_error(error: &tera::Error) -> Option<SlottyError> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(slotty_error) = err.downcast_ref::<SlottyError>() {
            return Some(slotty_error.clone());
        }
        current = err.source();
    }
    None
}
