//! Error handling for Slotty
//!
//! This module provides the strongly-typed error enum used by every slot
//! operation, plus the user-facing wrapper the CLI uses to print errors with
//! suggestions.
//!
//! # Architecture
//!
//! - [`SlottyError`] - Enumerated error kinds for all slot and rendering failures
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! # Error Categories
//!
//! - **Caller bugs**: [`SlottyError::InvalidArgument`], [`SlottyError::InvalidSlotName`]
//! - **Reconciliation**: [`SlottyError::SlotNotFound`] (only raised in `throw` mode)
//! - **Host misuse**: [`SlottyError::RequestScopeUnavailable`]
//! - **Surroundings**: [`SlottyError::ConfigError`], [`SlottyError::TemplateError`],
//!   [`SlottyError::Other`]
//!
//! None of these are transient, so nothing in the crate retries.
//!
//! # Examples
//!
//! ```rust,no_run
//! use slotty::core::{SlottyError, user_friendly_error};
//!
//! let error = SlottyError::InvalidSlotName {
//!     slot_name: "1header".to_string(),
//!     message: "Invalid slot name '1header'".to_string(),
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for slot operations.
///
/// Every variant only carries owned strings, so the error is cheap to clone
/// when it has to cross the Tera filter boundary and be recovered on the
/// other side.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlottyError {
    /// A required argument was missing or blank.
    ///
    /// Raised synchronously at the call site. Always a caller bug.
    #[error("{message}")]
    InvalidArgument {
        /// Name of the offending argument (e.g. `slot_name`, `content`)
        argument: String,
        /// Human-readable description
        message: String,
    },

    /// A slot name does not match the naming grammar.
    ///
    /// Slot names must start with a letter, continue with letters, digits,
    /// hyphens or underscores, and may end with a single `:before` or
    /// `:after` modifier.
    #[error("{message}")]
    InvalidSlotName {
        /// The rejected slot name
        slot_name: String,
        /// Human-readable description
        message: String,
    },

    /// Content was filled into a slot that was never defined during the request.
    ///
    /// Only produced by the end-of-request validation when the validation
    /// mode is `throw`. `slot_name` is the first orphaned fill; `message`
    /// lists all of them.
    #[error("{message}")]
    SlotNotFound {
        /// First orphaned slot name
        slot_name: String,
        /// Summary of every orphaned fill
        message: String,
    },

    /// The per-request slot scope was used after its request ended.
    #[error("Slot store is not available. Slot operations can only be used within a render request.")]
    RequestScopeUnavailable,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Template rendering failed for a reason unrelated to slots
    #[error("Template error: {message}")]
    TemplateError {
        /// Formatted Tera error chain
        message: String,
    },

    /// Anything else, e.g. bad CLI input or an output file that cannot be written
    #[error("{message}")]
    Other {
        /// Error message with its cause chain
        message: String,
    },
}

impl SlottyError {
    /// Shorthand for [`SlottyError::InvalidArgument`].
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Builds the standard [`SlottyError::InvalidSlotName`] for `slot_name`.
    pub fn invalid_slot_name(slot_name: impl Into<String>) -> Self {
        let slot_name = slot_name.into();
        let message = format!(
            "Invalid slot name '{slot_name}'. Slot names must start with a letter and contain only letters, numbers, hyphens, and underscores. Optional modifiers :before and :after are supported."
        );
        Self::InvalidSlotName {
            slot_name,
            message,
        }
    }

    /// Name of the slot the error refers to, if any.
    #[must_use]
    pub fn slot_name(&self) -> Option<&str> {
        match self {
            Self::InvalidSlotName {
                slot_name,
                ..
            }
            | Self::SlotNotFound {
                slot_name,
                ..
            } => Some(slot_name),
            _ => None,
        }
    }
}

/// Result alias for slot operations.
pub type Result<T, E = SlottyError> = std::result::Result<T, E>;

/// Error context wrapper that provides user-friendly error information.
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// ```rust,no_run
/// use slotty::core::{ErrorContext, SlottyError};
///
/// let context = ErrorContext::new(SlottyError::RequestScopeUnavailable)
///     .with_suggestion("Create a RequestScope for each render")
///     .with_details("Slot state lives exactly as long as one request");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SlottyError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: SlottyError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Slot errors get tailored suggestions. TOML errors only come from loading
/// options, so they become [`SlottyError::ConfigError`]; config file read
/// failures already arrive as one. Anything else becomes
/// [`SlottyError::Other`] with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(slotty_error) = error.downcast_ref::<SlottyError>() {
        return create_error_context(slotty_error.clone());
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(SlottyError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your slotty configuration file")
        .with_details("Valid keys are 'validation_mode' (silent, log, throw) and 'dev_tools_injection' (auto, always, never)");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    let ctx = ErrorContext::new(SlottyError::Other {
        message,
    });

    match error.downcast_ref::<std::io::Error>().map(std::io::Error::kind) {
        Some(std::io::ErrorKind::NotFound) => ctx
            .with_suggestion("Check that the file or directory exists and the path is correct"),
        Some(std::io::ErrorKind::PermissionDenied) => {
            ctx.with_suggestion("Check the permissions of the file or directory")
        }
        _ => ctx,
    }
}

fn create_error_context(error: SlottyError) -> ErrorContext {
    match &error {
        SlottyError::InvalidSlotName { slot_name, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Rename '{slot_name}' so it starts with a letter and only uses letters, digits, '-' or '_', optionally followed by ':before' or ':after'"
            ))
            .with_details("Slot names are validated on every fill and every slot, regardless of the validation mode"),

        SlottyError::SlotNotFound { slot_name, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Add a slot named '{slot_name}' to the layout, or fix the name used by the fill"
            ))
            .with_details("A fill was rendered for a slot that never appeared during the request. This usually means a typo or a removed placeholder"),

        SlottyError::RequestScopeUnavailable => ErrorContext::new(error.clone())
            .with_suggestion("Keep the RequestScope alive until rendering has finished")
            .with_details("Slot content is stored per request and discarded when the request scope is dropped"),

        SlottyError::InvalidArgument { argument, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Provide a non-blank '{argument}'")),

        _ => ErrorContext::new(error),
    }
}
