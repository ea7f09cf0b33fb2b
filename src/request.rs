//! Per-request ownership of the slot registry.
//!
//! A [`RequestScope`] owns the [`SlotContentStore`] for exactly one request.
//! Collaborators such as Tera filters get a [`ScopeHandle`], which only holds
//! a weak reference: once the scope is finished or dropped, every handle
//! operation fails with [`SlottyError::RequestScopeUnavailable`] instead of
//! touching stale state.
//!
//! The store sits behind a `Mutex` only because Tera requires filters to be
//! `Send + Sync`. Rendering within one request stays sequential.

use std::sync::{Arc, Mutex, Weak};

use crate::config::SlottyOptions;
use crate::core::{Result, SlottyError};
use crate::slot::{SlotContentStore, SlotStore};

/// Owner of one request's slot state.
#[derive(Debug)]
pub struct RequestScope {
    store: Arc<Mutex<SlotContentStore>>,
}

impl RequestScope {
    /// Start a request with the process-wide options.
    #[must_use]
    pub fn new(options: &SlottyOptions) -> Self {
        Self {
            store: Arc::new(Mutex::new(SlotContentStore::from_options(options))),
        }
    }

    /// A handle collaborators can keep for the duration of the request.
    #[must_use]
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Run `f` against this request's store.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut SlotContentStore) -> Result<T>) -> Result<T> {
        let mut store = self.store.lock().map_err(|_| SlottyError::RequestScopeUnavailable)?;
        f(&mut *store)
    }

    /// End the request: reconcile slot usage and drop the slot state.
    ///
    /// # Errors
    ///
    /// [`SlottyError::SlotNotFound`] when the validation mode is `throw` and a
    /// fill never met its slot.
    pub fn finish(self) -> Result<()> {
        self.with_store(|store| store.validate_slot_usage())
    }
}

/// Weak, cloneable access to a [`RequestScope`]'s store.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    store: Weak<Mutex<SlotContentStore>>,
}

impl ScopeHandle {
    /// Run `f` against the request's store.
    ///
    /// # Errors
    ///
    /// [`SlottyError::RequestScopeUnavailable`] once the request has ended,
    /// otherwise whatever `f` returns.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut SlotContentStore) -> Result<T>) -> Result<T> {
        let store = self.store.upgrade().ok_or(SlottyError::RequestScopeUnavailable)?;
        let mut guard = store.lock().map_err(|_| SlottyError::RequestScopeUnavailable)?;
        f(&mut *guard)
    }

    /// Whether the owning request is still alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.store.strong_count() > 0
    }
}
