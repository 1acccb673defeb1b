//! Scoped correlation context
//!
//! Carries per-call correlation fields (correlation id, event tag, user id)
//! in a thread-local map so downstream log consumers can attach them to
//! emitted lines. A `CorrelationScope` guard owns the fields for the
//! duration of one recording call and clears them on drop, so the fields
//! never outlive the call that set them and concurrent calls on other
//! threads never observe each other's context.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

thread_local! {
    static CONTEXT: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Field name for the per-call correlation id
pub const CORRELATION_ID: &str = "correlationId";

/// RAII guard over the current thread's correlation fields
///
/// Entering a scope replaces the thread's fields and generates a fresh
/// `corr-<uuid>` correlation id. Dropping the guard clears the map on
/// every exit path, unwinding included. Scopes do not nest: one recording
/// call owns the whole map for its duration.
#[must_use = "correlation fields are cleared when the scope is dropped"]
pub struct CorrelationScope {
    // Must drop on the thread whose map it owns.
    _not_send: PhantomData<*const ()>,
}

impl CorrelationScope {
    /// Open a scope carrying the given fields plus a fresh correlation id
    pub fn enter<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        CONTEXT.with(|ctx| {
            let mut map = ctx.borrow_mut();
            map.clear();
            map.insert(
                CORRELATION_ID.to_string(),
                format!("corr-{}", uuid::Uuid::new_v4()),
            );
            for (key, value) in fields {
                map.insert(key.into(), value.into());
            }
        });

        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for CorrelationScope {
    fn drop(&mut self) {
        CONTEXT.with(|ctx| ctx.borrow_mut().clear());
    }
}

/// Snapshot of the current thread's correlation fields
pub fn current() -> HashMap<String, String> {
    CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Look up a single correlation field on the current thread
pub fn get(key: &str) -> Option<String> {
    CONTEXT.with(|ctx| ctx.borrow().get(key).cloned())
}
