use std::sync::Arc;

use thiserror::Error;

/// Failure reported by an observer's `update` callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{observer} failed: {message}")]
pub struct ObserverError {
    pub observer: String,
    pub message: String,
}

impl ObserverError {
    pub fn new(observer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            message: message.into(),
        }
    }
}

/// Receives an update whenever a subject of type `S` it is registered
/// against changes.
///
/// `update` may have arbitrary side effects. It runs synchronously inside
/// the subject's mutation, so a callback that never returns blocks the
/// mutation that triggered it.
pub trait Observer<S>: Send + Sync {
    fn name(&self) -> &str;

    fn update(&self, subject: &S) -> Result<(), ObserverError>;
}

/// Identity of a registered observer: the address of its `Arc` allocation.
///
/// The change manager keeps a clone of the `Arc` for as long as the
/// registration exists, so the address cannot be reused while the key is
/// in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ObserverKey(usize);

impl ObserverKey {
    pub(crate) fn of<S>(observer: &Arc<dyn Observer<S>>) -> Self {
        Self(Arc::as_ptr(observer) as *const () as usize)
    }
}
