// Subject side of the observer pattern: identity plus delegation to a shared
// change manager. Subjects never keep their own observer list.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::change_manager::ChangeManager;
use crate::error::ChangeError;
use crate::observer::Observer;

static NEXT_SUBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a subject. Two subjects holding equal data are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(u64);

impl SubjectId {
    /// Allocates a fresh, never reused id.
    pub fn next() -> Self {
        Self(NEXT_SUBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entity whose state changes are broadcast through a [`ChangeManager`].
///
/// Implementors only provide identity and the manager they report to;
/// `attach`, `detach` and `notify` are delegations to that manager.
pub trait Subject: Sized {
    fn subject_id(&self) -> SubjectId;

    fn name(&self) -> &str;

    fn change_manager(&self) -> &Arc<ChangeManager<Self>>;

    fn attach(&self, observer: Arc<dyn Observer<Self>>) {
        self.change_manager().register(self, observer);
    }

    fn detach(&self, observer: &Arc<dyn Observer<Self>>) -> Result<(), ChangeError> {
        self.change_manager().unregister(self, observer)
    }

    fn notify(&self) -> Result<(), ChangeError> {
        self.change_manager().notify(self)
    }
}
