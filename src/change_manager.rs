// Change manager: the registry between subjects and the observers interested
// in them, and the only place a notification fans out from.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, trace, warn};
use parking_lot::Mutex;
use serde::Deserialize;

use crate::config::Settings;
use crate::error::ChangeError;
use crate::observer::{Observer, ObserverError, ObserverKey};
use crate::subject::{Subject, SubjectId};

/// What `notify` does when an observer's callback fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanOutPolicy {
    /// Return the first failure; observers after it are not invoked.
    #[default]
    Abort,
    /// Invoke every observer, then report all failures together.
    Isolate,
}

type ObserverSet<S> = IndexMap<ObserverKey, Arc<dyn Observer<S>>>;

/// Maps each subject to the ordered set of observers registered against it.
///
/// A subject only has an entry while at least one observer is registered;
/// removing the last observer prunes the entry. Observers are notified in
/// registration order, and registering the same pair twice is a no-op.
///
/// The manager is meant to be built once by whatever wires the program
/// together and shared as `Arc<ChangeManager<S>>` with every subject that
/// reports to it.
pub struct ChangeManager<S> {
    policy: FanOutPolicy,
    registrations: Mutex<IndexMap<SubjectId, ObserverSet<S>>>,
}

impl<S> ChangeManager<S> {
    pub fn new() -> Self {
        Self::with_policy(FanOutPolicy::default())
    }

    pub fn with_policy(policy: FanOutPolicy) -> Self {
        Self {
            policy,
            registrations: Mutex::new(IndexMap::new()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_policy(settings.change_manager.fan_out)
    }

    pub fn policy(&self) -> FanOutPolicy {
        self.policy
    }

    /// Subjects that currently have at least one observer, oldest first.
    pub fn subjects(&self) -> Vec<SubjectId> {
        self.registrations.lock().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.registrations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.lock().is_empty()
    }

    /// Drops every registration.
    pub fn clear(&self) {
        let dropped = std::mem::take(&mut *self.registrations.lock());
        debug!("cleared {} subject(s) from change manager", dropped.len());
    }

    fn snapshot(&self, subject: SubjectId) -> Vec<Arc<dyn Observer<S>>> {
        self.registrations
            .lock()
            .get(&subject)
            .map(|observers| observers.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl<S: Subject> ChangeManager<S> {
    /// Registers `observer` against `subject`. Registering an existing pair
    /// changes nothing, including its position in the notification order.
    pub fn register(&self, subject: &S, observer: Arc<dyn Observer<S>>) {
        let key = ObserverKey::of(&observer);
        let mut registrations = self.registrations.lock();
        let observers = registrations.entry(subject.subject_id()).or_default();

        if observers.contains_key(&key) {
            trace!(
                "{} already registered against {} ({})",
                observer.name(),
                subject.name(),
                subject.subject_id()
            );
            return;
        }

        debug!(
            "registered {} against {} ({})",
            observer.name(),
            subject.name(),
            subject.subject_id()
        );
        observers.insert(key, observer);
    }

    /// Removes the pair, pruning the subject's entry once it has no
    /// observers left.
    pub fn unregister(&self, subject: &S, observer: &Arc<dyn Observer<S>>) -> Result<(), ChangeError> {
        let id = subject.subject_id();
        let key = ObserverKey::of(observer);
        let mut registrations = self.registrations.lock();

        let Some(observers) = registrations.get_mut(&id) else {
            return Err(ChangeError::invalid_registration(id, observer.name()));
        };
        if observers.shift_remove(&key).is_none() {
            return Err(ChangeError::invalid_registration(id, observer.name()));
        }
        debug!("unregistered {} from {} ({})", observer.name(), subject.name(), id);

        if observers.is_empty() {
            registrations.shift_remove(&id);
            debug!("{} ({}) has no observers left, pruned", subject.name(), id);
        }
        Ok(())
    }

    /// Calls `update(subject)` on every observer registered against it, in
    /// registration order. A subject without observers is a no-op.
    ///
    /// The observer list is copied before the first callback runs, so a
    /// callback may register or unregister observers; the change applies
    /// from the next notification on.
    pub fn notify(&self, subject: &S) -> Result<(), ChangeError> {
        let id = subject.subject_id();
        let observers = self.snapshot(id);
        if observers.is_empty() {
            trace!("{} ({}) has no observers", subject.name(), id);
            return Ok(());
        }
        trace!(
            "notifying {} observer(s) of {} ({})",
            observers.len(),
            subject.name(),
            id
        );

        match self.policy {
            FanOutPolicy::Abort => {
                for observer in &observers {
                    observer.update(subject)?;
                }
                Ok(())
            }
            FanOutPolicy::Isolate => {
                let failures: Vec<ObserverError> = observers
                    .iter()
                    .filter_map(|observer| observer.update(subject).err())
                    .inspect(|err| warn!("notifying {} ({}): {}", subject.name(), id, err))
                    .collect();

                if failures.is_empty() {
                    Ok(())
                } else {
                    Err(ChangeError::ObserversFailed { subject: id, failures })
                }
            }
        }
    }

    pub fn is_registered(&self, subject: &S, observer: &Arc<dyn Observer<S>>) -> bool {
        self.registrations
            .lock()
            .get(&subject.subject_id())
            .is_some_and(|observers| observers.contains_key(&ObserverKey::of(observer)))
    }

    pub fn observer_count(&self, subject: &S) -> usize {
        self.registrations
            .lock()
            .get(&subject.subject_id())
            .map_or(0, IndexMap::len)
    }
}

impl<S> Default for ChangeManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ChangeManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeManager")
            .field("policy", &self.policy)
            .field("subjects", &self.len())
            .finish()
    }
}
