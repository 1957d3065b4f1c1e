use thiserror::Error;

use crate::observer::ObserverError;
use crate::subject::SubjectId;

/// Errors raised by the change manager and the subjects that delegate to it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangeError {
    /// The (subject, observer) pair is not currently registered.
    #[error("invalid subject or observer: {observer} is not registered against subject {subject}")]
    InvalidRegistration { subject: SubjectId, observer: String },

    /// An observer failed and the rest of the fan-out was skipped.
    #[error(transparent)]
    Observer(#[from] ObserverError),

    /// Every observer ran, but some of them failed.
    #[error("{} observer(s) failed while notifying subject {subject}", .failures.len())]
    ObserversFailed {
        subject: SubjectId,
        failures: Vec<ObserverError>,
    },
}

impl ChangeError {
    pub fn invalid_registration(subject: SubjectId, observer: impl Into<String>) -> Self {
        Self::InvalidRegistration {
            subject,
            observer: observer.into(),
        }
    }

    pub fn is_invalid_registration(&self) -> bool {
        matches!(self, Self::InvalidRegistration { .. })
    }
}
