// Example subjects. Writing an observable attribute stores the value and
// then broadcasts through the subject's change manager.

use std::fmt;
use std::sync::Arc;

use crate::change_manager::ChangeManager;
use crate::error::ChangeError;
use crate::subject::{Subject, SubjectId};

/// A named integer value.
pub struct Data {
    id: SubjectId,
    name: String,
    value: i64,
    manager: Arc<ChangeManager<Data>>,
}

impl Data {
    pub fn new(name: impl Into<String>, manager: Arc<ChangeManager<Data>>) -> Self {
        Self {
            id: SubjectId::next(),
            name: name.into(),
            value: 0,
            manager,
        }
    }

    pub fn data(&self) -> i64 {
        self.value
    }

    /// Stores `value` and notifies every observer of this subject.
    ///
    /// The value is kept even when an observer fails; the failure is
    /// returned to the caller.
    pub fn set_data(&mut self, value: i64) -> Result<(), ChangeError> {
        self.value = value;
        self.notify()
    }
}

impl Subject for Data {
    fn subject_id(&self) -> SubjectId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn change_manager(&self) -> &Arc<ChangeManager<Self>> {
        &self.manager
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

/// A named message, reported through its own change manager.
pub struct Alarm {
    id: SubjectId,
    name: String,
    msg: String,
    manager: Arc<ChangeManager<Alarm>>,
}

impl Alarm {
    pub fn new(name: impl Into<String>, manager: Arc<ChangeManager<Alarm>>) -> Self {
        Self {
            id: SubjectId::next(),
            name: name.into(),
            msg: String::new(),
            manager,
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn set_msg(&mut self, msg: impl Into<String>) -> Result<(), ChangeError> {
        self.msg = msg.into();
        self.notify()
    }
}

impl Subject for Alarm {
    fn subject_id(&self) -> SubjectId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn change_manager(&self) -> &Arc<ChangeManager<Self>> {
        &self.manager
    }
}

impl fmt::Debug for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alarm")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("msg", &self.msg)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change_manager::FanOutPolicy;
    use crate::observer::{Observer, ObserverError};
    use crate::viewers::{AlarmPrinter, DecimalViewer, HexViewer, Transcript};

    struct Unplugged;

    impl Observer<Data> for Unplugged {
        fn name(&self) -> &str {
            "Unplugged"
        }

        fn update(&self, _subject: &Data) -> Result<(), ObserverError> {
            Err(ObserverError::new("Unplugged", "no display attached"))
        }
    }

    #[test]
    fn test_new_data_starts_at_zero() {
        let data = Data::new("Data 1", Arc::new(ChangeManager::new()));
        assert_eq!(data.data(), 0);
        assert_eq!(data.name(), "Data 1");
    }

    #[test]
    fn test_equal_data_are_distinct_subjects() {
        let manager = Arc::new(ChangeManager::new());
        let a = Data::new("same", Arc::clone(&manager));
        let b = Data::new("same", Arc::clone(&manager));
        assert_ne!(a.subject_id(), b.subject_id());
    }

    #[test]
    fn test_setting_data_notifies_in_order() {
        let manager = Arc::new(ChangeManager::new());
        let transcript = Transcript::new();
        let mut data = Data::new("Data 1", Arc::clone(&manager));

        let hex: Arc<dyn Observer<Data>> = Arc::new(HexViewer::new(transcript.clone()));
        let decimal: Arc<dyn Observer<Data>> = Arc::new(DecimalViewer::new(transcript.clone()));
        data.attach(Arc::clone(&hex));
        data.attach(Arc::clone(&decimal));

        data.set_data(10).unwrap();
        assert_eq!(
            transcript.take(),
            vec![
                "HexViewer: Subject Data 1 has data 0xa",
                "DecimalViewer: Subject Data 1 has data 10",
            ]
        );

        data.detach(&hex).unwrap();
        data.set_data(3).unwrap();
        assert_eq!(
            transcript.take(),
            vec!["DecimalViewer: Subject Data 1 has data 3"]
        );
    }

    #[test]
    fn test_setting_data_without_observers() {
        let mut data = Data::new("lonely", Arc::new(ChangeManager::new()));
        assert!(data.set_data(99).is_ok());
        assert_eq!(data.data(), 99);
    }

    #[test]
    fn test_value_kept_when_observer_fails() {
        let manager = Arc::new(ChangeManager::new());
        let transcript = Transcript::new();
        let mut data = Data::new("Data 1", Arc::clone(&manager));

        data.attach(Arc::new(Unplugged));
        data.attach(Arc::new(DecimalViewer::new(transcript.clone())));

        let err = data.set_data(7).unwrap_err();
        assert_eq!(
            err,
            ChangeError::Observer(ObserverError::new("Unplugged", "no display attached"))
        );
        assert_eq!(data.data(), 7);
        assert!(transcript.lines().is_empty());
    }

    #[test]
    fn test_isolated_failure_still_reaches_later_viewers() {
        let manager = Arc::new(ChangeManager::with_policy(FanOutPolicy::Isolate));
        let transcript = Transcript::new();
        let mut data = Data::new("Data 1", Arc::clone(&manager));

        data.attach(Arc::new(Unplugged));
        data.attach(Arc::new(DecimalViewer::new(transcript.clone())));

        assert!(matches!(
            data.set_data(7),
            Err(ChangeError::ObserversFailed { .. })
        ));
        assert_eq!(
            transcript.take(),
            vec!["DecimalViewer: Subject Data 1 has data 7"]
        );
    }

    #[test]
    fn test_alarm_notifies_on_message() {
        let manager = Arc::new(ChangeManager::new());
        let transcript = Transcript::new();
        let mut alarm = Alarm::new("Alarm 1", Arc::clone(&manager));

        alarm.attach(Arc::new(AlarmPrinter::new(transcript.clone())));
        alarm.set_msg("smoke detected").unwrap();

        assert_eq!(alarm.msg(), "smoke detected");
        assert_eq!(
            transcript.take(),
            vec!["AlarmPrinter: Subject Alarm 1 has message smoke detected"]
        );
    }
}
