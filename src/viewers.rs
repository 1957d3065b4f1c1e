// Observers used by the change-manager demonstration, plus the console sink
// they write their lines to.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::data::{Alarm, Data};
use crate::observer::{Observer, ObserverError};
use crate::subject::Subject;

/// Where observers write their output.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Prints every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every line in memory so it can be compared against an expected
/// transcript.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns the lines written so far and starts a fresh transcript.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Console for Transcript {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

pub struct DecimalViewer {
    console: Arc<dyn Console>,
}

impl DecimalViewer {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    pub fn render(subject: &Data) -> String {
        format!(
            "DecimalViewer: Subject {} has data {}",
            subject.name(),
            subject.data()
        )
    }
}

impl Observer<Data> for DecimalViewer {
    fn name(&self) -> &str {
        "DecimalViewer"
    }

    fn update(&self, subject: &Data) -> Result<(), ObserverError> {
        self.console.write_line(&Self::render(subject));
        Ok(())
    }
}

pub struct HexViewer {
    console: Arc<dyn Console>,
}

impl HexViewer {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    pub fn render(subject: &Data) -> String {
        let value = subject.data();
        // {:x} on a signed integer prints the two's complement bits
        let sign = if value < 0 { "-" } else { "" };
        format!(
            "HexViewer: Subject {} has data {}0x{:x}",
            subject.name(),
            sign,
            value.unsigned_abs()
        )
    }
}

impl Observer<Data> for HexViewer {
    fn name(&self) -> &str {
        "HexViewer"
    }

    fn update(&self, subject: &Data) -> Result<(), ObserverError> {
        self.console.write_line(&Self::render(subject));
        Ok(())
    }
}

pub struct AlarmPrinter {
    console: Arc<dyn Console>,
}

impl AlarmPrinter {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Observer<Alarm> for AlarmPrinter {
    fn name(&self) -> &str {
        "AlarmPrinter"
    }

    fn update(&self, subject: &Alarm) -> Result<(), ObserverError> {
        self.console.write_line(&format!(
            "AlarmPrinter: Subject {} has message {}",
            subject.name(),
            subject.msg()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change_manager::ChangeManager;

    fn data(name: &str, value: i64) -> Data {
        let mut data = Data::new(name, Arc::new(ChangeManager::new()));
        data.set_data(value).unwrap();
        data
    }

    #[test]
    fn test_decimal_render() {
        assert_eq!(
            DecimalViewer::render(&data("Data 1", 10)),
            "DecimalViewer: Subject Data 1 has data 10"
        );
    }

    #[test]
    fn test_hex_render() {
        assert_eq!(
            HexViewer::render(&data("Data 1", 10)),
            "HexViewer: Subject Data 1 has data 0xa"
        );
        assert_eq!(
            HexViewer::render(&data("Data 2", 15)),
            "HexViewer: Subject Data 2 has data 0xf"
        );
        assert_eq!(
            HexViewer::render(&data("Data 2", 0)),
            "HexViewer: Subject Data 2 has data 0x0"
        );
    }

    #[test]
    fn test_hex_render_negative() {
        assert_eq!(
            HexViewer::render(&data("Data 3", -26)),
            "HexViewer: Subject Data 3 has data -0x1a"
        );
        assert_eq!(
            HexViewer::render(&data("Data 3", i64::MIN)),
            "HexViewer: Subject Data 3 has data -0x8000000000000000"
        );
    }

    #[test]
    fn test_transcript_take_resets() {
        let transcript = Transcript::new();
        transcript.write_line("one");
        transcript.write_line("two");

        assert_eq!(transcript.lines(), vec!["one", "two"]);
        assert_eq!(transcript.take(), vec!["one", "two"]);
        assert!(transcript.lines().is_empty());
    }

    #[test]
    fn test_viewer_writes_to_console() {
        let transcript = Transcript::new();
        let viewer = DecimalViewer::new(transcript.clone());

        viewer.update(&data("Data 1", 3)).unwrap();
        assert_eq!(
            transcript.take(),
            vec!["DecimalViewer: Subject Data 1 has data 3"]
        );
    }

    #[test]
    fn test_alarm_printer() {
        let transcript = Transcript::new();
        let printer = AlarmPrinter::new(transcript.clone());
        let mut alarm = Alarm::new("Alarm 1", Arc::new(ChangeManager::new()));
        alarm.set_msg("door open").unwrap();

        printer.update(&alarm).unwrap();
        assert_eq!(
            transcript.take(),
            vec!["AlarmPrinter: Subject Alarm 1 has message door open"]
        );
    }
}
