// Pattern 1: Observer Pattern - Change Manager
// Demonstrates subjects reporting to a shared registry that fans each change
// out to the observers registered against them.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use pattern_catalog::{
    logging, Alarm, AlarmPrinter, ChangeError, ChangeManager, Console, Data, DecimalViewer,
    FanOutPolicy, HexViewer, Observer, ObserverError, Settings, Stdout, Subject,
};

fn settings_from_args() -> Result<Settings> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    Settings::load_or_default(path.as_deref()).context("could not load settings")
}

fn header(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

// ============================================================================
// Example: Several observers, several subjects, one change manager
// ============================================================================

fn change_manager_example(settings: &Settings, console: &Arc<dyn Console>) -> Result<()> {
    let manager = Arc::new(ChangeManager::from_settings(settings));

    let mut data1 = Data::new("Data 1", Arc::clone(&manager));
    let mut data2 = Data::new("Data 2", Arc::clone(&manager));

    let view1: Arc<dyn Observer<Data>> = Arc::new(DecimalViewer::new(Arc::clone(console)));
    let view2: Arc<dyn Observer<Data>> = Arc::new(HexViewer::new(Arc::clone(console)));

    manager.register(&data1, Arc::clone(&view1));
    manager.register(&data1, Arc::clone(&view2));
    manager.register(&data2, Arc::clone(&view2));

    println!("{}", "data1 = 10".dimmed());
    data1.set_data(10)?;
    println!("{}", "data2 = 15".dimmed());
    data2.set_data(15)?;
    println!("{}", "data1 = 3".dimmed());
    data1.set_data(3)?;
    println!("{}", "data2 = 5".dimmed());
    data2.set_data(5)?;

    println!("{}", "unregister HexViewer from both subjects".dimmed());
    manager.unregister(&data1, &view2)?;
    manager.unregister(&data2, &view2)?;
    println!("{}", "data1 = 10".dimmed());
    data1.set_data(10)?;
    println!("{}", "data2 = 15 (nobody listening)".dimmed());
    data2.set_data(15)?;

    println!("{}", "unregister HexViewer from Data 2 again".dimmed());
    match manager.unregister(&data2, &view2) {
        Err(err) => println!("Error: {err}"),
        Ok(()) => println!("Unexpectedly succeeded"),
    }
    Ok(())
}

// ============================================================================
// Example: Subjects attach and detach through their own manager
// ============================================================================

fn attach_detach_example(console: &Arc<dyn Console>) -> Result<()> {
    let manager = Arc::new(ChangeManager::new());
    let mut alarm = Alarm::new("Alarm 1", Arc::clone(&manager));
    let printer: Arc<dyn Observer<Alarm>> = Arc::new(AlarmPrinter::new(Arc::clone(console)));

    alarm.attach(Arc::clone(&printer));
    alarm.attach(Arc::clone(&printer));
    println!("Observers after attaching twice: {}", manager.observer_count(&alarm));

    alarm.set_msg("smoke detected")?;
    alarm.detach(&printer)?;
    println!("Subjects left after detach: {}", manager.len());
    alarm.set_msg("all clear")?;
    Ok(())
}

// ============================================================================
// Example: Observer failure, abort vs isolate
// ============================================================================

struct UnpluggedViewer;

impl Observer<Data> for UnpluggedViewer {
    fn name(&self) -> &str {
        "UnpluggedViewer"
    }

    fn update(&self, _subject: &Data) -> Result<(), ObserverError> {
        Err(ObserverError::new("UnpluggedViewer", "no display attached"))
    }
}

fn failure_policy_example(console: &Arc<dyn Console>) {
    for policy in [FanOutPolicy::Abort, FanOutPolicy::Isolate] {
        println!("Policy: {policy:?}");
        let manager = Arc::new(ChangeManager::with_policy(policy));
        let mut data = Data::new("Data 3", Arc::clone(&manager));

        data.attach(Arc::new(UnpluggedViewer));
        data.attach(Arc::new(DecimalViewer::new(Arc::clone(console))));

        match data.set_data(42) {
            Ok(()) => println!("  all observers succeeded"),
            Err(ChangeError::ObserversFailed { failures, .. }) => {
                for failure in failures {
                    println!("  isolated failure: {failure}");
                }
            }
            Err(err) => println!("  aborted: {err}"),
        }
        println!("  value kept: {}", data.data());
    }
}

fn main() -> Result<()> {
    let settings = settings_from_args()?;
    logging::init(&settings.logging)?;
    colored::control::set_override(settings.output.color);

    let console: Arc<dyn Console> = Arc::new(Stdout);

    println!("Pattern 1: Observer Pattern");
    println!("===========================\n");

    header("Change Manager");
    change_manager_example(&settings, &console)?;
    println!();

    header("Attach / Detach");
    attach_detach_example(&console)?;
    println!();

    header("Observer Failures");
    failure_policy_example(&console);

    Ok(())
}
