//! # Pattern Catalog
//!
//! Runnable demonstrations of classic object-oriented design patterns,
//! written the way they come out in Rust.
//!
//! ## Patterns Covered
//!
//! 1. **Observer / Change Manager** - subjects report to a shared registry
//!    that fans each change out to the observers registered against them
//! 2. **Strategy** - the algorithm is a closure passed at construction
//! 3. **Visitor** - closed set of node kinds, handlers tried along each
//!    kind's lineage
//! 4. **Abstract Factory and Singleton** - factory closures and traits, a
//!    lazily built catalogue, and a `OnceLock` accessor
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_observer [settings.toml]
//! cargo run --bin p2_strategy
//! cargo run --bin p3_visitor
//! cargo run --bin p4_creational
//! ```
//!
//! ## Change Manager
//!
//! ```
//! use std::sync::Arc;
//! use pattern_catalog::{ChangeManager, Data, DecimalViewer, HexViewer, Observer, Transcript};
//!
//! let manager = Arc::new(ChangeManager::new());
//! let transcript = Transcript::new();
//! let mut data1 = Data::new("Data 1", Arc::clone(&manager));
//!
//! let decimal: Arc<dyn Observer<Data>> = Arc::new(DecimalViewer::new(transcript.clone()));
//! let hex: Arc<dyn Observer<Data>> = Arc::new(HexViewer::new(transcript.clone()));
//! manager.register(&data1, Arc::clone(&decimal));
//! manager.register(&data1, Arc::clone(&hex));
//!
//! data1.set_data(10)?;
//! assert_eq!(
//!     transcript.take(),
//!     [
//!         "DecimalViewer: Subject Data 1 has data 10",
//!         "HexViewer: Subject Data 1 has data 0xa",
//!     ]
//! );
//!
//! manager.unregister(&data1, &hex)?;
//! data1.set_data(3)?;
//! assert_eq!(transcript.take(), ["DecimalViewer: Subject Data 1 has data 3"]);
//!
//! assert!(manager.unregister(&data1, &hex).is_err());
//! # Ok::<(), pattern_catalog::ChangeError>(())
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums for the library
//! - `indexmap` + `parking_lot` - ordered, lock-protected registration table
//! - `serde` + `toml` - settings file
//! - `log` + `env_logger` - diagnostics
//! - `lazy_static` + `rand` - factory catalogue and random pets

pub mod change_manager;
pub mod config;
pub mod data;
pub mod error;
pub mod factory;
pub mod logging;
pub mod observer;
pub mod singleton;
pub mod strategy;
pub mod subject;
pub mod viewers;
pub mod visitor;

pub use change_manager::{ChangeManager, FanOutPolicy};
pub use config::{ConfigError, Settings};
pub use data::{Alarm, Data};
pub use error::ChangeError;
pub use observer::{Observer, ObserverError};
pub use subject::{Subject, SubjectId};
pub use viewers::{AlarmPrinter, Console, DecimalViewer, HexViewer, Stdout, Transcript};
