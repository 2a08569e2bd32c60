//! `stridelog` - A local, offline walk-logging tracker
//!
//! This library provides the core functionality for recording walks (date,
//! distance, duration, mood), persisting them in a local `SQLite` database,
//! and deriving aggregate statistics for display.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod format;
pub mod logging;
pub mod store;
pub mod summary;
pub mod walk;

pub use config::Config;
pub use draft::{AddWalkFlow, DraftWalk, FlowState};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use store::Store;
pub use summary::Summary;
pub use walk::{Mood, Walk};
