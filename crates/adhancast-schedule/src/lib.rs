//! # adhancast-schedule
//!
//! Compiles fetched prayer times into tagged crontab entries and installs
//! them with an idempotent replace.
//!
//! ## Architecture
//! ```text
//! compile (PM inference + selection filter)
//!   └── CronEntry × N, command built by CastCommand::render
//! Crontab::replace_all(tag, entries)
//!   ├── drop every existing line bearing the tag
//!   └── append the new lines, submit the table as ONE write
//! ```
//!
//! The single table write (`crontab -`, or one `fs::write` for the file
//! backend) is the only atomicity boundary — there is no rollback and no
//! locking against concurrent runs.

pub mod command;
pub mod compile;
pub mod crontab;
pub mod entry;

pub use command::CastCommand;
pub use compile::{compile, compile_test};
pub use crontab::Crontab;
pub use entry::{CronEntry, OWNER_TAG};
