//! credits-gen library
//!
//! Option handling, subscriber export parsing and the generator pipeline,
//! shared by the `credits-gen` binary and its tests.

pub mod config;
pub mod generate;
pub mod input;

pub use config::{GenerateArgs, InputSource, DEFAULT_OUTPUT};
pub use generate::run;
pub use input::{load_entries, read_entries, LoadedEntries, RecordError, SkippedRecord};
