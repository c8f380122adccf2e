//! Core modules for Symtrack

pub mod stats;
pub mod engine;
pub mod entries;
pub mod entry_parser;
pub mod summary;
pub mod api;

pub use engine::{PatternEngine, TriggerTally};
pub use entries::{EntryLog, validate_record, load_entries};
pub use entry_parser::{parse_entry_line, parse_date};
pub use api::{create_router, run_server};
