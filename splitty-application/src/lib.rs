#![warn(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod ports;
pub mod settlement_processor;

pub use config::{DEFAULT_SPLIT_COLUMN_INDEX, SplitConfig};
pub use error::{ErrorKind, LoadError, MalformedReason, ParticipantRole, SplittyError};
pub use loader::TransactionLoader;
pub use model::{RawRecord, SettlementReport};
pub use ports::RecordSource;
pub use settlement_processor::SettlementProcessor;
