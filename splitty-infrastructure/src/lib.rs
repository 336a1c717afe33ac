#![warn(clippy::uninlined_format_args)]

pub mod config_file;
pub mod csv_source;
pub mod error;

pub use config_file::{load_config, parse_config};
pub use csv_source::{CsvRecordSource, parse_records};
pub use error::InfraError;
