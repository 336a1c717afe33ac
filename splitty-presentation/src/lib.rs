#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod settlement_presenter;

pub use error_presenter::{format_error, format_infra_error};
pub use settlement_presenter::SettlementPresenter;
