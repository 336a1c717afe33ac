#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{LedgerError, SimplifyError, TransactionError};
pub use model::{
    CURRENCY_SCALE, Money, NetLedger, Participant, PayeeSet, Settlement, Transaction,
};
pub use services::{DebtSimplifier, LedgerBuilder, SETTLEMENT_EPSILON};
