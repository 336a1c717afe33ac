pub mod debt_simplifier;
pub mod ledger_builder;

pub use debt_simplifier::{DebtSimplifier, SETTLEMENT_EPSILON};
pub use ledger_builder::{LedgerBuilder, split_evenly};
