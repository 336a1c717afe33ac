use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::{Money, Participant};

/// Why a transaction could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("amount must not be negative (found {0})")]
    NegativeAmount(Money),
    #[error("amount {0} has more precision than the smallest currency unit")]
    ExcessPrecision(Decimal),
    #[error("payee list is empty")]
    EmptyPayees,
}

/// Invariant violations inside the ledger builder. Validated transactions
/// never trigger these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("participant '{0}' is not registered in the ledger")]
    UnregisteredParticipant(Participant),
    #[error("transaction '{note}' has no payees")]
    EmptyPayeeSet { note: String },
    #[error("amount {0} cannot be represented in cents")]
    AmountOverflow(Money),
    #[error("ledger balances sum to {0} instead of zero")]
    NonZeroTotal(Money),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimplifyError {
    #[error("ledger is imbalanced: {participant} is left with {residual}")]
    ImbalancedLedger {
        participant: Participant,
        residual: Money,
    },
}
