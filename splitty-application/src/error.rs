use splitty_domain::{LedgerError, SimplifyError};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRole {
    Payer,
    Payee,
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantRole::Payer => f.write_str("payer"),
            ParticipantRole::Payee => f.write_str("payee"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },
    #[error("could not convert amount '{raw}' to a number")]
    InvalidAmount { raw: String },
    #[error("amount '{raw}' is negative")]
    NegativeAmount { raw: String },
    #[error("amount '{raw}' has more than two decimal places")]
    ExcessPrecision { raw: String },
    #[error("amount '{raw}' is too large")]
    AmountTooLarge { raw: String },
    #[error("missing payer")]
    MissingPayer,
    #[error("missing \"paid-for\" list")]
    EmptyPayees,
    #[error("empty name in \"paid-for\" list '{raw}'")]
    EmptyPayeeName { raw: String },
}

/// Errors raised while turning a raw record into a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: MalformedReason },
    #[error("unknown {role} '{name}' at row {row} (field: \"{field}\")")]
    UnknownParticipant {
        row: usize,
        role: ParticipantRole,
        name: String,
        field: String,
    },
}

impl LoadError {
    pub fn row(&self) -> usize {
        match self {
            LoadError::MalformedRecord { row, .. } | LoadError::UnknownParticipant { row, .. } => {
                *row
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRecord,
    UnknownParticipant,
    InternalConsistency,
    ImbalancedLedger,
    Source,
}

/// Everything that can abort a settlement run.
#[derive(Debug, Error)]
pub enum SplittyError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("internal consistency error: {0}")]
    InternalConsistency(#[from] LedgerError),
    #[error("internal error: {0}")]
    ImbalancedLedger(#[from] SimplifyError),
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl SplittyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplittyError::Load(LoadError::MalformedRecord { .. }) => ErrorKind::MalformedRecord,
            SplittyError::Load(LoadError::UnknownParticipant { .. }) => {
                ErrorKind::UnknownParticipant
            }
            SplittyError::InternalConsistency(_) => ErrorKind::InternalConsistency,
            SplittyError::ImbalancedLedger(_) => ErrorKind::ImbalancedLedger,
            SplittyError::Source(_) => ErrorKind::Source,
        }
    }

    pub fn source_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SplittyError::Source(Box::new(err))
    }
}
