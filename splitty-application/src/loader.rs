use rust_decimal::Decimal;
use splitty_domain::{Money, Participant, Transaction, TransactionError};
use std::str::FromStr;

use crate::{
    config::{AMOUNT_COLUMN, NOTE_COLUMN, PAYER_COLUMN, SplitConfig},
    error::{LoadError, MalformedReason, ParticipantRole},
    model::RawRecord,
};

/// Turns raw records into validated [`Transaction`]s.
#[derive(Clone, Copy)]
pub struct TransactionLoader<'a> {
    config: &'a SplitConfig,
}

impl<'a> TransactionLoader<'a> {
    pub fn new(config: &'a SplitConfig) -> Self {
        Self { config }
    }

    /// Loads every record, stopping at the first invalid one.
    pub fn load_all<'r, I>(&self, records: I) -> Result<Vec<Transaction>, LoadError>
    where
        I: IntoIterator<Item = &'r RawRecord>,
    {
        records.into_iter().map(|record| self.load(record)).collect()
    }

    pub fn load(&self, record: &RawRecord) -> Result<Transaction, LoadError> {
        let row = record.row;
        let malformed = |reason| LoadError::MalformedRecord { row, reason };

        let required = self.config.required_fields();
        if record.fields.len() < required {
            return Err(malformed(MalformedReason::MissingFields {
                expected: required,
                found: record.fields.len(),
            }));
        }

        // Field presence is checked above.
        let field = |index: usize| record.field(index).unwrap_or_default();

        let amount = parse_amount(field(AMOUNT_COLUMN)).map_err(malformed)?;

        let payee_field = field(self.config.split_column_index());
        let payee_names = split_payees(payee_field).map_err(malformed)?;

        let payer_field = field(PAYER_COLUMN);
        let payer_name = payer_field.trim();
        if payer_name.is_empty() {
            return Err(malformed(MalformedReason::MissingPayer));
        }
        let payer = self.config.payer(payer_name).cloned().ok_or_else(|| {
            LoadError::UnknownParticipant {
                row,
                role: ParticipantRole::Payer,
                name: payer_name.to_owned(),
                field: payer_field.to_owned(),
            }
        })?;

        let payees = payee_names
            .into_iter()
            .map(|name| {
                self.config
                    .payee(name)
                    .cloned()
                    .ok_or_else(|| LoadError::UnknownParticipant {
                        row,
                        role: ParticipantRole::Payee,
                        name: name.to_owned(),
                        field: payee_field.to_owned(),
                    })
            })
            .collect::<Result<Vec<Participant>, _>>()?;

        Transaction::try_new(field(NOTE_COLUMN), amount, payer, payees).map_err(|err| {
            let raw = field(AMOUNT_COLUMN).to_owned();
            malformed(match err {
                TransactionError::NegativeAmount(_) => MalformedReason::NegativeAmount { raw },
                TransactionError::ExcessPrecision(_) => MalformedReason::ExcessPrecision { raw },
                TransactionError::EmptyPayees => MalformedReason::EmptyPayees,
            })
        })
    }
}

fn parse_amount(raw: &str) -> Result<Money, MalformedReason> {
    let invalid = || MalformedReason::InvalidAmount {
        raw: raw.to_owned(),
    };
    // `Decimal` accepts digit separators such as "1_000".
    if raw.contains('_') {
        return Err(invalid());
    }
    let amount = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    let amount = Money::from_decimal(amount);
    if amount.is_negative() {
        return Err(MalformedReason::NegativeAmount {
            raw: raw.to_owned(),
        });
    }
    if amount.has_sub_cent_digits() {
        return Err(MalformedReason::ExcessPrecision {
            raw: raw.to_owned(),
        });
    }
    if amount.to_cents().is_none() {
        return Err(MalformedReason::AmountTooLarge {
            raw: raw.to_owned(),
        });
    }
    Ok(amount)
}

/// Splits a comma-separated payee list into trimmed names.
fn split_payees(raw: &str) -> Result<Vec<&str>, MalformedReason> {
    let names: Vec<&str> = raw.split(',').map(str::trim).collect();
    if names.iter().all(|name| name.is_empty()) {
        return Err(MalformedReason::EmptyPayees);
    }
    if names.iter().any(|name| name.is_empty()) {
        return Err(MalformedReason::EmptyPayeeName {
            raw: raw.to_owned(),
        });
    }
    Ok(names)
}
