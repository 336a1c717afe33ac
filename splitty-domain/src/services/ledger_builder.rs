use std::collections::BTreeMap;

use crate::{
    error::LedgerError,
    model::{Money, NetLedger, Participant, PayeeSet, Transaction},
};

/// Folds transactions into a [`NetLedger`].
///
/// Every participant passed to [`LedgerBuilder::new`] starts at zero. A
/// transaction credits the payer with the full amount and debits each payee
/// an even share; leftover cents go to payees in ascending name order, so the
/// debits always add up to the amount exactly.
pub struct LedgerBuilder {
    ledger: NetLedger,
}

impl LedgerBuilder {
    pub fn new<I>(participants: I) -> Self
    where
        I: IntoIterator<Item = Participant>,
    {
        Self {
            ledger: NetLedger::with_participants(participants),
        }
    }

    pub fn build<'t, P, T>(participants: P, transactions: T) -> Result<NetLedger, LedgerError>
    where
        P: IntoIterator<Item = Participant>,
        T: IntoIterator<Item = &'t Transaction>,
    {
        let mut builder = Self::new(participants);
        for transaction in transactions {
            builder.apply(transaction)?;
        }
        builder.finish()
    }

    /// Applies one transaction. On error the ledger is left untouched.
    pub fn apply(&mut self, transaction: &Transaction) -> Result<(), LedgerError> {
        if transaction.payees().is_empty() {
            return Err(LedgerError::EmptyPayeeSet {
                note: transaction.note().to_owned(),
            });
        }

        let mut deltas = Vec::with_capacity(transaction.payees().len() + 1);
        deltas.push((transaction.payer().clone(), transaction.amount()));
        for (payee, share) in split_evenly(transaction.amount(), transaction.payees())? {
            deltas.push((payee, -share));
        }

        let mut staged: BTreeMap<Participant, Money> = BTreeMap::new();
        for (participant, delta) in deltas {
            let current = match staged.get(&participant) {
                Some(balance) => *balance,
                None => self
                    .ledger
                    .get(&participant)
                    .ok_or_else(|| LedgerError::UnregisteredParticipant(participant.clone()))?,
            };
            let next = current
                .checked_add(delta)
                .ok_or(LedgerError::AmountOverflow(transaction.amount()))?;
            staged.insert(participant, next);
        }

        for (participant, balance) in staged {
            *self.ledger.entry(participant) = balance;
        }

        tracing::trace!(
            note = transaction.note(),
            amount = %transaction.amount(),
            payer = %transaction.payer(),
            payees = transaction.payees().len(),
            "applied transaction"
        );
        Ok(())
    }

    pub fn ledger(&self) -> &NetLedger {
        &self.ledger
    }

    /// Returns the ledger after checking that money was conserved.
    pub fn finish(self) -> Result<NetLedger, LedgerError> {
        let total = self.ledger.total();
        if !total.is_zero() {
            tracing::error!(%total, "ledger balances do not sum to zero");
            return Err(LedgerError::NonZeroTotal(total));
        }
        Ok(self.ledger)
    }
}

/// Splits `amount` across `payees` in whole cents.
///
/// The first `amount % payees.len()` payees (by name) receive one extra cent.
pub fn split_evenly(
    amount: Money,
    payees: &PayeeSet,
) -> Result<Vec<(Participant, Money)>, LedgerError> {
    let cents = amount.to_cents().ok_or(LedgerError::AmountOverflow(amount))?;
    let count = payees.len() as i64;
    let base = cents / count;
    let remainder = (cents % count).unsigned_abs() as usize;

    Ok(payees
        .iter()
        .enumerate()
        .map(|(idx, payee)| {
            let share = if idx < remainder { base + 1 } else { base };
            (payee.clone(), Money::from_cents(share))
        })
        .collect())
}
