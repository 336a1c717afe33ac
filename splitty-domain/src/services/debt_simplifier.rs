use rust_decimal::Decimal;
use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    error::SimplifyError,
    model::{Money, NetLedger, Participant, Settlement},
};

/// Balances smaller than this (half a cent) are treated as settled.
pub const SETTLEMENT_EPSILON: Money = Money::from_decimal(Decimal::from_parts(5, 0, 0, false, 3));

/// Reduces a [`NetLedger`] to a short list of transfers.
///
/// The largest debtor always pays the largest creditor. Every step clears at
/// least one side, so `n` non-zero balances need at most `n - 1` transfers.
/// Equal magnitudes are ordered by participant name, ascending.
#[derive(Clone, Copy, Debug)]
pub struct DebtSimplifier {
    epsilon: Money,
}

impl Default for DebtSimplifier {
    fn default() -> Self {
        Self {
            epsilon: SETTLEMENT_EPSILON,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Claim {
    magnitude: Money,
    participant: Participant,
}

impl Ord for Claim {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude
            .cmp(&other.magnitude)
            .then_with(|| other.participant.cmp(&self.participant))
    }
}

impl PartialOrd for Claim {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DebtSimplifier {
    pub fn with_epsilon(epsilon: Money) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    pub fn simplify(&self, ledger: &NetLedger) -> Result<Vec<Settlement>, SimplifyError> {
        let mut debtors = BinaryHeap::new();
        let mut creditors = BinaryHeap::new();

        for (participant, balance) in ledger {
            if balance.abs() < self.epsilon || balance.is_zero() {
                continue;
            }
            let claim = Claim {
                magnitude: balance.abs(),
                participant: participant.clone(),
            };
            if balance.is_negative() {
                debtors.push(claim);
            } else {
                creditors.push(claim);
            }
        }

        let mut settlements = Vec::with_capacity(debtors.len() + creditors.len());

        loop {
            let Some(mut debtor) = debtors.pop() else {
                break;
            };
            let Some(mut creditor) = creditors.pop() else {
                debtors.push(debtor);
                break;
            };

            let amount = debtor.magnitude.min(creditor.magnitude);
            settlements.push(Settlement {
                from: debtor.participant.clone(),
                to: creditor.participant.clone(),
                amount,
            });

            debtor.magnitude -= amount;
            creditor.magnitude -= amount;
            if debtor.magnitude >= self.epsilon && !debtor.magnitude.is_zero() {
                debtors.push(debtor);
            }
            if creditor.magnitude >= self.epsilon && !creditor.magnitude.is_zero() {
                creditors.push(creditor);
            }
        }

        if let Some(debtor) = debtors.pop() {
            return Err(imbalanced(debtor.participant, -debtor.magnitude));
        }
        if let Some(creditor) = creditors.pop() {
            return Err(imbalanced(creditor.participant, creditor.magnitude));
        }

        tracing::debug!(
            participants = ledger.len(),
            settlements = settlements.len(),
            "simplified ledger"
        );
        Ok(settlements)
    }
}

fn imbalanced(participant: Participant, residual: Money) -> SimplifyError {
    tracing::error!(%participant, %residual, "unmatched balance after simplification");
    SimplifyError::ImbalancedLedger {
        participant,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn simplifier() -> DebtSimplifier {
        DebtSimplifier::default()
    }

    fn ledger_of(entries: &[(&str, i64)]) -> NetLedger {
        entries
            .iter()
            .map(|&(name, cents)| (Participant::from(name), Money::from_cents(cents)))
            .collect()
    }

    fn settlement(from: &str, to: &str, cents: i64) -> Settlement {
        Settlement {
            from: Participant::from(from),
            to: Participant::from(to),
            amount: Money::from_cents(cents),
        }
    }

    #[rstest]
    #[case::two_people(
        ledger_of(&[("A", 10_000), ("B", -10_000)]),
        vec![settlement("B", "A", 10_000)]
    )]
    #[case::all_zero(ledger_of(&[("A", 0), ("B", 0), ("C", 0)]), vec![])]
    #[case::empty(ledger_of(&[]), vec![])]
    #[case::one_debtor_two_creditors_tie_by_name(
        ledger_of(&[("Mike", -1000), ("Joseph", 500), ("Bob", 500)]),
        vec![settlement("Mike", "Bob", 500), settlement("Mike", "Joseph", 500)]
    )]
    #[case::largest_against_largest(
        ledger_of(&[("A", 8000), ("B", -5000), ("C", -3000)]),
        vec![settlement("B", "A", 5000), settlement("C", "A", 3000)]
    )]
    #[case::trip(
        ledger_of(&[("Joseph", 2517), ("Tim", 992), ("Bob", -3509)]),
        vec![settlement("Bob", "Joseph", 2517), settlement("Bob", "Tim", 992)]
    )]
    #[case::five_people(
        ledger_of(&[("P", 14_319), ("J", -1400), ("T", -4790), ("C", -4792), ("E", -3337)]),
        vec![
            settlement("C", "P", 4792),
            settlement("T", "P", 4790),
            settlement("E", "P", 3337),
            settlement("J", "P", 1400),
        ]
    )]
    #[case::partial_matches(
        ledger_of(&[("A", 700), ("B", 300), ("C", -600), ("D", -400)]),
        vec![
            settlement("C", "A", 600),
            settlement("D", "B", 300),
            settlement("D", "A", 100),
        ]
    )]
    fn simplifies_ledgers(
        simplifier: DebtSimplifier,
        #[case] ledger: NetLedger,
        #[case] expected: Vec<Settlement>,
    ) {
        let settlements = simplifier.simplify(&ledger).expect("balanced ledger");

        assert_eq!(settlements, expected);
        assert_eq!(
            NetLedger::from_settlements(ledger.participants().cloned(), &settlements),
            ledger
        );
    }

    #[rstest]
    fn circular_debts_collapse(simplifier: DebtSimplifier) {
        // A owes B 10, B owes C 10, C owes A 10: everything cancels.
        let cycle = NetLedger::from_settlements(
            ["A", "B", "C"].map(Participant::from),
            &[
                settlement("A", "B", 1000),
                settlement("B", "C", 1000),
                settlement("C", "A", 1000),
            ],
        );
        assert!(simplifier.simplify(&cycle).expect("balanced").is_empty());

        // Uneven cycle nets down to two transfers instead of three.
        let uneven = NetLedger::from_settlements(
            ["A", "B", "C"].map(Participant::from),
            &[
                settlement("A", "B", 1000),
                settlement("B", "C", 2000),
                settlement("C", "A", 500),
            ],
        );
        let settlements = simplifier.simplify(&uneven).expect("balanced");
        assert_eq!(settlements.len(), 2);
        assert_eq!(
            NetLedger::from_settlements(uneven.participants().cloned(), &settlements),
            uneven
        );
    }

    #[rstest]
    #[case::creditor_left(ledger_of(&[("A", 500), ("B", -400)]), "A", 100)]
    #[case::debtor_left(ledger_of(&[("A", 400), ("B", -500)]), "B", -100)]
    #[case::only_creditor(ledger_of(&[("A", 500)]), "A", 500)]
    fn rejects_imbalanced_ledgers(
        simplifier: DebtSimplifier,
        #[case] ledger: NetLedger,
        #[case] participant: &str,
        #[case] residual_cents: i64,
    ) {
        let err = simplifier.simplify(&ledger).expect_err("imbalanced");

        assert_eq!(
            err,
            SimplifyError::ImbalancedLedger {
                participant: Participant::from(participant),
                residual: Money::from_cents(residual_cents),
            }
        );
    }

    #[rstest]
    fn ignores_sub_epsilon_noise(simplifier: DebtSimplifier) {
        let noisy: NetLedger = [
            ("A", Money::from_cents(1000)),
            ("B", Money::from_cents(-1000)),
            ("C", Money::from_decimal(Decimal::new(4, 3))),
        ]
        .into_iter()
        .map(|(name, money)| (Participant::from(name), money))
        .collect();

        let settlements = simplifier.simplify(&noisy).expect("noise is ignored");

        assert_eq!(settlements, vec![settlement("B", "A", 1000)]);
    }

    #[rstest]
    fn drops_sub_epsilon_remainders_left_after_matching(simplifier: DebtSimplifier) {
        let ledger: NetLedger = [
            ("A", Money::from_decimal(Decimal::new(10_004, 3))),
            ("B", Money::from_cents(-1000)),
            ("C", Money::from_decimal(Decimal::new(-4, 3))),
        ]
        .into_iter()
        .map(|(name, money)| (Participant::from(name), money))
        .collect();
        assert!(ledger.total().is_zero());

        let settlements = simplifier.simplify(&ledger).expect("remainder is noise");

        assert_eq!(settlements, vec![settlement("B", "A", 1000)]);
    }

    #[test]
    fn settlement_count_is_bounded_by_nonzero_participants() {
        let ledger = ledger_of(&[
            ("A", 1234),
            ("B", -17),
            ("C", 99),
            ("D", -1000),
            ("E", -316),
            ("F", 0),
        ]);

        let settlements = DebtSimplifier::default().simplify(&ledger).expect("balanced");

        assert!(settlements.len() < ledger.nonzero_count());
        assert!(settlements.iter().all(|s| s.amount.is_positive()));
    }
}
