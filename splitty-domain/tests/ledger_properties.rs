use proptest::prelude::*;
use splitty_domain::{DebtSimplifier, LedgerBuilder, Money, NetLedger, Participant, Transaction};

const NAMES: [&str; 6] = ["Ann", "Bob", "Cid", "Dee", "Eve", "Fay"];

fn build_transactions(
    member_count: usize,
    amounts: &[i64],
    payer_indexes: &[usize],
    payee_masks: &[u8],
) -> Vec<Transaction> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, &cents)| {
            let payer = NAMES[payer_indexes.get(idx).copied().unwrap_or(0) % member_count];
            let mask = payee_masks.get(idx).copied().unwrap_or(1);
            let mut payees: Vec<Participant> = (0..member_count)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| Participant::from(NAMES[bit]))
                .collect();
            if payees.is_empty() {
                payees.push(Participant::from(payer));
            }
            Transaction::try_new(
                format!("expense {idx}"),
                Money::from_cents(cents),
                Participant::from(payer),
                payees,
            )
            .expect("generated transaction is valid")
        })
        .collect()
}

fn members(member_count: usize) -> Vec<Participant> {
    NAMES[..member_count].iter().copied().map(Participant::from).collect()
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        payee_masks in prop::collection::vec(any::<u8>(), 0..=30),
    ) {
        let transactions = build_transactions(member_count, &amounts, &payer_indexes, &payee_masks);
        let ledger = LedgerBuilder::build(members(member_count), &transactions)
            .expect("ledger builds");

        prop_assert!(ledger.total().is_zero());
        prop_assert_eq!(ledger.len(), member_count);
    }

    #[test]
    fn settlements_reproduce_ledger(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=1_000_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        payee_masks in prop::collection::vec(any::<u8>(), 0..=30),
    ) {
        let transactions = build_transactions(member_count, &amounts, &payer_indexes, &payee_masks);
        let ledger = LedgerBuilder::build(members(member_count), &transactions)
            .expect("ledger builds");

        let settlements = DebtSimplifier::default()
            .simplify(&ledger)
            .expect("balanced ledger simplifies");

        for settlement in &settlements {
            prop_assert!(settlement.amount.is_positive());
            prop_assert_ne!(&settlement.from, &settlement.to);
        }
        prop_assert_eq!(
            NetLedger::from_settlements(members(member_count), &settlements),
            ledger.clone()
        );
        prop_assert!(settlements.len() <= ledger.nonzero_count().saturating_sub(1));
    }

    #[test]
    fn simplification_is_deterministic(
        balances in prop::collection::vec(-50_000i64..=50_000, 1..=5),
    ) {
        let mut entries: Vec<(Participant, Money)> = balances
            .iter()
            .enumerate()
            .map(|(idx, &cents)| (Participant::from(NAMES[idx]), Money::from_cents(cents)))
            .collect();
        let sum: i64 = balances.iter().sum();
        entries.push((Participant::from(NAMES[5]), Money::from_cents(-sum)));
        let ledger: NetLedger = entries.into_iter().collect();

        let simplifier = DebtSimplifier::default();
        let first = simplifier.simplify(&ledger).expect("balanced");
        let second = simplifier.simplify(&ledger.clone()).expect("balanced");

        prop_assert_eq!(first, second);
    }
}
