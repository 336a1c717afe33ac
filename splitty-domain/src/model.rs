use arcstr::ArcStr;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, btree_map},
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use crate::error::TransactionError;

/// Number of fractional digits of the smallest currency unit (cents).
pub const CURRENCY_SCALE: u32 = 2;

const CENTS_PER_UNIT: i64 = 100;

/// A named party that can pay or be paid for.
///
/// Equality, ordering and hashing follow the name, so a participant can be
/// looked up by `&str` in ordered sets and maps.
#[derive(Clone, Debug)]
pub struct Participant(ArcStr);

impl Participant {
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Participant {}

impl PartialOrd for Participant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Participant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Participant {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CURRENCY_SCALE))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Integer number of cents, or `None` when the amount has sub-cent
    /// digits or does not fit in an `i64`.
    pub fn to_cents(self) -> Option<i64> {
        let cents = self.0.checked_mul(Decimal::from(CENTS_PER_UNIT))?;
        if !cents.fract().is_zero() {
            return None;
        }
        cents.to_i64()
    }

    pub fn has_sub_cent_digits(self) -> bool {
        self.0.normalize().scale() > CURRENCY_SCALE
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self
            .0
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CURRENCY_SCALE);
        write!(f, "{rounded}")
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Non-empty set of payees, ordered by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayeeSet(BTreeSet<Participant>);

impl PayeeSet {
    pub fn try_from_iter<I>(payees: I) -> Option<Self>
    where
        I: IntoIterator<Item = Participant>,
    {
        let set: BTreeSet<Participant> = payees.into_iter().collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, participant: &Participant) -> bool {
        self.0.contains(participant)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.0.iter()
    }
}

/// One validated expense: `payer` paid `amount` on behalf of `payees`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    note: String,
    amount: Money,
    payer: Participant,
    payees: PayeeSet,
}

impl Transaction {
    pub fn try_new<I>(
        note: impl Into<String>,
        amount: Money,
        payer: Participant,
        payees: I,
    ) -> Result<Self, TransactionError>
    where
        I: IntoIterator<Item = Participant>,
    {
        if amount.is_negative() {
            return Err(TransactionError::NegativeAmount(amount));
        }
        if amount.has_sub_cent_digits() {
            return Err(TransactionError::ExcessPrecision(amount.as_decimal()));
        }
        let payees = PayeeSet::try_from_iter(payees).ok_or(TransactionError::EmptyPayees)?;

        Ok(Self {
            note: note.into(),
            amount,
            payer,
            payees,
        })
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn payer(&self) -> &Participant {
        &self.payer
    }

    pub fn payees(&self) -> &PayeeSet {
        &self.payees
    }
}

/// A single recommended transfer: `from` pays `amount` to `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

/// Net balance per participant. Positive: is owed money. Negative: owes money.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetLedger {
    balances: BTreeMap<Participant, Money>,
}

impl NetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participants<I>(participants: I) -> Self
    where
        I: IntoIterator<Item = Participant>,
    {
        participants
            .into_iter()
            .map(|participant| (participant, Money::ZERO))
            .collect()
    }

    /// Ledger produced by applying `settlements` on top of zero balances for
    /// `participants`. Payers go down, receivers go up.
    pub fn from_settlements<I>(participants: I, settlements: &[Settlement]) -> Self
    where
        I: IntoIterator<Item = Participant>,
    {
        let mut ledger = Self::with_participants(participants);
        for settlement in settlements {
            *ledger.entry(settlement.from.clone()) -= settlement.amount;
            *ledger.entry(settlement.to.clone()) += settlement.amount;
        }
        ledger
    }

    pub fn get(&self, participant: &Participant) -> Option<Money> {
        self.balances.get(participant).copied()
    }

    pub fn balance_of(&self, name: &str) -> Option<Money> {
        self.get(&Participant::from(name))
    }

    pub fn contains(&self, participant: &Participant) -> bool {
        self.balances.contains_key(participant)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Participant, Money> {
        self.balances.iter()
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.balances.keys()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn total(&self) -> Money {
        self.balances.values().copied().sum()
    }

    pub fn nonzero_count(&self) -> usize {
        self.balances.values().filter(|money| !money.is_zero()).count()
    }

    pub(crate) fn entry(&mut self, participant: Participant) -> &mut Money {
        self.balances.entry(participant).or_insert(Money::ZERO)
    }

    pub fn into_balances(self) -> BTreeMap<Participant, Money> {
        self.balances
    }
}

impl FromIterator<(Participant, Money)> for NetLedger {
    fn from_iter<T: IntoIterator<Item = (Participant, Money)>>(iter: T) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NetLedger {
    type Item = (&'a Participant, &'a Money);
    type IntoIter = btree_map::Iter<'a, Participant, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.balances.iter()
    }
}
