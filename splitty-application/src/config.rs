use splitty_domain::Participant;
use std::collections::BTreeSet;

pub const NOTE_COLUMN: usize = 0;
pub const AMOUNT_COLUMN: usize = 1;
pub const PAYER_COLUMN: usize = 2;
pub const DEFAULT_SPLIT_COLUMN_INDEX: usize = 3;

/// Immutable run configuration: where the payee list lives in a record and
/// which names may appear as payers and payees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    split_column_index: usize,
    payers: BTreeSet<Participant>,
    payees: BTreeSet<Participant>,
}

impl SplitConfig {
    pub fn new<P, Q>(split_column_index: usize, payers: P, payees: Q) -> Self
    where
        P: IntoIterator<Item = Participant>,
        Q: IntoIterator<Item = Participant>,
    {
        Self {
            split_column_index,
            payers: payers.into_iter().collect(),
            payees: payees.into_iter().collect(),
        }
    }

    pub fn split_column_index(&self) -> usize {
        self.split_column_index
    }

    pub fn payers(&self) -> &BTreeSet<Participant> {
        &self.payers
    }

    pub fn payees(&self) -> &BTreeSet<Participant> {
        &self.payees
    }

    pub fn payer(&self, name: &str) -> Option<&Participant> {
        self.payers.get(name)
    }

    pub fn payee(&self, name: &str) -> Option<&Participant> {
        self.payees.get(name)
    }

    /// Every configured name, payers and payees combined, in name order.
    pub fn participants(&self) -> impl Iterator<Item = Participant> + '_ {
        self.payers.union(&self.payees).cloned()
    }

    /// Minimum number of fields a record needs under this configuration.
    pub fn required_fields(&self) -> usize {
        PAYER_COLUMN.max(self.split_column_index) + 1
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPLIT_COLUMN_INDEX, [], [])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(list: &[&str]) -> Vec<Participant> {
        list.iter().copied().map(Participant::from).collect()
    }

    #[test]
    fn participants_are_the_union_of_payers_and_payees() {
        let config = SplitConfig::new(3, names(&["P", "J"]), names(&["J", "T"]));

        let all: Vec<String> = config.participants().map(|p| p.to_string()).collect();

        assert_eq!(all, vec!["J", "P", "T"]);
    }

    #[rstest]
    #[case::default_layout(3, 4)]
    #[case::payees_before_payer(1, 3)]
    #[case::wide_record(6, 7)]
    fn required_fields_cover_every_used_column(#[case] split: usize, #[case] expected: usize) {
        let config = SplitConfig::new(split, [], []);
        assert_eq!(config.required_fields(), expected);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let config = SplitConfig::new(3, names(&["Bob"]), names(&["Bob"]));

        assert!(config.payer("Bob").is_some());
        assert!(config.payer("bob").is_none());
        assert!(config.payee("Bob").is_some());
    }
}
