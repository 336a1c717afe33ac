use splitty_domain::{NetLedger, Settlement};

/// One input row, already split into fields.
///
/// `row` is the 1-based line number in the source, used in error reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub row: usize,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new<I, S>(row: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            row,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    pub transaction_count: usize,
    pub ledger: NetLedger,
    pub settlements: Vec<Settlement>,
}
