use splitty_domain::{DebtSimplifier, LedgerBuilder, LedgerError, NetLedger, Transaction};

use crate::{
    config::SplitConfig,
    error::{LoadError, SplittyError},
    loader::TransactionLoader,
    model::{RawRecord, SettlementReport},
    ports::RecordSource,
};

/// Runs the whole pipeline: records -> transactions -> ledger -> settlements.
#[derive(Clone, Copy)]
pub struct SettlementProcessor<'a> {
    config: &'a SplitConfig,
    simplifier: DebtSimplifier,
}

impl<'a> SettlementProcessor<'a> {
    pub fn new(config: &'a SplitConfig) -> Self {
        Self {
            config,
            simplifier: DebtSimplifier::default(),
        }
    }

    pub fn with_simplifier(config: &'a SplitConfig, simplifier: DebtSimplifier) -> Self {
        Self { config, simplifier }
    }

    pub fn config(&self) -> &'a SplitConfig {
        self.config
    }

    pub fn load_transactions(&self, records: &[RawRecord]) -> Result<Vec<Transaction>, LoadError> {
        TransactionLoader::new(self.config).load_all(records)
    }

    pub fn build_ledger(&self, transactions: &[Transaction]) -> Result<NetLedger, LedgerError> {
        LedgerBuilder::build(self.config.participants(), transactions)
    }

    pub fn process(&self, records: &[RawRecord]) -> Result<SettlementReport, SplittyError> {
        let transactions = self.load_transactions(records).inspect_err(|err| {
            tracing::debug!(row = err.row(), "rejected input record: {err}");
        })?;
        tracing::debug!(
            records = records.len(),
            transactions = transactions.len(),
            "loaded transactions"
        );

        let ledger = self.build_ledger(&transactions)?;
        let settlements = self.simplifier.simplify(&ledger)?;

        Ok(SettlementReport {
            transaction_count: transactions.len(),
            ledger,
            settlements,
        })
    }

    pub fn run<S>(&self, source: &S) -> Result<SettlementReport, SplittyError>
    where
        S: RecordSource + ?Sized,
    {
        let records = source.read_records().map_err(SplittyError::source_error)?;
        self.process(&records)
    }
}
