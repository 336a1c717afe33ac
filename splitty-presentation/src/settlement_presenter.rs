use splitty_application::SettlementReport;
use splitty_domain::{NetLedger, Settlement};
use std::fmt::Write as _;

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Renders the report as printed by the CLI: optionally the balance
    /// listing, then one line per settlement.
    pub fn render(report: &SettlementReport, show_balances: bool) -> String {
        let mut out = String::with_capacity(64 * (report.settlements.len() + 1));
        if show_balances {
            out.push_str(&Self::render_balances(&report.ledger));
        }
        out.push_str(&Self::render_settlements(&report.settlements));
        out
    }

    /// `"<from> owes <to> $ <amount>"`, one per line, in the given order.
    pub fn render_settlements(settlements: &[Settlement]) -> String {
        let mut out = String::with_capacity(32 * settlements.len());
        for settlement in settlements {
            let _ = writeln!(
                out,
                "{} owes {} $ {}",
                settlement.from, settlement.to, settlement.amount
            );
        }
        out
    }

    pub fn render_balances(ledger: &NetLedger) -> String {
        let mut out = String::with_capacity(24 * ledger.len());
        for (participant, balance) in ledger {
            let sign = if balance.is_negative() { "" } else { "+" };
            let _ = writeln!(out, "{participant}: {sign}{balance}");
        }
        out
    }
}
