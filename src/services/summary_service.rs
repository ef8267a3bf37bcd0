//! Read-only aggregate reporting over a ledger.

use rust_decimal::Decimal;

use crate::currency::format_amount;
use crate::ledger::{AggregateSnapshot, Ledger};

/// Exposes derived totals in the shapes the presentation layer consumes.
pub struct SummaryService;

impl SummaryService {
    /// Point-in-time copy of the running totals and category sums.
    pub fn aggregates(ledger: &Ledger) -> AggregateSnapshot {
        ledger.aggregates()
    }

    /// Current balance formatted with two decimal places.
    pub fn balance_display(ledger: &Ledger) -> String {
        format_amount(ledger.balance())
    }

    /// Session gain and spend counters formatted for display.
    pub fn session_display(ledger: &Ledger) -> (String, String) {
        (
            format_amount(ledger.monthly_gain()),
            format_amount(ledger.monthly_spend()),
        )
    }

    /// Category labels and amounts in key order, ready for chart rendering.
    /// Color assignment stays with the chart layer.
    pub fn category_breakdown(ledger: &Ledger) -> Vec<(String, Decimal)> {
        ledger
            .category_totals()
            .iter()
            .map(|(tag, total)| (tag.clone(), *total))
            .collect()
    }
}
