//! Read-only sort and filter views over the transaction sequence.

use std::cmp::Ordering;

use super::ledger::Ledger;
use super::transaction::{normalize_tags, Transaction, TransactionKind};

/// Column a view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Kind,
    Amount,
    Date,
    Description,
}

/// Restricts a view to one transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// Which of the two filters gates inclusion in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    Tags,
    Kind,
    #[default]
    Both,
}

/// Returns every transaction ordered by `key` without mutating the store.
///
/// The sort is stable: rows with equal keys keep their entry order.
pub fn sorted_view(ledger: &Ledger, key: SortKey) -> Vec<&Transaction> {
    let mut view: Vec<&Transaction> = ledger.transactions().iter().collect();
    view.sort_by(|a, b| compare(a, b, key));
    view
}

fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Kind => text_order(a.kind.label(), b.kind.label()),
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Description => text_order(&a.description, &b.description),
    }
}

// Case-folded comparison with the original casing as tiebreak.
fn text_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Combined filter and sort settings for a table view.
///
/// The tag filter uses AND semantics: a transaction passes only when every
/// requested tag is present (an empty filter passes everything). Surviving
/// rows are ordered by the active sort key, so filtering and sorting always
/// agree with what the table shows.
#[derive(Debug, Clone, Default)]
pub struct LedgerQuery {
    pub sort: SortKey,
    pub tags: Vec<String>,
    pub kind: KindFilter,
    pub mode: FilterMode,
}

impl LedgerQuery {
    /// Applies the filters and orders the surviving rows by the active key.
    pub fn apply<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Transaction> {
        let wanted = normalize_tags(self.tags.iter().map(String::as_str));
        let mut view: Vec<&Transaction> = ledger
            .transactions()
            .iter()
            .filter(|txn| self.passes(txn, &wanted))
            .collect();
        view.sort_by(|a, b| compare(a, b, self.sort));
        view
    }

    fn passes(&self, txn: &Transaction, wanted: &[String]) -> bool {
        let by_tags = wanted.is_empty() || wanted.iter().all(|tag| txn.tags.contains(tag));
        let by_kind = self.kind.matches(txn.kind);
        match self.mode {
            FilterMode::Tags => by_tags,
            FilterMode::Kind => by_kind,
            FilterMode::Both => by_tags && by_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        for (kind, cents, day, description, tags) in [
            (TransactionKind::Income, 100_000, 5, "Salary", vec![]),
            (TransactionKind::Expense, 5_000, 2, "Lunch", vec!["food"]),
            (
                TransactionKind::Expense,
                5_000,
                3,
                "brunch",
                vec!["food", "weekend"],
            ),
            (TransactionKind::Expense, 3_000, 1, "Bus", vec!["transport"]),
        ] {
            let txn = Transaction::new(
                kind,
                Decimal::new(cents, 2),
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                description,
                tags,
            )
            .unwrap();
            ledger.add_transaction(txn);
        }
        ledger
    }

    #[test]
    fn amount_sort_is_numeric_and_stable() {
        let ledger = ledger();
        let view = sorted_view(&ledger, SortKey::Amount);
        let amounts: Vec<Decimal> = view.iter().map(|txn| txn.amount).collect();
        assert!(amounts.windows(2).all(|pair| pair[0] <= pair[1]));
        // Equal amounts keep entry order: Lunch was recorded before brunch.
        assert_eq!(view[1].description, "Lunch");
        assert_eq!(view[2].description, "brunch");
    }

    #[test]
    fn date_sort_is_chronological() {
        let ledger = ledger();
        let view = sorted_view(&ledger, SortKey::Date);
        let dates: Vec<_> = view.iter().map(|txn| txn.date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn description_sort_folds_case() {
        let ledger = ledger();
        let view = sorted_view(&ledger, SortKey::Description);
        let descriptions: Vec<&str> =
            view.iter().map(|txn| txn.description.as_str()).collect();
        assert_eq!(descriptions, vec!["brunch", "Bus", "Lunch", "Salary"]);
    }

    #[test]
    fn tag_filter_requires_every_requested_tag() {
        let ledger = ledger();
        let query = LedgerQuery {
            tags: vec!["Food".into(), "weekend".into()],
            mode: FilterMode::Tags,
            ..LedgerQuery::default()
        };
        let view = query.apply(&ledger);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].description, "brunch");
    }

    #[test]
    fn mode_kind_ignores_tags() {
        let ledger = ledger();
        let query = LedgerQuery {
            tags: vec!["no-such-tag".into()],
            kind: KindFilter::Income,
            mode: FilterMode::Kind,
            ..LedgerQuery::default()
        };
        let view = query.apply(&ledger);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].description, "Salary");
    }

    #[test]
    fn mode_both_intersects_tag_and_kind_filters() {
        let ledger = ledger();
        let query = LedgerQuery {
            tags: vec!["food".into()],
            kind: KindFilter::Expense,
            mode: FilterMode::Both,
            ..LedgerQuery::default()
        };
        let view = query.apply(&ledger);
        assert_eq!(view.len(), 2);
        assert!(view
            .iter()
            .all(|txn| txn.is_expense() && txn.tags.contains(&"food".to_string())));
    }

    #[test]
    fn filtered_view_is_ordered_by_active_sort_key() {
        let ledger = ledger();
        let query = LedgerQuery {
            sort: SortKey::Date,
            kind: KindFilter::Expense,
            mode: FilterMode::Kind,
            ..LedgerQuery::default()
        };
        let view = query.apply(&ledger);
        let dates: Vec<_> = view.iter().map(|txn| txn.date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn empty_filters_pass_everything() {
        let ledger = ledger();
        let view = LedgerQuery::default().apply(&ledger);
        assert_eq!(view.len(), ledger.transaction_count());
    }
}
