#![allow(dead_code)]

use chrono::NaiveDate;
use ledger_core::ledger::{Ledger, Transaction, TransactionKind};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn income(ledger: &mut Ledger, cents: i64, on: NaiveDate, description: &str) -> Uuid {
    let txn = Transaction::new(
        TransactionKind::Income,
        money(cents),
        on,
        description,
        Vec::<&str>::new(),
    )
    .unwrap();
    ledger.add_transaction(txn)
}

pub fn expense(
    ledger: &mut Ledger,
    cents: i64,
    on: NaiveDate,
    description: &str,
    tags: &[&str],
) -> Uuid {
    let txn = Transaction::new(
        TransactionKind::Expense,
        money(cents),
        on,
        description,
        tags.iter().copied(),
    )
    .unwrap();
    ledger.add_transaction(txn)
}

/// Salary 1000.00, Lunch 50.00 [food], Bus 30.00 [transport].
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    income(&mut ledger, 100_000, date(2024, 1, 1), "Salary");
    expense(&mut ledger, 5_000, date(2024, 1, 2), "Lunch", &["food"]);
    expense(&mut ledger, 3_000, date(2024, 1, 3), "Bus", &["transport"]);
    ledger
}
