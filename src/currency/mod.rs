//! Money helpers shared across the ledger. Amounts carry two-decimal
//! currency semantics and are rounded once, at the edge where they enter.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::LedgerError;

/// Fractional digits carried by every monetary amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to currency precision, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places for display.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Parses a user-entered amount, accepting surrounding whitespace.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<Decimal>()
        .map(round_money)
        .map_err(|_| LedgerError::Validation(format!("amount `{trimmed}` is not a number")))
}
