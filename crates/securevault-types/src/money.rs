//! Rupee amounts
//!
//! Balances and transfer amounts are `rust_decimal::Decimal` values. On the
//! wire they travel as plain JSON numbers, which is what the remote store
//! holds in its numeric `balance` column.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;

use crate::{Result, TypesError};

/// Balance every new account is opened with
pub const OPENING_BALANCE: Decimal = dec!(1000);

/// Floor a transfer may never take the balance below
pub const MINIMUM_RESERVE: Decimal = dec!(500);

/// Parse a user-typed amount such as `"250"` or `"99.50"`
///
/// Surrounding whitespace, a leading `₹` and thousands separators are
/// accepted. Sign and magnitude are left to the caller's policy.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    Decimal::from_str(cleaned.trim()).map_err(|_| TypesError::InvalidAmount(input.to_string()))
}

/// Format an amount the way the dashboard shows it: `₹1,000.00`
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}₹{}.{}",
        if negative { "-" } else { "" },
        group_indian(whole),
        fraction
    )
}

/// Indian digit grouping: last three digits, then pairs (12,34,567)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
