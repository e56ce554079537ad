//! Currency display formatting
//!
//! Symbol prefix, thousands grouping, and per-currency decimal rules.
//! Negative amounts carry a leading minus ahead of the symbol.

use crate::models::{Currency, Money};

/// Render an amount in a currency for display
///
/// Two decimal places and grouped thousands for every currency except
/// JPY, which renders as whole units (rounded half away from zero).
/// Unknown currencies fall back to their code as the symbol.
pub fn format_currency(amount: Money, currency: &Currency) -> String {
    let symbol = currency.symbol();

    if currency.decimal_places() == 0 {
        let whole = amount.round_to_major();
        let body = group_thousands(whole.abs());
        return if whole < 0 {
            format!("-{}{}", symbol, body)
        } else {
            format!("{}{}", symbol, body)
        };
    }

    let body = format!(
        "{}.{:02}",
        group_thousands(amount.major_part().abs()),
        amount.minor_part()
    );
    if amount.is_negative() {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Group a non-negative integer's digits in threes with commas
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
