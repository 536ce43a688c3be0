//! Display helpers for callers that render the roster.
//!
//! Month and weekday names follow the printed Portuguese roster, and money
//! is formatted the pt-BR way (`R$ 1.260,00`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Month names, indexed by zero-based month index.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Abbreviated weekday names, Sunday first.
pub const DAYS_OF_WEEK: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Returns the name of a zero-based month index.
///
/// # Example
///
/// ```
/// use shift_voucher::display::month_name;
///
/// assert_eq!(month_name(1), Some("Fevereiro"));
/// assert_eq!(month_name(12), None);
/// ```
pub fn month_name(month_index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month_index as usize).copied()
}

/// Formats an amount as Brazilian reais.
///
/// Rounds half away from zero to cents, groups thousands with `.` and uses
/// `,` as the decimal separator.
///
/// # Example
///
/// ```
/// use shift_voucher::display::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1260)), "R$ 1.260,00");
/// assert_eq!(format_currency(Decimal::from(-90)), "-R$ 90,00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let cents = (rounded.abs() * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u128()
        .unwrap_or_default();
    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{fraction:02}")
}
